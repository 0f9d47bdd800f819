use crate::store::BlogPost;
use crate::ui::mvi::Intent;

/// Everything that can happen to the dashboard: key-driven actions and
/// request completions fed back by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardIntent {
    /// A list fetch was issued (on mount and after every mutation).
    FetchStarted,
    /// The list fetch resolved; replace the cache wholesale.
    FetchCompleted(Vec<BlogPost>),
    /// The list fetch failed. Logged by the runtime; the cache is kept
    /// as-is and the view simply does not update.
    FetchFailed,

    /// A printable character typed into the focused form field.
    Input(char),
    Backspace,
    /// Cycle focus Title → Content → Table.
    FocusNext,

    /// Move the table selection.
    SelectUp,
    SelectDown,

    /// Submit pressed. With an empty field this raises a blocking alert
    /// and nothing else; otherwise the runtime issues create or update.
    SubmitPressed,
    /// The create/update settled (success or failure — failure is only
    /// logged). The form resets and a resync follows.
    SubmitSettled,

    /// Copy the selected record's fields into the form and switch to
    /// editing it. Uses the cache; no network call.
    EditSelected,
    /// Reset the form to an empty create, from any state.
    NewBlog,

    /// Ask for confirmation before deleting the selected record.
    DeleteSelected,
    /// Confirmation given; the runtime issues the delete.
    ConfirmDelete,
    /// The delete settled (success or failure); a resync follows.
    DeleteSettled,

    /// Dismiss the current dialog (alert acknowledged or delete declined).
    CancelDialog,

    /// The `/user` lookup resolved; failures are logged and ignored.
    UserLoaded(String),
}

impl Intent for DashboardIntent {}
