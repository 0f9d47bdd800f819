use crate::store::BlogPost;
use crate::ui::mvi::UiState;

/// Complete dashboard state: one serializable snapshot of everything the
/// view needs. The blog list is a disposable cache of the server's
/// authoritative collection, rebuilt wholesale after every mutation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub phase: Phase,
    /// Cached copy of the collection, for rendering only.
    pub blogs: Vec<BlogPost>,
    pub form: FormState,
    pub dialog: Dialog,
    pub focus: Focus,
    /// Selected row in the blog table.
    pub selected: usize,
    /// Authenticated identity from `/user`, when credentials are configured.
    pub user: Option<String>,
}

/// Synchronization phase with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Before the first fetch is issued.
    #[default]
    Idle,
    /// A list fetch is in flight.
    Loading,
    /// Cache is populated (or a fetch failed and we kept what we had).
    Ready,
    /// A create/update is in flight.
    Submitting,
}

/// The create/edit form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub title: String,
    pub content: String,
    pub mode: FormMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(i64),
}

/// Modal layer: blocking alert or delete confirmation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
    #[default]
    None,
    Alert(String),
    ConfirmDelete(i64),
}

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Content,
    Table,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn selected_blog(&self) -> Option<&BlogPost> {
        self.blogs.get(self.selected)
    }

    pub fn dialog_open(&self) -> bool {
        !matches!(self.dialog, Dialog::None)
    }

    /// True while a list fetch is outstanding; the table shows a loading
    /// indicator instead of the cached rows.
    pub fn loading(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading)
    }
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }
}
