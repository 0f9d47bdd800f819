//! State transitions and effect derivation for the dashboard.
//!
//! `DashboardReducer::reduce` is the single pure update function: every UI
//! event and request completion flows through it. `command_for` derives the
//! network effect an intent triggers, evaluated against the state *before*
//! reduction; the runtime executes commands and feeds completions back as
//! intents.

use crate::store::BlogDraft;
use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::{DashboardState, Dialog, Focus, FormMode, FormState, Phase};
use crate::ui::mvi::Reducer;

/// A network effect to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Re-fetch the full collection.
    FetchAll,
    Create(BlogDraft),
    Update(i64, BlogDraft),
    Delete(i64),
}

/// What a submit should do, given the current form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// A required field is empty: no request, blocking alert.
    Reject,
    Create(BlogDraft),
    Update(i64, BlogDraft),
}

/// Decide what submitting the current form means.
///
/// Values are sent as typed; only the emptiness check trims.
pub fn submit_plan(state: &DashboardState) -> SubmitPlan {
    let form = &state.form;
    if form.title.trim().is_empty() || form.content.trim().is_empty() {
        return SubmitPlan::Reject;
    }

    let draft = BlogDraft::new(form.title.clone(), form.content.clone());
    match form.mode {
        FormMode::Creating => SubmitPlan::Create(draft),
        FormMode::Editing(id) => SubmitPlan::Update(id, draft),
    }
}

/// Derive the network effect an intent triggers, if any.
///
/// Must be called on the pre-reduction state: a submit needs the form as
/// typed, before `SubmitSettled` would reset it.
pub fn command_for(state: &DashboardState, intent: &DashboardIntent) -> Option<Command> {
    match intent {
        DashboardIntent::FetchStarted => Some(Command::FetchAll),
        DashboardIntent::SubmitPressed => {
            if state.dialog_open() || state.phase == Phase::Submitting {
                return None;
            }
            match submit_plan(state) {
                SubmitPlan::Reject => None,
                SubmitPlan::Create(draft) => Some(Command::Create(draft)),
                SubmitPlan::Update(id, draft) => Some(Command::Update(id, draft)),
            }
        }
        DashboardIntent::ConfirmDelete => match state.dialog {
            Dialog::ConfirmDelete(id) => Some(Command::Delete(id)),
            _ => None,
        },
        // Mutations always resync, whether they succeeded or not.
        DashboardIntent::SubmitSettled | DashboardIntent::DeleteSettled => {
            Some(Command::FetchAll)
        }
        _ => None,
    }
}

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::FetchStarted => DashboardState {
                phase: Phase::Loading,
                ..state
            },
            DashboardIntent::FetchCompleted(blogs) => {
                let selected = if blogs.is_empty() {
                    0
                } else {
                    state.selected.min(blogs.len() - 1)
                };
                DashboardState {
                    phase: Phase::Ready,
                    blogs,
                    selected,
                    ..state
                }
            }
            // Keep whatever cache we had; the view simply does not update.
            DashboardIntent::FetchFailed => DashboardState {
                phase: Phase::Ready,
                ..state
            },

            DashboardIntent::Input(c) => edit_focused_field(state, |field| field.push(c)),
            DashboardIntent::Backspace => edit_focused_field(state, |field| {
                field.pop();
            }),
            DashboardIntent::FocusNext => DashboardState {
                focus: match state.focus {
                    Focus::Title => Focus::Content,
                    Focus::Content => Focus::Table,
                    Focus::Table => Focus::Title,
                },
                ..state
            },

            DashboardIntent::SelectUp => DashboardState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            DashboardIntent::SelectDown => {
                let last = state.blogs.len().saturating_sub(1);
                DashboardState {
                    selected: (state.selected + 1).min(last),
                    ..state
                }
            }

            DashboardIntent::SubmitPressed => {
                if state.dialog_open() || state.phase == Phase::Submitting {
                    return state;
                }
                match submit_plan(&state) {
                    SubmitPlan::Reject => DashboardState {
                        dialog: Dialog::Alert("Please fill in all fields".to_string()),
                        ..state
                    },
                    SubmitPlan::Create(_) | SubmitPlan::Update(_, _) => DashboardState {
                        phase: Phase::Submitting,
                        ..state
                    },
                }
            }
            DashboardIntent::SubmitSettled => DashboardState {
                phase: Phase::Loading,
                form: FormState::default(),
                ..state
            },

            DashboardIntent::EditSelected => match state.selected_blog() {
                Some(post) => {
                    let form = FormState {
                        title: post.title.clone(),
                        content: post.content.clone(),
                        mode: FormMode::Editing(post.id),
                    };
                    // Focus jumps to the form: the TUI equivalent of
                    // scrolling the page back to the top.
                    DashboardState {
                        form,
                        focus: Focus::Title,
                        ..state
                    }
                }
                None => state,
            },
            DashboardIntent::NewBlog => DashboardState {
                form: FormState::default(),
                focus: Focus::Title,
                ..state
            },

            DashboardIntent::DeleteSelected => match state.selected_blog() {
                Some(post) => DashboardState {
                    dialog: Dialog::ConfirmDelete(post.id),
                    ..state
                },
                None => state,
            },
            DashboardIntent::ConfirmDelete => match state.dialog {
                Dialog::ConfirmDelete(_) => DashboardState {
                    dialog: Dialog::None,
                    phase: Phase::Submitting,
                    ..state
                },
                _ => state,
            },
            DashboardIntent::DeleteSettled => DashboardState {
                phase: Phase::Loading,
                ..state
            },

            DashboardIntent::CancelDialog => DashboardState {
                dialog: Dialog::None,
                ..state
            },

            DashboardIntent::UserLoaded(name) => DashboardState {
                user: Some(name),
                ..state
            },
        }
    }
}

fn edit_focused_field(state: DashboardState, apply: impl FnOnce(&mut String)) -> DashboardState {
    if state.dialog_open() {
        return state;
    }
    let mut form = state.form.clone();
    match state.focus {
        Focus::Title => apply(&mut form.title),
        Focus::Content => apply(&mut form.content),
        Focus::Table => return state,
    }
    DashboardState { form, ..state }
}
