//! Terminal event plumbing and key-to-intent mapping.
//!
//! A dedicated thread blocks on crossterm events and forwards them into the
//! runtime's channel, alongside the completion intents sent by network
//! tasks. Mapping a key to an intent depends on the current state (dialogs
//! capture input; the form and the table have different bindings).

use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::ui::dashboard::{DashboardIntent, DashboardState, Dialog, Focus};

/// Events consumed by the runtime loop.
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Completion intent from a network task.
    Intent(DashboardIntent),
}

/// What a key press should do.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Dispatch(DashboardIntent),
    Noop,
}

/// Spawn the blocking input-reader thread.
///
/// Exits when the receiving side hangs up.
pub fn spawn_input_thread(tx: UnboundedSender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(Duration::from_millis(200)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(_) => break,
        }
        let forwarded = match event::read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                tx.send(AppEvent::Key(key))
            }
            Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize),
            Ok(_) => Ok(()),
            Err(_) => break,
        };
        if forwarded.is_err() {
            break;
        }
    });
}

/// Map a key press to an action, given the current state.
pub fn action_for_key(state: &DashboardState, key: KeyEvent) -> KeyAction {
    use DashboardIntent as I;

    // Ctrl-C always quits, dialogs notwithstanding.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    // A dialog captures all input until resolved.
    match &state.dialog {
        Dialog::Alert(_) => {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => KeyAction::Dispatch(I::CancelDialog),
                _ => KeyAction::Noop,
            }
        }
        Dialog::ConfirmDelete(_) => {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    KeyAction::Dispatch(I::ConfirmDelete)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    KeyAction::Dispatch(I::CancelDialog)
                }
                _ => KeyAction::Noop,
            }
        }
        Dialog::None => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => KeyAction::Dispatch(I::NewBlog),
            _ => KeyAction::Noop,
        };
    }

    match (state.focus, key.code) {
        (_, KeyCode::Tab) => KeyAction::Dispatch(I::FocusNext),

        (Focus::Title | Focus::Content, KeyCode::Enter) => KeyAction::Dispatch(I::SubmitPressed),
        (Focus::Title | Focus::Content, KeyCode::Backspace) => KeyAction::Dispatch(I::Backspace),
        (Focus::Title | Focus::Content, KeyCode::Char(c)) => KeyAction::Dispatch(I::Input(c)),
        (Focus::Title | Focus::Content, KeyCode::Esc) => KeyAction::Quit,

        (Focus::Table, KeyCode::Up | KeyCode::Char('k')) => KeyAction::Dispatch(I::SelectUp),
        (Focus::Table, KeyCode::Down | KeyCode::Char('j')) => KeyAction::Dispatch(I::SelectDown),
        (Focus::Table, KeyCode::Enter | KeyCode::Char('e')) => KeyAction::Dispatch(I::EditSelected),
        (Focus::Table, KeyCode::Char('d') | KeyCode::Delete) => {
            KeyAction::Dispatch(I::DeleteSelected)
        }
        (Focus::Table, KeyCode::Char('n')) => KeyAction::Dispatch(I::NewBlog),
        (Focus::Table, KeyCode::Char('q') | KeyCode::Esc) => KeyAction::Quit,

        _ => KeyAction::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::store::BlogPost;
    use crate::ui::dashboard::Phase;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn table_state() -> DashboardState {
        let now = Utc::now();
        DashboardState {
            phase: Phase::Ready,
            focus: Focus::Table,
            blogs: vec![BlogPost {
                id: 1,
                title: "A".to_string(),
                content: "B".to_string(),
                created_at: now,
                updated_at: now,
            }],
            ..DashboardState::default()
        }
    }

    #[test]
    fn typing_in_the_form_becomes_input() {
        let state = DashboardState::default();
        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('x'))),
            KeyAction::Dispatch(DashboardIntent::Input('x'))
        );
    }

    #[test]
    fn enter_in_the_form_submits() {
        let state = DashboardState::default();
        assert_eq!(
            action_for_key(&state, key(KeyCode::Enter)),
            KeyAction::Dispatch(DashboardIntent::SubmitPressed)
        );
    }

    #[test]
    fn table_keys_edit_delete_and_navigate() {
        let state = table_state();
        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('e'))),
            KeyAction::Dispatch(DashboardIntent::EditSelected)
        );
        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('d'))),
            KeyAction::Dispatch(DashboardIntent::DeleteSelected)
        );
        assert_eq!(
            action_for_key(&state, key(KeyCode::Down)),
            KeyAction::Dispatch(DashboardIntent::SelectDown)
        );
        assert_eq!(action_for_key(&state, key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn confirm_dialog_captures_keys() {
        let mut state = table_state();
        state.dialog = Dialog::ConfirmDelete(1);

        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('y'))),
            KeyAction::Dispatch(DashboardIntent::ConfirmDelete)
        );
        assert_eq!(
            action_for_key(&state, key(KeyCode::Esc)),
            KeyAction::Dispatch(DashboardIntent::CancelDialog)
        );
        // Table bindings are inert while the dialog is up.
        assert_eq!(action_for_key(&state, key(KeyCode::Char('e'))), KeyAction::Noop);
    }

    #[test]
    fn alert_dismisses_on_enter() {
        let mut state = DashboardState::default();
        state.dialog = Dialog::Alert("Please fill in all fields".to_string());

        assert_eq!(
            action_for_key(&state, key(KeyCode::Enter)),
            KeyAction::Dispatch(DashboardIntent::CancelDialog)
        );
        assert_eq!(action_for_key(&state, key(KeyCode::Char('z'))), KeyAction::Noop);
    }

    #[test]
    fn ctrl_c_quits_even_with_a_dialog_open() {
        let mut state = DashboardState::default();
        state.dialog = Dialog::Alert("x".to_string());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&state, ctrl_c), KeyAction::Quit);
    }
}
