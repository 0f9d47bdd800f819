//! The dashboard event loop.
//!
//! Holds the current state, routes key presses through the reducer, and
//! executes the network commands the reducer's companion `command_for`
//! derives. Request completions come back through the same channel as
//! terminal events, so the view re-renders as soon as a resync lands.
//!
//! Failure policy, deliberately simple: every failed request is logged and
//! otherwise swallowed — the view keeps its last cache and the follow-up
//! resync still runs.

use std::io;

use tokio::sync::mpsc::{self, UnboundedSender};

use crate::client::BlogApiClient;
use crate::config::Config;
use crate::ui::dashboard::{command_for, Command, DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::events::{action_for_key, spawn_input_thread, AppEvent, KeyAction};
use crate::ui::mvi::Reducer;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let client = BlogApiClient::new(&config.api)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_thread(tx.clone());

    let (mut terminal, guard) = setup_terminal()
        .map_err(|err: io::Error| anyhow::anyhow!("Failed to set up terminal: {err}"))?;

    let mut state = DashboardState::default();

    // Mount: fetch the collection and, separately, the caller identity.
    dispatch_intent(&mut state, DashboardIntent::FetchStarted, &client, &tx);
    spawn_user_lookup(client.clone(), tx.clone());

    loop {
        terminal.draw(|frame| draw(frame, &state))?;

        let Some(event) = rx.recv().await else { break };
        match event {
            AppEvent::Key(key) => match action_for_key(&state, key) {
                KeyAction::Quit => break,
                KeyAction::Dispatch(intent) => {
                    dispatch_intent(&mut state, intent, &client, &tx);
                }
                KeyAction::Noop => {}
            },
            AppEvent::Intent(intent) => {
                dispatch_intent(&mut state, intent, &client, &tx);
            }
            AppEvent::Resize => {} // redraw happens at the top of the loop
        }
    }

    drop(guard);
    Ok(())
}

/// Run one intent through the reducer and execute the command it implies.
fn dispatch_intent(
    state: &mut DashboardState,
    intent: DashboardIntent,
    client: &BlogApiClient,
    tx: &UnboundedSender<AppEvent>,
) {
    let command = command_for(state, &intent);
    *state = DashboardReducer::reduce(state.clone(), intent);
    if let Some(command) = command {
        execute(command, client.clone(), tx.clone());
    }
}

/// Execute a network command on a background task, feeding the completion
/// back into the event loop as an intent.
fn execute(command: Command, client: BlogApiClient, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let completion = match command {
            Command::FetchAll => match client.list_blogs().await {
                Ok(blogs) => DashboardIntent::FetchCompleted(blogs),
                Err(err) => {
                    tracing::error!("Error fetching blogs: {err}");
                    DashboardIntent::FetchFailed
                }
            },
            Command::Create(draft) => {
                if let Err(err) = client.create_blog(&draft).await {
                    tracing::error!("Error saving blog: {err}");
                }
                DashboardIntent::SubmitSettled
            }
            Command::Update(id, draft) => {
                if let Err(err) = client.update_blog(id, &draft).await {
                    tracing::error!("Error saving blog: {err}");
                }
                DashboardIntent::SubmitSettled
            }
            Command::Delete(id) => {
                if let Err(err) = client.delete_blog(id).await {
                    tracing::error!("Error deleting blog: {err}");
                }
                DashboardIntent::DeleteSettled
            }
        };
        let _ = tx.send(AppEvent::Intent(completion));
    });
}

fn spawn_user_lookup(client: BlogApiClient, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        match client.current_user().await {
            Ok(profile) => {
                let _ = tx.send(AppEvent::Intent(DashboardIntent::UserLoaded(profile.name)));
            }
            Err(err) => {
                tracing::debug!("User lookup failed: {err}");
            }
        }
    });
}
