//! Model-View-Intent (MVI) primitives for the dashboard.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State transitions happen only in the reducer, a pure function. Network
//! effects (fetches, mutations) are derived separately and executed by the
//! runtime, which feeds completion intents back into the loop.

/// Marker trait for intent objects: user actions (key presses) and system
/// events (request completions).
pub trait Intent: Send + 'static {}

/// Marker trait for UI state objects.
///
/// States are immutable snapshots: cloned to create new states, comparable
/// to detect changes, and self-contained for rendering.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Reducer transforms state based on intents.
///
/// Must be a pure function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
