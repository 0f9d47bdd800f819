//! Dashboard feature: state, intents, and the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::DashboardIntent;
pub use reducer::{command_for, Command, DashboardReducer};
pub use state::{DashboardState, Dialog, Focus, FormMode, FormState, Phase};
