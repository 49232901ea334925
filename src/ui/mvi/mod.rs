//! Model-View-Intent primitives for the UI layer.
//!
//! Unidirectional data flow: an intent (user action) is fed to a reducer,
//! the reducer produces the next state, and the view is drawn from state
//! alone. Reducers are pure; everything with a side effect (network,
//! location carrier) lives in [`crate::ui::app::App`] around them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
