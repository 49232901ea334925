//! User controls: category selector, grid width, search box.

mod intent;
mod reducer;
mod state;

pub use intent::ControlsIntent;
pub use reducer::ControlsReducer;
pub use state::ControlsState;
