//! Interaction state machine deriving start/end selection from user events.
mod event;
mod reducer;
mod state;

pub use event::InteractionEvent;
pub use reducer::{SelectionReducer, Transition};
pub use state::{Phase, SelectionState};
