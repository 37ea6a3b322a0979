//! Application layer containing state, events, and transition logic.
//!
//! This layer is pure with respect to I/O: it owns the state store, derives
//! the view from it, and answers every event with a render flag plus a list
//! of actions for the runtime to execute. Nothing here touches the network
//! or the terminal.

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputFocus;
pub use state::{AppState, SearchView};
