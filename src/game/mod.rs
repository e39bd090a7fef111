//! Game session state machine

mod session;

pub use session::{GameState, GuessRecord, Session};
