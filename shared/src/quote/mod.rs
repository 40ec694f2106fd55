//! Quote types, state and actions

pub mod action;
pub mod state;
pub mod types;

pub use action::QuoteAction;
pub use state::QuoteState;
pub use types::*;
