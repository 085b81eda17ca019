//! Presentation state machine.
//!
//! Event-driven: render surfaces send [`Intent`]s, the state answers with
//! [`Effect`]s. The canonical menu is never touched from here.

pub mod intent;
pub mod state;

pub use intent::{Effect, Filter, Intent, FILTER_ALL};
pub use state::PresentationState;
