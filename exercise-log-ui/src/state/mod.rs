//! Application State
//!
//! Global notices plus the per-view pieces pages use to coordinate.

pub mod global;
pub mod lifetime;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use lifetime::ViewLifetime;
pub use session::{provide_edit_session, use_edit_session, EditSession, EditSlot, Navigator};
