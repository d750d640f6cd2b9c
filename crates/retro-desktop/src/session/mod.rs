//! Login session
//!
//! The shell remembers exactly one thing between page loads: the name of
//! the logged-in user, stored as a plain string under a fixed key.

mod memory;
#[allow(clippy::module_inception)]
mod session;
mod store;

pub use memory::MemoryStore;
pub use session::Session;
pub use store::SessionStore;
