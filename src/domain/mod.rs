//! Domain values exchanged with the platform backend.

pub mod founder_pool;
pub mod phase;
pub mod settings;
pub mod types;
pub mod users;
pub mod wallet;
