//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate a form session; query handlers read or export it.

pub mod handlers;

pub use handlers::{new_write_lock, FormWriteLock};
