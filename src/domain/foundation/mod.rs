//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait, and error
//! types shared by the report and form modules.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::FormSessionId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
