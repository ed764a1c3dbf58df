//! Form controllers for the two report flows.
//!
//! - `quick` - single business-name field; industry is inferred
//! - `wizard` - four gated steps followed by the report
//!
//! Both hand a [`GenerationTicket`] to the analyzer and accept the report
//! back only if the form has not been reset in the meantime.

mod errors;
mod quick;
mod ticket;
mod wizard;

pub use errors::FormError;
pub use quick::{QuickReport, QuickStatus};
pub use ticket::GenerationTicket;
pub use wizard::{Wizard, WizardFields, WizardStep, MIN_DESCRIPTION_CHARS};
