//! Hand-off between a form entering its generating state and the analyzer.

use crate::domain::report::ReportRequest;

/// Issued by `begin_generation`; must be presented to `complete_generation`.
///
/// The generation number guards against a report landing on a form that was
/// reset (and possibly resubmitted) while the analyzer was still running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub generation: u64,
    pub request: ReportRequest,
}
