//! Application handlers.
//!
//! Command and query handlers for the two report flows. Handlers depend
//! only on ports; the HTTP adapter owns one instance of each.
//!
//! Mutating handlers hold the shared [`FormWriteLock`] across each
//! load-modify-save so a reset cannot interleave with a completion. The
//! lock is never held across the analyzer call.

pub mod quick;
pub mod wizard;

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::domain::forms::{FormError, GenerationTicket};
use crate::domain::report::ReportData;
use crate::ports::ReportAnalyzer;

pub use quick::{
    CreateQuickReportCommand, CreateQuickReportHandler, ExportQuickReportHandler,
    ExportQuickReportQuery, GenerateQuickReportCommand, GenerateQuickReportHandler,
    GetQuickReportHandler, GetQuickReportQuery, ResetQuickReportCommand, ResetQuickReportHandler,
    SetBusinessNameCommand, SetBusinessNameHandler,
};
pub use wizard::{
    AdvanceWizardCommand, AdvanceWizardHandler, CreateWizardHandler, ExportWizardReportHandler,
    ExportWizardReportQuery, GetWizardHandler, GetWizardQuery, ResetWizardCommand,
    ResetWizardHandler, StepBackWizardCommand, StepBackWizardHandler, UpdateWizardFieldsCommand,
    UpdateWizardFieldsHandler,
};

/// Serializes form writes across handlers.
pub type FormWriteLock = Arc<Mutex<()>>;

pub fn new_write_lock() -> FormWriteLock {
    Arc::new(Mutex::new(()))
}

/// Runs the analyzer for a ticket, mapping failures into the form error
/// space.
async fn run_analysis(
    analyzer: &dyn ReportAnalyzer,
    ticket: &GenerationTicket,
) -> Result<ReportData, FormError> {
    analyzer.analyze(&ticket.request).await.map_err(|e| {
        tracing::warn!(
            generation = ticket.generation,
            error = %e,
            "Report analysis failed"
        );
        FormError::analysis(e.to_string())
    })
}

/// Waits for a spawned generation task. Dropping the returned future does
/// not cancel the task.
async fn join_generation<T>(task: JoinHandle<Result<T, FormError>>) -> Result<T, FormError> {
    task.await.map_err(|e| {
        tracing::error!(error = %e, "Report generation task failed");
        FormError::infrastructure(format!("generation task failed: {}", e))
    })?
}
