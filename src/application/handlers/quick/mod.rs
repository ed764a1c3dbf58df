//! Quick form command and query handlers.

mod create_quick_report;
mod export_quick_report;
mod generate_quick_report;
mod get_quick_report;
mod reset_quick_report;
mod set_business_name;

pub use create_quick_report::{CreateQuickReportCommand, CreateQuickReportHandler};
pub use export_quick_report::{ExportQuickReportHandler, ExportQuickReportQuery};
pub use generate_quick_report::{GenerateQuickReportCommand, GenerateQuickReportHandler};
pub use get_quick_report::{GetQuickReportHandler, GetQuickReportQuery};
pub use reset_quick_report::{ResetQuickReportCommand, ResetQuickReportHandler};
pub use set_business_name::{SetBusinessNameCommand, SetBusinessNameHandler};

use crate::domain::forms::{FormError, QuickReport};
use crate::domain::foundation::FormSessionId;
use crate::ports::QuickReportRepository;

async fn load(
    repository: &dyn QuickReportRepository,
    form_id: FormSessionId,
) -> Result<QuickReport, FormError> {
    repository
        .find_by_id(&form_id)
        .await?
        .ok_or_else(|| FormError::not_found(form_id))
}
