//! HTTP adapter for the multi-step report wizard.
//!
//! - `POST /api/wizard` - Start a wizard
//! - `GET /api/wizard/:id` - Step, fields, gates, and report
//! - `PATCH /api/wizard/:id/fields` - Edit fields
//! - `POST /api/wizard/:id/next` - Advance (generates the report from step 4)
//! - `POST /api/wizard/:id/back` - Go back one step
//! - `POST /api/wizard/:id/reset` - Start over
//! - `GET /api/wizard/:id/export` - Download as HTML or markdown

mod dto;
mod handlers;
mod routes;

pub use dto::{UpdateWizardFieldsRequest, WizardResponse, INPUT_STEPS};
pub use handlers::WizardHandlers;
pub use routes::wizard_routes;
