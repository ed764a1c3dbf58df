//! HTTP adapter for the single-field quick report form.
//!
//! - `POST /api/quick` - Open a form
//! - `GET /api/quick/:id` - Form state and report
//! - `PUT /api/quick/:id/name` - Edit the business name
//! - `POST /api/quick/:id/generate` - Generate the report
//! - `POST /api/quick/:id/reset` - Start over
//! - `GET /api/quick/:id/export` - Download as HTML or markdown

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateQuickReportRequest, QuickReportResponse, SetBusinessNameRequest};
pub use handlers::QuickReportHandlers;
pub use routes::quick_routes;
