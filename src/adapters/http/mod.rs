//! HTTP adapters - REST API implementations.
//!
//! Each form flow has its own HTTP adapter (dto, handlers, routes); `app`
//! assembles them into one router.

mod app;
mod error;
mod export;
mod health;
pub mod industries;
pub mod quick;
pub mod wizard;

pub use app::{build_router, AppServices};
pub use error::{form_error_response, ErrorResponse};
pub use export::ExportQuery;
pub use health::HealthResponse;
