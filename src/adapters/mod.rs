//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory form session storage
//! - `analysis` - Simulated report analyzer
//! - `document` - Markdown and printable HTML export
//! - `http` - axum routers for the quick form, wizard, and industries

pub mod analysis;
pub mod document;
pub mod http;
pub mod memory;
