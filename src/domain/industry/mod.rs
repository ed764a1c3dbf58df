//! Industry categories and name-based industry inference.

mod category;
mod classifier;

pub use category::Industry;
pub use classifier::{classify, DEFAULT_INDUSTRY, INDUSTRY_KEYWORDS};
