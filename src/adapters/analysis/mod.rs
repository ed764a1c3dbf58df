//! Report analyzer adapters.

mod simulated;

pub use simulated::SimulatedAnalyzer;
