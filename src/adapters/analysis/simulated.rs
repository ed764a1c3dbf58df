//! Simulated analyzer.
//!
//! Waits for a configured delay, then runs the deterministic synthesizer.
//! The delay stands in for the latency of a real analysis backend so the
//! forms' loading states are observable.
//!
//! ```ignore
//! let analyzer = SimulatedAnalyzer::new(Duration::from_millis(2000));
//! let report = analyzer.analyze(&ReportRequest::quick("Acme")).await?;
//! ```

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::report::{synthesize, ReportData, ReportRequest};
use crate::ports::{AnalysisError, ReportAnalyzer};

/// Default simulated latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Analyzer that sleeps then synthesizes.
///
/// Cancel-safe: the only await point is the sleep, so dropping the future
/// abandons the analysis without producing anything.
#[derive(Debug, Clone)]
pub struct SimulatedAnalyzer {
    delay: Duration,
}

impl SimulatedAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Analyzer with no delay, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl ReportAnalyzer for SimulatedAnalyzer {
    async fn analyze(&self, request: &ReportRequest) -> Result<ReportData, AnalysisError> {
        if request.business_name().trim().is_empty() {
            return Err(AnalysisError::invalid_request("business name is blank"));
        }

        tracing::debug!(
            business_name = %request.business_name(),
            delay_ms = self.delay.as_millis() as u64,
            "Simulating report analysis"
        );
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let report = synthesize(request);
        tracing::info!(
            business_name = %report.business_name(),
            industry = %report.industry(),
            variant = ?report.variant(),
            "Report synthesized"
        );
        Ok(report)
    }
}
