//! Single-field report form.
//!
//! The user types a business name and submits; the form sits in
//! `Generating` while the analyzer runs and then shows the report.
//!
//! ```text
//! Idle ──submit──▶ Generating ──done──▶ Shown
//!   ▲                  │                  │
//!   └──────reset───────┴──────reset───────┘
//! ```

use serde::{Deserialize, Serialize};

use super::{FormError, GenerationTicket};
use crate::domain::foundation::{FormSessionId, StateMachine, Timestamp, ValidationError};
use crate::domain::report::{ReportData, ReportRequest};

/// Lifecycle of the quick form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickStatus {
    Idle,
    Generating,
    Shown,
}

impl StateMachine for QuickStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuickStatus::*;
        matches!(
            (self, target),
            (Idle, Generating) | (Generating, Shown) | (Generating, Idle) | (Shown, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuickStatus::*;
        match self {
            Idle => vec![Generating],
            Generating => vec![Shown, Idle],
            Shown => vec![Idle],
        }
    }
}

/// Quick form aggregate.
///
/// # Invariants
///
/// - `report` is `Some` exactly when `status` is `Shown`
/// - at most one generation is in flight (`Generating` blocks resubmission)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickReport {
    id: FormSessionId,
    business_name: String,
    status: QuickStatus,
    report: Option<ReportData>,
    generation: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl QuickReport {
    /// Creates an idle form with an empty name.
    pub fn new(id: FormSessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            business_name: String::new(),
            status: QuickStatus::Idle,
            report: None,
            generation: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &FormSessionId {
        &self.id
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn status(&self) -> QuickStatus {
        self.status
    }

    pub fn report(&self) -> Option<&ReportData> {
        self.report.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Whether the submit control should be enabled.
    pub fn can_generate(&self) -> bool {
        self.status == QuickStatus::Idle && !self.business_name.trim().is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the business name. Only the idle form accepts input.
    pub fn set_business_name(&mut self, name: impl Into<String>) -> Result<(), FormError> {
        if self.status != QuickStatus::Idle {
            return Err(FormError::invalid_state(
                "business name can only be edited before a report is generated",
            ));
        }
        self.business_name = name.into();
        self.touch();
        Ok(())
    }

    /// Submits the form.
    ///
    /// # Errors
    ///
    /// - `AlreadyGenerating` while a previous submission is in flight
    /// - `StepIncomplete` if the trimmed name is empty
    /// - `InvalidState` if a report is already shown
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, FormError> {
        if self.status == QuickStatus::Generating {
            return Err(FormError::AlreadyGenerating);
        }
        let name = self.business_name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("business_name").into());
        }
        let request = ReportRequest::quick(name);

        self.status = self.status.transition_to(QuickStatus::Generating)?;
        self.generation += 1;
        self.touch();

        Ok(GenerationTicket {
            generation: self.generation,
            request,
        })
    }

    /// Stores the analyzer's report and shows it.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the form was reset or resubmitted since the
    ///   ticket was issued
    pub fn complete_generation(
        &mut self,
        generation: u64,
        report: ReportData,
    ) -> Result<(), FormError> {
        if self.status != QuickStatus::Generating || self.generation != generation {
            return Err(FormError::invalid_state(
                "report generation was superseded by a reset",
            ));
        }
        self.status = self.status.transition_to(QuickStatus::Shown)?;
        self.report = Some(report);
        self.touch();
        Ok(())
    }

    /// Returns to `Idle` after a failed analysis, keeping the typed name.
    ///
    /// A ticket that was superseded by a reset is ignored.
    pub fn abort_generation(&mut self, generation: u64) -> Result<(), FormError> {
        if self.status != QuickStatus::Generating || self.generation != generation {
            return Ok(());
        }
        self.status = self.status.transition_to(QuickStatus::Idle)?;
        self.touch();
        Ok(())
    }

    /// Clears the name and discards any report. Always succeeds.
    pub fn reset(&mut self) {
        self.business_name.clear();
        self.report = None;
        self.status = QuickStatus::Idle;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
