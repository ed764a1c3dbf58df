//! Multi-step report wizard.
//!
//! ```text
//! Name ─▶ Industry ─▶ Location ─▶ Description ─▶ Generating ─▶ Report
//!  ◀────────  ◀────────  ◀──────────
//! (back is always allowed from steps 2-4; reset returns to Name from anywhere;
//!  a failed analysis returns Generating to Description)
//! ```
//!
//! Forward moves are gated on the current step's field. Leaving
//! `Description` starts report generation rather than showing another
//! step.

use serde::{Deserialize, Serialize};

use super::{FormError, GenerationTicket};
use crate::domain::foundation::{FormSessionId, StateMachine, Timestamp, ValidationError};
use crate::domain::industry::Industry;
use crate::domain::report::{BusinessInput, GuidedRequest, ReportData, ReportRequest};

/// Description must be strictly longer than this many characters (trimmed).
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Name,
    Industry,
    Location,
    Description,
    Generating,
    Report,
}

impl WizardStep {
    /// One-based step number as shown by a progress indicator.
    ///
    /// `Generating` still counts as step 4; the report is step 5.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Name => 1,
            WizardStep::Industry => 2,
            WizardStep::Location => 3,
            WizardStep::Description | WizardStep::Generating => 4,
            WizardStep::Report => 5,
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Name => Some(WizardStep::Industry),
            WizardStep::Industry => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Description),
            WizardStep::Description => Some(WizardStep::Generating),
            WizardStep::Generating => Some(WizardStep::Report),
            WizardStep::Report => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Industry => Some(WizardStep::Name),
            WizardStep::Location => Some(WizardStep::Industry),
            WizardStep::Description => Some(WizardStep::Location),
            _ => None,
        }
    }

    fn accepts_input(&self) -> bool {
        !matches!(self, WizardStep::Generating | WizardStep::Report)
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        let mut targets: Vec<Self> = self.next().into_iter().chain(self.previous()).collect();
        if *self == WizardStep::Generating {
            targets.push(WizardStep::Description);
        }
        if *self != WizardStep::Name && !targets.contains(&WizardStep::Name) {
            targets.push(WizardStep::Name);
        }
        targets
    }
}

/// Partial update of wizard fields; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardFields {
    pub business_name: Option<String>,
    pub industry: Option<Industry>,
    pub website_url: Option<String>,
    pub target_location: Option<String>,
    pub business_description: Option<String>,
}

impl WizardFields {
    pub fn is_empty(&self) -> bool {
        *self == WizardFields::default()
    }
}

/// Wizard aggregate.
///
/// # Invariants
///
/// - `report` is `Some` exactly when `step` is `Report`
/// - fields are frozen while `Generating` and once the report is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    id: FormSessionId,
    input: BusinessInput,
    step: WizardStep,
    report: Option<ReportData>,
    generation: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Wizard {
    /// Starts a blank wizard at the name step.
    pub fn new(id: FormSessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            input: BusinessInput::default(),
            step: WizardStep::Name,
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

    pub fn input(&self) -> &BusinessInput {
        &self.input
    }

    pub fn step(&self) -> WizardStep {
        self.step
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

    // ─────────────────────────────────────────────────────────────────────────
    // Gates
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks the field owned by the current step.
    pub fn check_step(&self) -> Result<(), ValidationError> {
        let input = &self.input;
        match self.step {
            WizardStep::Name if input.business_name.trim().is_empty() => {
                Err(ValidationError::empty_field("business_name"))
            }
            WizardStep::Industry if input.industry.is_none() => {
                Err(ValidationError::empty_field("industry"))
            }
            WizardStep::Location if input.target_location.trim().is_empty() => {
                Err(ValidationError::empty_field("target_location"))
            }
            WizardStep::Description => {
                let length = input.business_description.trim().chars().count();
                if length > MIN_DESCRIPTION_CHARS {
                    Ok(())
                } else {
                    Err(ValidationError::too_short(
                        "business_description",
                        MIN_DESCRIPTION_CHARS,
                        length,
                    ))
                }
            }
            WizardStep::Generating | WizardStep::Report => Err(ValidationError::invalid_format(
                "step",
                "no further input steps",
            )),
            _ => Ok(()),
        }
    }

    /// Whether the forward control should be enabled.
    pub fn can_advance(&self) -> bool {
        self.check_step().is_ok()
    }

    /// Whether the back control should be enabled.
    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial field update.
    ///
    /// Any field may be edited from any input step, so going back and
    /// changing an earlier answer needs no special handling.
    pub fn update_fields(&mut self, fields: WizardFields) -> Result<(), FormError> {
        if !self.step.accepts_input() {
            return Err(FormError::invalid_state(format!(
                "fields cannot be edited while at step {:?}",
                self.step
            )));
        }
        let WizardFields {
            business_name,
            industry,
            website_url,
            target_location,
            business_description,
        } = fields;

        if let Some(name) = business_name {
            self.input.business_name = name;
        }
        if let Some(industry) = industry {
            self.input.industry = Some(industry);
        }
        if let Some(url) = website_url {
            self.input.website_url = url;
        }
        if let Some(location) = target_location {
            self.input.target_location = location;
        }
        if let Some(description) = business_description {
            self.input.business_description = description;
        }
        self.touch();
        Ok(())
    }

    /// Moves from steps 1-3 to the next step once the current gate passes.
    ///
    /// # Errors
    ///
    /// - `StepIncomplete` if the gate fails
    /// - `InvalidState` at `Description` (use [`Wizard::begin_generation`])
    ///   or later
    pub fn advance(&mut self) -> Result<WizardStep, FormError> {
        if !matches!(
            self.step,
            WizardStep::Name | WizardStep::Industry | WizardStep::Location
        ) {
            return Err(FormError::invalid_state(format!(
                "cannot advance from {:?}",
                self.step
            )));
        }
        self.check_step()?;

        let target = self.step.next().ok_or_else(|| {
            FormError::invalid_state(format!("no step after {:?}", self.step))
        })?;
        self.step = self.step.transition_to(target)?;
        self.touch();
        Ok(self.step)
    }

    /// Moves back one step. Never gated on field validity.
    pub fn back(&mut self) -> Result<WizardStep, FormError> {
        let target = self.step.previous().ok_or_else(|| {
            FormError::invalid_state(format!("cannot go back from {:?}", self.step))
        })?;
        self.step = self.step.transition_to(target)?;
        self.touch();
        Ok(self.step)
    }

    /// Leaves the description step and enters `Generating`.
    ///
    /// # Errors
    ///
    /// - `AlreadyGenerating` while a previous request is in flight
    /// - `InvalidState` from any step other than `Description`
    /// - `StepIncomplete` if the description is too short
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, FormError> {
        match self.step {
            WizardStep::Generating => return Err(FormError::AlreadyGenerating),
            WizardStep::Description => {}
            other => {
                return Err(FormError::invalid_state(format!(
                    "report generation starts from the description step, not {:?}",
                    other
                )))
            }
        }
        self.check_step()?;
        let request = GuidedRequest::from_input(&self.input)?;

        self.step = self.step.transition_to(WizardStep::Generating)?;
        self.generation += 1;
        self.touch();

        Ok(GenerationTicket {
            generation: self.generation,
            request: ReportRequest::Guided(request),
        })
    }

    /// Stores the analyzer's report and moves to the report step.
    pub fn complete_generation(
        &mut self,
        generation: u64,
        report: ReportData,
    ) -> Result<(), FormError> {
        if self.step != WizardStep::Generating || self.generation != generation {
            return Err(FormError::invalid_state(
                "report generation was superseded by a reset",
            ));
        }
        self.step = self.step.transition_to(WizardStep::Report)?;
        self.report = Some(report);
        self.touch();
        Ok(())
    }

    /// Returns to the description step after a failed analysis, keeping
    /// every field. A ticket superseded by a reset is ignored.
    pub fn abort_generation(&mut self, generation: u64) -> Result<(), FormError> {
        if self.step != WizardStep::Generating || self.generation != generation {
            return Ok(());
        }
        self.step = self.step.transition_to(WizardStep::Description)?;
        self.touch();
        Ok(())
    }

    /// Returns to step 1 with every field cleared and the report dropped.
    pub fn reset(&mut self) {
        self.input = BusinessInput::default();
        self.report = None;
        self.step = WizardStep::Name;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::synthesize;

    const DESCRIPTION: &str = "Residential plumbing and emergency repairs.";

    fn fields(
        name: Option<&str>,
        industry: Option<Industry>,
        location: Option<&str>,
        description: Option<&str>,
    ) -> WizardFields {
        WizardFields {
            business_name: name.map(str::to_string),
            industry,
            target_location: location.map(str::to_string),
            business_description: description.map(str::to_string),
            ..Default::default()
        }
    }

    fn at_description() -> Wizard {
        let mut wizard = Wizard::new(FormSessionId::new());
        wizard
            .update_fields(fields(
                Some("Acme Plumbing Co"),
                Some(Industry::Construction),
                Some("Austin, TX"),
                Some(DESCRIPTION),
            ))
            .unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::Description);
        wizard
    }

    #[test]
    fn forward_from_name_blocked_until_non_whitespace() {
        let mut wizard = Wizard::new(FormSessionId::new());
        assert!(!wizard.can_advance());

        wizard.update_fields(fields(Some("   "), None, None, None)).unwrap();
        assert!(!wizard.can_advance());
        assert!(matches!(
            wizard.advance(),
            Err(FormError::StepIncomplete { .. })
        ));
        assert_eq!(wizard.step(), WizardStep::Name);

        wizard.update_fields(fields(Some(" a"), None, None, None)).unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance(), Ok(WizardStep::Industry));
    }

    #[test]
    fn industry_step_requires_selection() {
        let mut wizard = Wizard::new(FormSessionId::new());
        wizard.update_fields(fields(Some("Acme"), None, None, None)).unwrap();
        wizard.advance().unwrap();

        assert!(!wizard.can_advance());
        wizard
            .update_fields(fields(None, Some(Industry::Other), None, None))
            .unwrap();
        assert_eq!(wizard.advance(), Ok(WizardStep::Location));
    }

    #[test]
    fn back_is_ungated_from_steps_two_to_four() {
        let mut wizard = at_description();
        wizard
            .update_fields(fields(None, None, Some(""), Some("short")))
            .unwrap();
        assert!(!wizard.can_advance());

        assert!(wizard.can_go_back());
        assert_eq!(wizard.back(), Ok(WizardStep::Location));
        assert_eq!(wizard.back(), Ok(WizardStep::Industry));
        assert_eq!(wizard.back(), Ok(WizardStep::Name));
        assert!(!wizard.can_go_back());
        assert!(matches!(wizard.back(), Err(FormError::InvalidState(_))));
    }

    #[test]
    fn description_gate_is_strictly_longer_than_minimum() {
        let mut wizard = at_description();
        let exactly_min = "x".repeat(MIN_DESCRIPTION_CHARS);
        wizard
            .update_fields(fields(None, None, None, Some(&exactly_min)))
            .unwrap();
        assert!(matches!(
            wizard.begin_generation(),
            Err(FormError::StepIncomplete { .. })
        ));

        let padded = format!("   {}   ", exactly_min);
        wizard.update_fields(fields(None, None, None, Some(&padded))).unwrap();
        assert!(!wizard.can_advance());

        let long_enough = "x".repeat(MIN_DESCRIPTION_CHARS + 1);
        wizard
            .update_fields(fields(None, None, None, Some(&long_enough)))
            .unwrap();
        assert!(wizard.can_advance());
    }

    #[test]
    fn advance_at_description_points_to_generation() {
        let mut wizard = at_description();
        assert!(matches!(wizard.advance(), Err(FormError::InvalidState(_))));
    }

    #[test]
    fn generation_flow_reaches_report() {
        let mut wizard = at_description();
        let ticket = wizard.begin_generation().unwrap();
        assert_eq!(wizard.step(), WizardStep::Generating);
        assert_eq!(wizard.begin_generation(), Err(FormError::AlreadyGenerating));
        assert!(wizard
            .update_fields(fields(Some("Other"), None, None, None))
            .is_err());

        let report = synthesize(&ticket.request);
        wizard.complete_generation(ticket.generation, report).unwrap();

        assert_eq!(wizard.step(), WizardStep::Report);
        assert_eq!(wizard.step().number(), 5);
        let report = wizard.report().unwrap();
        assert!(report.overview().contains("Acme Plumbing Co"));
        assert!(report.overview().contains("construction"));
    }

    #[test]
    fn reset_from_report_clears_fields() {
        let mut wizard = at_description();
        let ticket = wizard.begin_generation().unwrap();
        wizard
            .complete_generation(ticket.generation, synthesize(&ticket.request))
            .unwrap();

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Name);
        assert_eq!(wizard.input(), &BusinessInput::default());
        assert!(wizard.report().is_none());
    }

    #[test]
    fn completion_after_reset_is_discarded() {
        let mut wizard = at_description();
        let ticket = wizard.begin_generation().unwrap();
        wizard.reset();

        let result = wizard.complete_generation(ticket.generation, synthesize(&ticket.request));
        assert!(matches!(result, Err(FormError::InvalidState(_))));
        assert!(wizard.report().is_none());
    }

    #[test]
    fn website_is_carried_into_request() {
        let mut wizard = at_description();
        wizard
            .update_fields(WizardFields {
                website_url: Some(" acme.example ".to_string()),
                ..Default::default()
            })
            .unwrap();
        let ticket = wizard.begin_generation().unwrap();
        match ticket.request {
            ReportRequest::Guided(request) => {
                assert_eq!(request.website_url.as_deref(), Some("acme.example"))
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn abort_returns_to_description_with_fields() {
        let mut wizard = at_description();
        let ticket = wizard.begin_generation().unwrap();
        wizard.abort_generation(ticket.generation).unwrap();

        assert_eq!(wizard.step(), WizardStep::Description);
        assert_eq!(wizard.input().business_name, "Acme Plumbing Co");
        assert!(wizard.can_advance());
    }

    #[test]
    fn back_is_not_offered_while_generating() {
        let mut wizard = at_description();
        wizard.begin_generation().unwrap();
        assert!(!wizard.can_go_back());
        assert!(matches!(wizard.back(), Err(FormError::InvalidState(_))));
    }

    #[test]
    fn step_machine_edges() {
        use WizardStep::*;
        assert!(Name.can_transition_to(&Industry));
        assert!(!Name.can_transition_to(&Location));
        assert!(Description.can_transition_to(&Generating));
        assert!(Report.can_transition_to(&Name));
        assert!(!Report.can_transition_to(&Description));
        assert_eq!(Name.valid_transitions(), vec![Industry]);
        assert_eq!(Industry.valid_transitions(), vec![Location, Name]);
        assert_eq!(Report.valid_transitions(), vec![Name]);
        assert_eq!(Generating.valid_transitions(), vec![Report, Description, Name]);
    }
}
