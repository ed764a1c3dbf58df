//! Form-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, FormSessionId, ValidationError};

/// Errors raised by the quick form and the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No form session with this id.
    NotFound(FormSessionId),
    /// The current step's gate did not pass.
    StepIncomplete { field: String, message: String },
    /// The requested transition is not legal from the current state.
    InvalidState(String),
    /// A report is already being generated for this form.
    AlreadyGenerating,
    /// The analyzer failed to produce a report.
    Analysis(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl FormError {
    pub fn not_found(id: FormSessionId) -> Self {
        FormError::NotFound(id)
    }
    pub fn step_incomplete(field: impl Into<String>, message: impl Into<String>) -> Self {
        FormError::StepIncomplete {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        FormError::InvalidState(message.into())
    }
    pub fn analysis(message: impl Into<String>) -> Self {
        FormError::Analysis(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        FormError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            FormError::NotFound(_) => ErrorCode::FormNotFound,
            FormError::StepIncomplete { .. } => ErrorCode::StepIncomplete,
            FormError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            FormError::AlreadyGenerating => ErrorCode::AlreadyGenerating,
            FormError::Analysis(_) => ErrorCode::AnalysisFailed,
            FormError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            FormError::NotFound(id) => format!("Form session not found: {}", id),
            FormError::StepIncomplete { message, .. } => message.clone(),
            FormError::InvalidState(msg) => format!("Invalid state: {}", msg),
            FormError::AlreadyGenerating => "A report is already being generated".to_string(),
            FormError::Analysis(msg) => format!("Analysis failed: {}", msg),
            FormError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FormError {}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        if err.field() == "state_transition" {
            return FormError::InvalidState(err.to_string());
        }
        FormError::StepIncomplete {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for FormError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => FormError::InvalidState(err.message),
            ErrorCode::AlreadyGenerating => FormError::AlreadyGenerating,
            ErrorCode::ValidationFailed | ErrorCode::StepIncomplete => FormError::StepIncomplete {
                field: err.field.unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::AnalysisFailed => FormError::Analysis(err.message),
            ErrorCode::FormNotFound | ErrorCode::StorageError => {
                FormError::Infrastructure(err.to_string())
            }
        }
    }
}
