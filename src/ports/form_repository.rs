//! Form session repository ports.
//!
//! Each browser tab owns one form session; the HTTP layer looks it up by id
//! on every request and writes it back after each mutation.

use async_trait::async_trait;

use crate::domain::forms::{QuickReport, Wizard};
use crate::domain::foundation::{DomainError, FormSessionId, Timestamp};

/// Repository port for quick form sessions.
#[async_trait]
pub trait QuickReportRepository: Send + Sync {
    /// Insert or replace a session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, form: &QuickReport) -> Result<(), DomainError>;

    /// Find a session by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &FormSessionId) -> Result<Option<QuickReport>, DomainError>;

    /// Delete a session. Deleting a missing session is not an error.
    async fn delete(&self, id: &FormSessionId) -> Result<(), DomainError>;

    /// Drop sessions last touched before `cutoff`, returning how many went.
    async fn prune_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError>;
}

/// Repository port for wizard sessions.
#[async_trait]
pub trait WizardRepository: Send + Sync {
    /// Insert or replace a session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, wizard: &Wizard) -> Result<(), DomainError>;

    /// Find a session by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &FormSessionId) -> Result<Option<Wizard>, DomainError>;

    /// Delete a session. Deleting a missing session is not an error.
    async fn delete(&self, id: &FormSessionId) -> Result<(), DomainError>;

    /// Drop sessions last touched before `cutoff`, returning how many went.
    async fn prune_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_report_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn QuickReportRepository) {}
    }

    #[test]
    fn wizard_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn WizardRepository) {}
    }
}
