//! In-Memory Form Store Adapter
//!
//! Keeps quick form and wizard sessions in process memory. Sessions do not
//! survive a restart; idle ones are pruned by a background task.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::forms::{QuickReport, Wizard};
use crate::domain::foundation::{DomainError, FormSessionId, Timestamp};
use crate::ports::{QuickReportRepository, WizardRepository};

/// In-memory storage for both form flows.
///
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormStore {
    quick: Arc<RwLock<HashMap<FormSessionId, QuickReport>>>,
    wizards: Arc<RwLock<HashMap<FormSessionId, Wizard>>>,
}

impl InMemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions across both flows.
    pub async fn session_count(&self) -> usize {
        self.quick.read().await.len() + self.wizards.read().await.len()
    }
}

async fn prune<T>(
    map: &RwLock<HashMap<FormSessionId, T>>,
    cutoff: Timestamp,
    updated_at: impl Fn(&T) -> Timestamp,
) -> usize {
    let mut sessions = map.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| !updated_at(session).is_before(&cutoff));
    before - sessions.len()
}

#[async_trait]
impl QuickReportRepository for InMemoryFormStore {
    async fn save(&self, form: &QuickReport) -> Result<(), DomainError> {
        self.quick.write().await.insert(*form.id(), form.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &FormSessionId) -> Result<Option<QuickReport>, DomainError> {
        Ok(self.quick.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &FormSessionId) -> Result<(), DomainError> {
        self.quick.write().await.remove(id);
        Ok(())
    }

    async fn prune_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError> {
        Ok(prune(&self.quick, cutoff, |f: &QuickReport| *f.updated_at()).await)
    }
}

#[async_trait]
impl WizardRepository for InMemoryFormStore {
    async fn save(&self, wizard: &Wizard) -> Result<(), DomainError> {
        self.wizards.write().await.insert(*wizard.id(), wizard.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &FormSessionId) -> Result<Option<Wizard>, DomainError> {
        Ok(self.wizards.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &FormSessionId) -> Result<(), DomainError> {
        self.wizards.write().await.remove(id);
        Ok(())
    }

    async fn prune_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError> {
        Ok(prune(&self.wizards, cutoff, |w: &Wizard| *w.updated_at()).await)
    }
}
