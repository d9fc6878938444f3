//! In-memory implementation of SessionRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use fitness_core::entities::{NewSession, SessionChanges, WorkoutSession};
use fitness_core::error::DomainError;
use fitness_core::traits::{RepoResult, SessionRepository};
use fitness_core::value_objects::RecordId;

use crate::table::Table;

/// In-memory implementation of SessionRepository
///
/// Member and exercise references are stored as given; nothing here checks
/// that they point at existing records.
#[derive(Debug, Default)]
pub struct MemSessionRepository {
    table: RwLock<Table<WorkoutSession>>,
}

impl MemSessionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_record(&self, session: WorkoutSession) {
        self.table.write().insert(session.id.clone(), session);
    }
}

#[async_trait]
impl SessionRepository for MemSessionRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<WorkoutSession>> {
        Ok(self.table.read().to_vec())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<WorkoutSession>> {
        Ok(self.table.read().get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: &RecordId) -> RepoResult<Vec<WorkoutSession>> {
        Ok(self
            .table
            .read()
            .iter()
            .filter(|s| &s.member_id == member_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, session), fields(member_id = %session.member_id))]
    async fn create(&self, session: NewSession) -> RepoResult<WorkoutSession> {
        let session = WorkoutSession::start(RecordId::generate(), session, Utc::now());
        if !self
            .table
            .write()
            .insert(session.id.clone(), session.clone())
        {
            return Err(DomainError::InternalError(format!(
                "generated session id collided: {}",
                session.id
            )));
        }

        debug!(session_id = %session.id, "Session started");
        Ok(session)
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: &RecordId,
        changes: SessionChanges,
    ) -> RepoResult<Option<WorkoutSession>> {
        if changes.is_empty() {
            return Ok(self.table.read().get(id).cloned());
        }

        let mut table = self.table.write();
        let Some(updated) = table.get(id).map(|s| s.merged(&changes)) else {
            return Ok(None);
        };
        table.replace(id, updated.clone());
        Ok(Some(updated))
    }

    async fn count(&self) -> RepoResult<usize> {
        Ok(self.table.read().len())
    }
}
