//! In-memory implementation of MemberRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use fitness_core::entities::{Member, MemberChanges, NewMember};
use fitness_core::error::DomainError;
use fitness_core::traits::{MemberRepository, RepoResult};
use fitness_core::value_objects::RecordId;

use crate::table::Table;

/// In-memory implementation of MemberRepository
///
/// Email uniqueness is checked under the same write lock as the insert,
/// so two concurrent creations with one email cannot both succeed.
#[derive(Debug, Default)]
pub struct MemMemberRepository {
    table: RwLock<Table<Member>>,
}

impl MemMemberRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully built member as-is (fixture loading)
    pub(crate) fn insert_record(&self, member: Member) {
        self.table.write().insert(member.id.clone(), member);
    }
}

#[async_trait]
impl MemberRepository for MemMemberRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Member>> {
        Ok(self.table.read().to_vec())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Member>> {
        Ok(self.table.read().get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .table
            .read()
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    #[instrument(skip(self, member), fields(email = %member.email))]
    async fn create(&self, member: NewMember) -> RepoResult<Member> {
        let mut table = self.table.write();

        if table.iter().any(|m| m.email == member.email) {
            return Err(DomainError::EmailAlreadyExists(member.email));
        }

        let member = Member::new(RecordId::generate(), member, Utc::now());
        if !table.insert(member.id.clone(), member.clone()) {
            return Err(DomainError::InternalError(format!(
                "generated member id collided: {}",
                member.id
            )));
        }

        debug!(member_id = %member.id, "Member stored");
        Ok(member)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: &RecordId, changes: MemberChanges) -> RepoResult<Option<Member>> {
        if changes.is_empty() {
            return Ok(self.table.read().get(id).cloned());
        }

        let mut table = self.table.write();

        let Some(existing) = table.get(id) else {
            return Ok(None);
        };

        if let Some(email) = &changes.email {
            if table.iter().any(|m| &m.email == email && &m.id != id) {
                return Err(DomainError::EmailAlreadyExists(email.clone()));
            }
        }

        let updated = existing.merged(&changes);
        table.replace(id, updated.clone());
        Ok(Some(updated))
    }

    async fn count(&self) -> RepoResult<usize> {
        Ok(self.table.read().len())
    }
}
