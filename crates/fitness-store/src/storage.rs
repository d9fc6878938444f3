//! Storage handle bundling the per-entity repositories

use std::sync::Arc;

use tracing::info;

use crate::fixtures;
use crate::repositories::{MemExerciseRepository, MemMemberRepository, MemSessionRepository};

/// One independent in-memory store.
///
/// Cloning shares the underlying tables; two values built with [`MemStorage::new`]
/// never see each other's records.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    members: Arc<MemMemberRepository>,
    exercises: Arc<MemExerciseRepository>,
    sessions: Arc<MemSessionRepository>,
}

impl MemStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the demo fixtures
    pub fn seeded() -> Self {
        let storage = Self::new();
        let loaded = fixtures::load(&storage);
        info!(
            members = loaded.members,
            exercises = loaded.exercises,
            sessions = loaded.sessions,
            "Storage seeded with fixtures"
        );
        storage
    }

    pub fn members(&self) -> Arc<MemMemberRepository> {
        Arc::clone(&self.members)
    }

    pub fn exercises(&self) -> Arc<MemExerciseRepository> {
        Arc::clone(&self.exercises)
    }

    pub fn sessions(&self) -> Arc<MemSessionRepository> {
        Arc::clone(&self.sessions)
    }
}
