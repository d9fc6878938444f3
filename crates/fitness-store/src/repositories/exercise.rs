//! In-memory implementation of ExerciseRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use fitness_core::entities::{Exercise, ExerciseChanges, NewExercise};
use fitness_core::error::DomainError;
use fitness_core::traits::{ExerciseRepository, RepoResult};
use fitness_core::value_objects::RecordId;

use crate::table::Table;

/// In-memory implementation of ExerciseRepository
#[derive(Debug, Default)]
pub struct MemExerciseRepository {
    table: RwLock<Table<Exercise>>,
}

impl MemExerciseRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_record(&self, exercise: Exercise) {
        self.table.write().insert(exercise.id.clone(), exercise);
    }
}

#[async_trait]
impl ExerciseRepository for MemExerciseRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Exercise>> {
        Ok(self.table.read().to_vec())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Exercise>> {
        Ok(self.table.read().get(id).cloned())
    }

    #[instrument(skip(self, exercise), fields(name = %exercise.name))]
    async fn create(&self, exercise: NewExercise) -> RepoResult<Exercise> {
        let exercise = Exercise::new(RecordId::generate(), exercise);
        if !self
            .table
            .write()
            .insert(exercise.id.clone(), exercise.clone())
        {
            return Err(DomainError::InternalError(format!(
                "generated exercise id collided: {}",
                exercise.id
            )));
        }

        debug!(exercise_id = %exercise.id, "Exercise stored");
        Ok(exercise)
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: &RecordId,
        changes: ExerciseChanges,
    ) -> RepoResult<Option<Exercise>> {
        if changes.is_empty() {
            return Ok(self.table.read().get(id).cloned());
        }

        let mut table = self.table.write();
        let Some(updated) = table.get(id).map(|e| e.merged(&changes)) else {
            return Ok(None);
        };
        table.replace(id, updated.clone());
        Ok(Some(updated))
    }

    async fn count(&self) -> RepoResult<usize> {
        Ok(self.table.read().len())
    }
}
