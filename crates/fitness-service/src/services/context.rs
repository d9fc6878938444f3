//! Service context - dependency container for services
//!
//! Holds the repositories and the workout policy needed by services.

use std::sync::Arc;

use fitness_common::WorkoutPolicy;
use fitness_core::traits::{ExerciseRepository, MemberRepository, SessionRepository};
use fitness_store::MemStorage;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// Repositories are trait objects so a persistent engine can replace the
/// in-memory one without touching the services.
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    exercise_repo: Arc<dyn ExerciseRepository>,
    session_repo: Arc<dyn SessionRepository>,
    workout_policy: WorkoutPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        exercise_repo: Arc<dyn ExerciseRepository>,
        session_repo: Arc<dyn SessionRepository>,
        workout_policy: WorkoutPolicy,
    ) -> Self {
        Self {
            member_repo,
            exercise_repo,
            session_repo,
            workout_policy,
        }
    }

    /// Wire every repository to one in-memory store
    pub fn in_memory(storage: &MemStorage, workout_policy: WorkoutPolicy) -> Self {
        Self::new(
            storage.members(),
            storage.exercises(),
            storage.sessions(),
            workout_policy,
        )
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the exercise repository
    pub fn exercise_repo(&self) -> &dyn ExerciseRepository {
        self.exercise_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === Policy ===

    pub fn workout_policy(&self) -> WorkoutPolicy {
        self.workout_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("workout_policy", &self.workout_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    exercise_repo: Option<Arc<dyn ExerciseRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    workout_policy: WorkoutPolicy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn exercise_repo(mut self, repo: Arc<dyn ExerciseRepository>) -> Self {
        self.exercise_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn workout_policy(mut self, policy: WorkoutPolicy) -> Self {
        self.workout_policy = policy;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.exercise_repo
                .ok_or_else(|| ServiceError::validation("exercise_repo is required"))?,
            self.session_repo
                .ok_or_else(|| ServiceError::validation("session_repo is required"))?,
            self.workout_policy,
        ))
    }
}
