//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the storage layer provides
//! the implementation. Lookups report absence as `Ok(None)`; an `Err` is
//! reserved for real failures (conflicts, unavailable storage).

use async_trait::async_trait;

use crate::entities::{
    Exercise, ExerciseChanges, Member, MemberChanges, NewExercise, NewMember, NewSession,
    SessionChanges, WorkoutSession,
};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all members in insertion order
    async fn list(&self) -> RepoResult<Vec<Member>>;

    /// Find member by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Member>>;

    /// Find member by exact (case-sensitive) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// Create a member, assigning `id` and `joined_at`.
    /// Fails with `EmailAlreadyExists` if the email is taken.
    async fn create(&self, member: NewMember) -> RepoResult<Member>;

    /// Merge `changes` over an existing member. `Ok(None)` if absent.
    async fn update(&self, id: &RecordId, changes: MemberChanges) -> RepoResult<Option<Member>>;

    /// Number of stored members
    async fn count(&self) -> RepoResult<usize>;
}

// ============================================================================
// Exercise Repository
// ============================================================================

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// List all exercises in insertion order
    async fn list(&self) -> RepoResult<Vec<Exercise>>;

    /// Find exercise by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Exercise>>;

    /// Create an exercise, assigning `id`
    async fn create(&self, exercise: NewExercise) -> RepoResult<Exercise>;

    /// Merge `changes` over an existing exercise. `Ok(None)` if absent.
    async fn update(
        &self,
        id: &RecordId,
        changes: ExerciseChanges,
    ) -> RepoResult<Option<Exercise>>;

    /// Number of stored exercises
    async fn count(&self) -> RepoResult<usize>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// List all sessions in insertion order
    async fn list(&self) -> RepoResult<Vec<WorkoutSession>>;

    /// Find session by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<WorkoutSession>>;

    /// All sessions belonging to a member, in insertion order
    async fn find_by_member(&self, member_id: &RecordId) -> RepoResult<Vec<WorkoutSession>>;

    /// Start a session, assigning `id`, `start_time` and defaults
    async fn create(&self, session: NewSession) -> RepoResult<WorkoutSession>;

    /// Merge `changes` over an existing session. `Ok(None)` if absent.
    async fn update(
        &self,
        id: &RecordId,
        changes: SessionChanges,
    ) -> RepoResult<Option<WorkoutSession>>;

    /// Number of stored sessions
    async fn count(&self) -> RepoResult<usize>;
}
