//! # fitness-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (storage engine, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Exercise, ExerciseChanges, Member, MemberChanges, NewExercise, NewMember, NewSession,
    SessionChanges, SessionStatus, SessionStatusParseError, WorkoutSession,
};
pub use error::DomainError;
pub use traits::{ExerciseRepository, MemberRepository, RepoResult, SessionRepository};
pub use value_objects::{posture, RecordId, RecordIdParseError};
