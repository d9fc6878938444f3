//! Repository traits (ports)

mod repositories;

pub use repositories::{ExerciseRepository, MemberRepository, RepoResult, SessionRepository};
