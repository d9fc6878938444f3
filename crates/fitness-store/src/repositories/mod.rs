//! In-memory repository implementations

mod exercise;
mod member;
mod session;

pub use exercise::MemExerciseRepository;
pub use member::MemMemberRepository;
pub use session::MemSessionRepository;
