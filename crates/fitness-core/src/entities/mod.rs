//! Domain entities - core business objects

mod exercise;
mod member;
mod session;

pub use exercise::{Exercise, ExerciseChanges, NewExercise};
pub use member::{Member, MemberChanges, NewMember};
pub use session::{
    NewSession, SessionChanges, SessionStatus, SessionStatusParseError, WorkoutSession,
};
