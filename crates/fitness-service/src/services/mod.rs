//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and returns response DTOs.

pub mod context;
pub mod error;
pub mod exercise;
pub mod health;
pub mod member;
pub mod session;
pub mod stats;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use exercise::ExerciseService;
pub use health::HealthService;
pub use member::MemberService;
pub use session::SessionService;
pub use stats::StatsService;
