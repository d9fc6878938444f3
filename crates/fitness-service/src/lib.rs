//! # fitness-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Handlers in `fitness-api` never talk to storage directly: they hand a
//! validated request DTO to one of the services here, which applies the
//! adapter rules (email pre-check, update schemas, session policy) and
//! returns a response DTO.

pub mod dto;
pub mod services;

pub use dto::{
    CreateExerciseRequest, CreateMemberRequest, CreateSessionRequest, ExerciseResponse,
    HealthResponse, MemberResponse, ReadinessResponse, SessionResponse, StatsResponse,
    StoreCounts, UpdateExerciseRequest, UpdateMemberRequest, UpdateSessionRequest,
};
pub use services::{
    ExerciseService, HealthService, MemberService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SessionService, StatsService,
};
