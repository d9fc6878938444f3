//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between DTOs and domain types
//!
//! Everything on the wire uses camelCase field names.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateExerciseRequest, CreateMemberRequest, CreateSessionRequest, UpdateExerciseRequest,
    UpdateMemberRequest, UpdateSessionRequest,
};

pub use responses::{
    ExerciseResponse, HealthResponse, MemberResponse, ReadinessResponse, SessionResponse,
    StatsResponse, StoreCounts,
};
