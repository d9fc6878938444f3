//! Path parameter extractors
//!
//! Type-safe extraction of record ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use fitness_core::RecordId;

use crate::response::ApiError;

/// Extract the single `:id` segment of a route as a [`RecordId`]
#[derive(Debug, Clone)]
pub struct RecordIdPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for RecordIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = RecordId::parse(&raw).map_err(|e| ApiError::invalid_path(e.to_string()))?;
        Ok(RecordIdPath(id))
    }
}
