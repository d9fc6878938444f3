//! Readiness probe backed by the store

use tracing::{instrument, warn};

use crate::dto::{ReadinessResponse, StoreCounts};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ask every repository for its size
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        match self.store_counts().await {
            Ok(counts) => ReadinessResponse::ready(counts),
            Err(e) => {
                warn!(error = %e, "Store is not answering");
                ReadinessResponse::not_ready()
            }
        }
    }

    async fn store_counts(&self) -> ServiceResult<StoreCounts> {
        Ok(StoreCounts {
            members: self.ctx.member_repo().count().await?,
            exercises: self.ctx.exercise_repo().count().await?,
            sessions: self.ctx.session_repo().count().await?,
        })
    }
}
