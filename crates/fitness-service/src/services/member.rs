//! Member service
//!
//! Handles the member directory: listing, lookup, registration and profile
//! updates. Email addresses are unique across members.

use fitness_core::{DomainError, RecordId};
use tracing::{debug, info, instrument};

use crate::dto::{CreateMemberRequest, MemberResponse, UpdateMemberRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const EMAIL_TAKEN: &str = "Email already exists";

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every member in registration order
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list().await?;
        Ok(members.iter().map(MemberResponse::from).collect())
    }

    /// Get member by ID
    #[instrument(skip(self))]
    pub async fn get_member(&self, member_id: &RecordId) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.as_str()))?;

        Ok(MemberResponse::from(&member))
    }

    /// Register a new member
    ///
    /// The email is checked before anything is stored; the repository checks
    /// again atomically, so a concurrent duplicate is rejected the same way.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_member(
        &self,
        request: CreateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        if self
            .ctx
            .member_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            debug!("Email already registered");
            return Err(ServiceError::conflict(EMAIL_TAKEN));
        }

        let member = self
            .ctx
            .member_repo()
            .create(request.into())
            .await
            .map_err(email_conflict)?;

        info!(member_id = %member.id, "Member created");
        Ok(MemberResponse::from(&member))
    }

    /// Apply a partial update to a member
    #[instrument(skip(self, request))]
    pub async fn update_member(
        &self,
        member_id: &RecordId,
        request: UpdateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .update(member_id, request.into())
            .await
            .map_err(email_conflict)?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.as_str()))?;

        info!(member_id = %member.id, "Member updated");
        Ok(MemberResponse::from(&member))
    }
}

fn email_conflict(err: DomainError) -> ServiceError {
    match err {
        DomainError::EmailAlreadyExists(_) => ServiceError::conflict(EMAIL_TAKEN),
        other => other.into(),
    }
}
