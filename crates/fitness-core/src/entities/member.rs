//! Member entity - represents a studio member

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Insertable projection of a member (server assigns `id` and `joined_at`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub is_active: Option<bool>,
}

impl NewMember {
    /// Create an insertable member with only the required fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
            is_active: None,
        }
    }
}

/// Partial update of a member. `id` and `joined_at` are never part of it.
///
/// `avatar` is `Some(None)` to clear the stored avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl MemberChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.avatar.is_none()
            && self.is_active.is_none()
    }
}

impl Member {
    /// Build a stored member from its insertable form
    ///
    /// A blank avatar is stored as absent, and `is_active` defaults to true.
    pub fn new(id: RecordId, input: NewMember, joined_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            avatar: normalize_avatar(input.avatar),
            joined_at,
            is_active: input.is_active.unwrap_or(true),
        }
    }

    /// Produce a copy with every supplied field overwritten
    pub fn merged(&self, changes: &MemberChanges) -> Self {
        let mut updated = self.clone();
        if let Some(name) = &changes.name {
            updated.name.clone_from(name);
        }
        if let Some(email) = &changes.email {
            updated.email.clone_from(email);
        }
        if let Some(avatar) = &changes.avatar {
            updated.avatar = normalize_avatar(avatar.clone());
        }
        if let Some(is_active) = changes.is_active {
            updated.is_active = is_active;
        }
        updated
    }
}

fn normalize_avatar(avatar: Option<String>) -> Option<String> {
    avatar.filter(|a| !a.trim().is_empty())
}
