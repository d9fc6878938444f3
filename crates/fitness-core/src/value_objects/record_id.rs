//! Record ID - opaque unique identifier assigned by the storage engine
//!
//! Freshly generated ids are random UUIDs (v4) rendered in their hyphenated
//! form. Ids coming from clients are treated as opaque text: any non-blank
//! string is accepted and compared byte for byte.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque record identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, globally unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse from a client-supplied string
    ///
    /// The text is kept verbatim; only empty or all-whitespace input is rejected.
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        if s.trim().is_empty() {
            return Err(RecordIdParseError::Empty);
        }
        Ok(Self(s.to_string()))
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a RecordId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("record id must not be empty")]
    Empty,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl From<&RecordId> for String {
    fn from(id: &RecordId) -> Self {
        id.0.clone()
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
