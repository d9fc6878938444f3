//! Value objects - immutable types that represent domain concepts

pub mod posture;
mod record_id;

pub use record_id::{RecordId, RecordIdParseError};
