//! Axum extractors for request handling
//!
//! Custom extractors for record ids in paths and validated JSON bodies.

mod path;
mod validated;

pub use path::RecordIdPath;
pub use validated::ValidatedJson;
