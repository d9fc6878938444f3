//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod exercises;
pub mod health;
pub mod members;
pub mod sessions;
pub mod stats;
