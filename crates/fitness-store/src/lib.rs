//! # fitness-store
//!
//! Storage layer implementing the repository traits of `fitness-core` with
//! process-local, insertion-ordered tables.
//!
//! ## Overview
//!
//! - [`MemStorage`] owns one repository per entity type. It is an ordinary
//!   value: construct as many as you like (one per test, one per server).
//! - Each repository keeps its rows behind a single `parking_lot::RwLock`,
//!   so every storage operation is atomic with respect to the others.
//! - Reads hand out clones and updates replace rows with a merged copy;
//!   callers never hold a live reference into the store.
//! - Data is lost when the process exits.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fitness_core::traits::MemberRepository;
//! use fitness_store::MemStorage;
//!
//! async fn example() {
//!     let storage = MemStorage::seeded();
//!     let members = storage.members().list().await.unwrap();
//!     assert_eq!(members.len(), 3);
//! }
//! ```

pub mod fixtures;
pub mod repositories;
mod storage;
mod table;

// Re-export commonly used types
pub use repositories::{MemExerciseRepository, MemMemberRepository, MemSessionRepository};
pub use storage::MemStorage;
