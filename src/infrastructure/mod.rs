//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`database`] - SQLite pool construction and migrations
//! - [`persistence`] - SQLite repository implementations

pub mod database;
pub mod persistence;
