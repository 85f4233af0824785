//! SQLite repository implementations.
//!
//! - [`SqliteShortLinkRepository`] - ShortLink storage, lookup and visit counting

pub mod sqlite_short_link_repository;

pub use sqlite_short_link_repository::SqliteShortLinkRepository;
