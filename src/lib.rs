//! # Shortener
//!
//! A small URL shortening service built with Axum and SQLite: submit a long URL,
//! get a short code that redirects to it, and read back its visit count.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - The ShortLink entity, repository trait and code allocator
//! - **Application Layer** ([`application`]) - Shorten / redirect / stats operations
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - `{ "url": "..." }` → `{ short_url, original_url, visits_count }`
//! - `GET /{short_code}` - 307 redirect, counts a visit
//! - `GET /stats/{short_code}` - `{ short_url, original_url, visits_count }`
//! - `GET /health` - Database health check
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite:///./data/shortener.db"   # default
//! export SHORT_URL_LENGTH=6                             # default
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Provenance};
    pub use crate::domain::entities::{NewShortLink, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
