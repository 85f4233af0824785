//! Domain layer containing business entities and logic.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`code_allocator`] - Unique short code allocation
//!
//! The domain layer has no dependencies on infrastructure or presentation layers;
//! repository traits define contracts implemented by the infrastructure layer.

pub mod code_allocator;
pub mod entities;
pub mod repositories;
