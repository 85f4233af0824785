//! HTTP middleware for request processing.
//!
//! Provides CORS handling and request tracing.

pub mod cors;
pub mod tracing;
