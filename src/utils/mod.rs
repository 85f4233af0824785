//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Validation of submitted URLs
//! - [`request_origin`] - Base URL and client address from request headers

pub mod code_generator;
pub mod request_origin;
pub mod url_validator;
