//! DTOs for the link shortening endpoint.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::url_validator::validate_http_url;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL; must be an absolute HTTP/HTTPS URL.
    #[validate(custom(function = "http_url"))]
    pub url: String,
}

fn http_url(value: &str) -> Result<(), ValidationError> {
    validate_http_url(value).map_err(|e| {
        let mut error = ValidationError::new("url");
        error.message = Some(e.to_string().into());
        error
    })
}
