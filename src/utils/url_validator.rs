//! Validation of URLs submitted for shortening.
//!
//! Submitted URLs are checked but never rewritten: the stored `original_url` is the
//! exact input string, so query strings and special characters survive unchanged.

use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2083;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not exceed {} characters", MAX_URL_LENGTH)]
    TooLong,
}

/// Checks that `input` is an absolute `http`/`https` URL with a host.
///
/// # Errors
///
/// - [`UrlValidationError::TooLong`] above [`MAX_URL_LENGTH`] characters
/// - [`UrlValidationError::InvalidFormat`] if the string does not parse as an absolute URL
/// - [`UrlValidationError::UnsupportedScheme`] for `ftp:`, `javascript:`, `data:` and friends
/// - [`UrlValidationError::MissingHost`] if the host is empty
///
/// # Examples
///
/// ```ignore
/// assert!(validate_http_url("http://example.com").is_ok());
/// assert!(validate_http_url("not-a-valid-url").is_err());
/// ```
pub fn validate_http_url(input: &str) -> Result<(), UrlValidationError> {
    if input.chars().count() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedScheme),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
