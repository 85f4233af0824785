//! Unique short code allocation by rejection sampling.
//!
//! A candidate is drawn, checked against the store, and discarded if taken. There is
//! no upper bound on attempts: with the default length of 6 the code space holds
//! 62^6 (about 5.6 × 10^10) values, so collisions are rare but possible.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};

/// Minimal capability the allocator needs: "is this code already taken?"
#[async_trait]
pub trait ShortCodeLookup: Send + Sync {
    /// Returns true if a record with `code` exists.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;
}

#[async_trait]
impl<T: ShortLinkRepository + ?Sized> ShortCodeLookup for T {
    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.find_by_code(code).await?.is_some())
    }
}

/// Allocates a fresh alphanumeric code of `length` symbols not present in `lookup`.
///
/// # Errors
///
/// Propagates lookup (storage) errors unchanged.
pub async fn allocate_short_code<L>(lookup: &L, length: usize) -> Result<String, AppError>
where
    L: ShortCodeLookup + ?Sized,
{
    allocate_with(lookup, || generate_code(length)).await
}

/// Draws candidates from `draw` until one is neither reserved nor taken.
///
/// # Errors
///
/// Propagates lookup (storage) errors unchanged.
pub async fn allocate_with<L, G>(lookup: &L, mut draw: G) -> Result<String, AppError>
where
    L: ShortCodeLookup + ?Sized,
    G: FnMut() -> String + Send,
{
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        let code = draw();

        if is_reserved(&code) {
            debug!(code = %code, "Drew reserved code, retrying");
            continue;
        }

        if !lookup.code_exists(&code).await? {
            if attempts > 1 {
                debug!(attempts, "Allocated short code after collisions");
            }
            return Ok(code);
        }

        debug!(code = %code, attempts, "Short code collision, retrying");
    }
}
