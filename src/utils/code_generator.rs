//! Random short code generation.
//!
//! Codes are drawn uniformly from a 62-symbol alphanumeric alphabet. Uniqueness is
//! not checked here; see [`crate::domain::code_allocator`].

use rand::Rng;

/// Symbols a short code may contain: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Codes that would be shadowed by fixed routes and are never handed out.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "stats"];

/// Draws a random code of `length` symbols from `alphabet` using `rng`.
///
/// # Panics
///
/// Panics if `alphabet` is empty.
///
/// # Examples
///
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate_code_with(&mut rng, ALPHABET, 6);
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");

    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

/// Draws a random alphanumeric code of `length` symbols from the thread-local RNG.
pub fn generate_code(length: usize) -> String {
    generate_code_with(&mut rand::rng(), ALPHABET, length)
}

/// Returns true if `code` collides with a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
