//! Core domain entities.
//!
//! - [`ShortLink`] - A stored short code → URL mapping
//! - [`NewShortLink`] - Input for creating a [`ShortLink`]

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
