//! # sid
//!
//! Compact, sortable, URL-safe identifiers and a base62 UUID codec.
//!
//! ## Short IDs
//!
//! A short ID has the form `[{prefix}:]{temporal}{random}`:
//! - `temporal` is a millisecond timestamp written as 8 big-endian bytes in
//!   URL-safe base64 without padding (always 11 characters)
//! - `random` is drawn from `A-Za-z0-9-_` (8 characters by default)
//!
//! Examples:
//! - `usr:AAABjS2xQ9kT3vF8aZq`
//! - `AAABjS2xQ9k-_xy12Ab`
//!
//! ## SUUIDs
//!
//! Any UUID can be written in base62 (`0-9A-Za-z`), which takes at most 22
//! characters instead of 36, and decoded back losslessly:
//!
//! ```
//! let suuid = sid::encode("550e8400-e29b-41d4-a716-446655440000").unwrap();
//! assert_eq!(sid::decode(&suuid).unwrap(), "550e8400-e29b-41d4-a716-446655440000");
//! ```

mod error;
mod macros;

pub mod base62;
pub mod random;
pub mod short_id;
pub mod suuid;
pub mod temporal;

pub use base62::{decode, encode};
pub use error::{SidError, SidResult};
pub use short_id::{
    generate_short_id, GeneratorConfig, Options, PrefixPolicy, ShortId, ShortIdGenerator,
};
pub use suuid::Suuid;

/// Re-export uuid for consumers that construct namespaces or raw UUIDs
pub use uuid::Uuid;

/// Generates a short ID with the default configuration.
///
/// Shorthand for [`generate_short_id`].
///
/// # Errors
///
/// See [`ShortIdGenerator::generate`].
pub fn sid(prefix: Option<&str>, options: Options) -> SidResult<String> {
    generate_short_id(prefix, options)
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
