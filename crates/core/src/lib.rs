//! # resultops-core
//!
//! Combinators over `std::result::Result`: default-taking accessors, bind,
//! error-preserving map, and accessors that abort with a caller message.
//!
//! ## Laws
//!
//! - Error values pass through `map` and `flat_map` unchanged
//! - Callbacks run only on the path they are documented for
//! - `is_error` is the exact complement of `is_ok`
//! - Only `get_exn` and `get_exn_with_message` panic; everything else is total
//!
//! ## Error Handling
//!
//! Prefer [`result::try_get_with_message`] where the caller can propagate;
//! it returns the same description as [`Error::ExpectedOk`].

mod error;
pub mod result;

pub use error::Error;
pub use result::ResultOps;

/// Result of the accessors that turn a missing `Ok` into an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
