//! Combinators over `std::result::Result`.
//!
//! Every operation here is a free function over a `Result<T, E>`. The failure
//! variant is the caller's own `E`, and it is passed through untouched by
//! `map` and `flat_map`. The only operations that leave normal control flow are
//! [`get_exn_with_message`] and [`get_exn`], which panic on an error value.
//!
//! # Examples
//!
//! ```
//! use resultops_core::result::{flat_map, get_with_default, is_ok, map};
//!
//! let parsed: Result<i32, String> = "5".parse::<i32>().map_err(|e| e.to_string());
//! let doubled = map(parsed, |x| x * 2);
//! assert_eq!(doubled, Ok(10));
//!
//! let checked = flat_map(doubled, |x| if x > 0 { Ok(x) } else { Err("negative".to_string()) });
//! assert!(is_ok(&checked));
//!
//! let failed: Result<i32, &str> = Err("fail");
//! assert_eq!(get_with_default(failed, 0), 0);
//! ```

use std::cmp::Ordering;

use either::Either;

use crate::error::Error;

/// Return the `Ok` value, or abort with `message`.
///
/// Intended for call sites that have already established failure is
/// impossible or unrecoverable. Use [`try_get_with_message`] to get the same
/// description back as data instead.
///
/// # Panics
///
/// Panics if `result` is `Err`. The panic payload is `message`.
#[inline]
#[track_caller]
#[allow(clippy::panic)]
pub fn get_exn_with_message<T, E>(result: std::result::Result<T, E>, message: &str) -> T {
    match result {
        Ok(value) => value,
        Err(_) => {
            let error = Error::expected_ok(message);
            tracing::error!(%error, "required Ok value was an Error");
            panic!("{error}");
        }
    }
}

/// Return the `Ok` value, or abort with a fixed description.
///
/// # Panics
///
/// Panics if `result` is `Err`.
#[inline]
#[track_caller]
#[allow(clippy::panic)]
pub fn get_exn<T, E>(result: std::result::Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => {
            let error = Error::NotOk;
            tracing::error!(%error, "required Ok value was an Error");
            panic!("{error}");
        }
    }
}

/// Non-aborting counterpart of [`get_exn_with_message`].
///
/// # Errors
///
/// Returns [`Error::ExpectedOk`] carrying `message` if `result` is `Err`.
#[inline]
pub fn try_get_with_message<T, E>(
    result: std::result::Result<T, E>,
    message: &str,
) -> crate::Result<T> {
    result.map_err(|_| Error::expected_ok(message))
}

/// Apply `f` to the `Ok` value, or return `default` for an error.
///
/// `f` is not called on the error path.
#[inline]
pub fn map_with_default<T, E, U, F>(result: std::result::Result<T, E>, default: U, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    result.map_or(default, f)
}

/// Transform the `Ok` value. An error passes through unchanged.
#[inline]
pub fn map<T, E, U, F>(result: std::result::Result<T, E>, f: F) -> std::result::Result<U, E>
where
    F: FnOnce(T) -> U,
{
    result.map(f)
}

/// Chain a fallible step onto an `Ok` value.
///
/// The `Result` returned by `f` is returned as is, without re-wrapping.
/// An error short-circuits and `f` is never called.
#[inline]
pub fn flat_map<T, E, U, F>(result: std::result::Result<T, E>, f: F) -> std::result::Result<U, E>
where
    F: FnOnce(T) -> std::result::Result<U, E>,
{
    result.and_then(f)
}

/// Return the `Ok` value, or `default` for an error.
#[inline]
pub fn get_with_default<T, E>(result: std::result::Result<T, E>, default: T) -> T {
    result.unwrap_or(default)
}

#[inline]
#[must_use]
pub const fn is_ok<T, E>(result: &std::result::Result<T, E>) -> bool {
    result.is_ok()
}

/// Exact complement of [`is_ok`].
#[inline]
#[must_use]
pub const fn is_error<T, E>(result: &std::result::Result<T, E>) -> bool {
    !is_ok(result)
}

/// Transform the error value. An `Ok` value passes through unchanged.
#[inline]
pub fn map_error<T, E, E2, F>(result: std::result::Result<T, E>, f: F) -> std::result::Result<T, E2>
where
    F: FnOnce(E) -> E2,
{
    result.map_err(f)
}

/// Run `f` on the `Ok` value for its side effect. Errors are ignored.
#[inline]
pub fn for_each<T, E, F>(result: &std::result::Result<T, E>, f: F)
where
    F: FnOnce(&T),
{
    if let Ok(value) = result {
        f(value);
    }
}

/// Compare two results for equality, using `f` for the `Ok` values.
///
/// Any two errors are equal regardless of their payloads; an `Ok` never
/// equals an error.
#[inline]
pub fn equal<T, E, F>(
    left: &std::result::Result<T, E>,
    right: &std::result::Result<T, E>,
    f: F,
) -> bool
where
    F: FnOnce(&T, &T) -> bool,
{
    match (left, right) {
        (Ok(a), Ok(b)) => f(a, b),
        (Err(_), Err(_)) => true,
        (Ok(_), Err(_)) | (Err(_), Ok(_)) => false,
    }
}

/// Order two results, using `f` for the `Ok` values.
///
/// Errors sort before `Ok` values and all errors are equal to each other.
#[inline]
pub fn compare<T, E, F>(
    left: &std::result::Result<T, E>,
    right: &std::result::Result<T, E>,
    f: F,
) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match (left, right) {
        (Ok(a), Ok(b)) => f(a, b),
        (Err(_), Err(_)) => Ordering::Equal,
        (Err(_), Ok(_)) => Ordering::Less,
        (Ok(_), Err(_)) => Ordering::Greater,
    }
}

/// Success on the right, failure on the left.
#[inline]
pub fn into_either<T, E>(result: std::result::Result<T, E>) -> Either<E, T> {
    match result {
        Ok(value) => Either::Right(value),
        Err(error) => Either::Left(error),
    }
}

#[inline]
pub fn from_either<T, E>(either: Either<E, T>) -> std::result::Result<T, E> {
    either.either(Err, Ok)
}

/// Method-call form of the combinators in this module.
///
/// Only operations without an inherent `Result` method of the same name are
/// provided; `map`, `is_ok` and `map_err` are already inherent.
pub trait ResultOps<T, E>: Sized {
    /// See [`get_exn_with_message`].
    ///
    /// # Panics
    ///
    /// Panics with `message` if `self` is `Err`.
    #[track_caller]
    fn get_exn_with_message(self, message: &str) -> T;

    /// See [`get_exn`].
    ///
    /// # Panics
    ///
    /// Panics if `self` is `Err`.
    #[track_caller]
    fn get_exn(self) -> T;

    /// See [`try_get_with_message`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpectedOk`] if `self` is `Err`.
    fn try_get_with_message(self, message: &str) -> crate::Result<T>;

    fn map_with_default<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U;

    fn flat_map<U, F: FnOnce(T) -> std::result::Result<U, E>>(
        self,
        f: F,
    ) -> std::result::Result<U, E>;

    fn get_with_default(self, default: T) -> T;

    fn is_error(&self) -> bool;

    fn for_each<F: FnOnce(&T)>(&self, f: F);
}

impl<T, E> ResultOps<T, E> for std::result::Result<T, E> {
    #[inline]
    #[track_caller]
    fn get_exn_with_message(self, message: &str) -> T {
        get_exn_with_message(self, message)
    }

    #[inline]
    #[track_caller]
    fn get_exn(self) -> T {
        get_exn(self)
    }

    #[inline]
    fn try_get_with_message(self, message: &str) -> crate::Result<T> {
        try_get_with_message(self, message)
    }

    #[inline]
    fn map_with_default<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        map_with_default(self, default, f)
    }

    #[inline]
    fn flat_map<U, F: FnOnce(T) -> std::result::Result<U, E>>(
        self,
        f: F,
    ) -> std::result::Result<U, E> {
        flat_map(self, f)
    }

    #[inline]
    fn get_with_default(self, default: T) -> T {
        get_with_default(self, default)
    }

    #[inline]
    fn is_error(&self) -> bool {
        is_error(self)
    }

    #[inline]
    fn for_each<F: FnOnce(&T)>(&self, f: F) {
        for_each(self, f);
    }
}
