//! Extension trait for attaching fields to the error of a `Result`.
//!
//! This module provides [`ResultExt`], which wraps the error side of a
//! `Result` without verbose `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use errorc::{Error, Field, ResultExt};
//!
//! fn load_config(path: &'static str) -> Result<String, Error> {
//!     std::fs::read_to_string(path).with_fields([Field::string("path", path)])
//! }
//!
//! assert!(load_config("definitely/missing.toml").is_err());
//! ```

use crate::types::{Error, Field};

/// Extension trait for adding fields to `Result` errors.
///
/// Implemented for every `Result<T, E>` whose error converts into [`Error`],
/// which covers any `core::error::Error + Send + Sync + 'static` type and
/// [`Error`] itself.
///
/// # Lazy Fields
///
/// [`with_fields_lazy`](ResultExt::with_fields_lazy) only runs its closure on
/// the error path, so formatting costs nothing when the operation succeeds.
///
/// ```
/// use errorc::{new, Error, Field, ResultExt};
///
/// fn process(user_id: u64) -> Result<(), Error> {
///     let result: Result<(), Error> = Err(new("not found"));
///     result.with_fields_lazy(|| [Field::uint("user_id", user_id)])
/// }
///
/// assert_eq!(process(7).unwrap_err().to_string(), "not found, user_id: 7");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error with `fields`; `Ok` passes through untouched.
    fn with_fields<I>(self, fields: I) -> Result<T, Error>
    where
        I: IntoIterator,
        I::Item: Into<Option<Field>>;

    /// Wraps the error with the fields produced by `f`, called only on `Err`.
    fn with_fields_lazy<F, I>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Option<Field>>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[inline]
    fn with_fields<I>(self, fields: I) -> Result<T, Error>
    where
        I: IntoIterator,
        I::Item: Into<Option<Field>>,
    {
        self.map_err(|e| e.into().with(fields))
    }

    #[inline]
    fn with_fields_lazy<F, I>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Option<Field>>,
    {
        self.map_err(|e| e.into().with(f()))
    }
}
