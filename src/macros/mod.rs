//! Ergonomic macros for wrapping errors with fields.
//!
//! - [`macro@crate::with`] - Accepts a mix of [`Field`](crate::Field) and
//!   `Option<Field>` arguments, which a plain array cannot hold.
//!
//! # Examples
//!
//! ```
//! use errorc::{new, with, Error, Field};
//!
//! let missing: Option<Error> = None;
//! let err = with!(
//!     new("operation failed"),
//!     Field::string("op", "sync"),
//!     Field::error("cause", missing),
//!     Field::int("attempt", 3),
//! );
//!
//! assert_eq!(err.unwrap().to_string(), "operation failed, op: sync, attempt: 3");
//! ```

/// Wraps a cause with any number of fields and absent fields.
///
/// Expands to a call to [`with`](fn@crate::with), converting every argument
/// with `Into<Option<Field>>`. The cause may be an [`Error`](crate::Error) or
/// an `Option<Error>`.
///
/// # Examples
///
/// ```
/// use errorc::{new, with, Error};
///
/// let base = new("base");
/// assert!(with!(base.clone()).unwrap().ptr_eq(&base));
/// assert!(with!(None::<Error>, errorc::Field::bool("retry", true)).is_none());
/// ```
#[macro_export]
macro_rules! with {
    ($cause:expr $(,)?) => {
        $crate::with($cause, ::core::iter::empty::<$crate::Field>())
    };
    ($cause:expr, $($field:expr),+ $(,)?) => {
        $crate::with(
            $cause,
            [$(::core::convert::Into::<::core::option::Option<$crate::Field>>::into($field)),+],
        )
    };
}
