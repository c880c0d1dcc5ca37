//! Entry points for building errors and attaching field context.
//!
//! Key features:
//! - [`new`] creates a plain message error.
//! - [`with`] decorates an optional cause with fields, passing `None` through
//!   and returning the cause untouched when no present field remains.
//! - [`with_fn`] builds a reusable closure for `map_err`.
//!
//! See the crate-level docs for the rendering rules.

use crate::types::alloc_type::Cow;
use crate::types::{Error, Field};

/// Creates an error with the given message.
///
/// # Examples
///
/// ```
/// let err = errorc::new("test error");
/// assert_eq!(err.to_string(), "test error");
/// ```
#[inline]
pub fn new<M>(message: M) -> Error
where
    M: Into<Cow<'static, str>>,
{
    Error::new(message)
}

/// Wraps `cause` with the present entries of `fields`.
///
/// - `None` cause: returns `None`; nothing decorates a missing error.
/// - No present field: returns the cause itself, not a new layer.
/// - Otherwise: a [`WrappedError`](crate::WrappedError) that keeps the cause
///   reachable through `source()`.
///
/// # Arguments
///
/// * `cause` - The error to wrap, or `None`
/// * `fields` - Fields or absent fields, e.g. from [`Field::error`]
///
/// # Examples
///
/// ```
/// use errorc::{new, with, Error, Field};
///
/// let base = new("base");
/// let err = with(base.clone(), [Field::int("count", 5)]).unwrap();
/// assert_eq!(err.to_string(), "base, count: 5");
/// assert!(err.is(&base));
///
/// let same = with(base.clone(), [Field::error("cause", None::<Error>)]).unwrap();
/// assert!(same.ptr_eq(&base));
///
/// assert!(with(None::<Error>, [Field::string("k", "v")]).is_none());
/// ```
#[inline]
pub fn with<C, I>(cause: C, fields: I) -> Option<Error>
where
    C: Into<Option<Error>>,
    I: IntoIterator,
    I::Item: Into<Option<Field>>,
{
    Some(cause.into()?.with(fields))
}

/// Creates a reusable closure that wraps errors with fixed fields.
///
/// # Examples
///
/// ```
/// use errorc::{with_fn, Field};
///
/// let result: Result<(), std::io::Error> =
///     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
/// let err = result.map_err(with_fn([Field::string("path", "config.toml")])).unwrap_err();
///
/// assert_eq!(err.to_string(), "missing, path: config.toml");
/// ```
#[inline]
pub fn with_fn<E, I>(fields: I) -> impl Fn(E) -> Error
where
    E: Into<Error>,
    I: IntoIterator + Clone,
    I::Item: Into<Option<Field>>,
{
    move |error| error.into().with(fields.clone())
}
