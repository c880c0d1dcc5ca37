//! The shared error handle and the plain message error.
//!
//! [`Error`] is a cheaply clonable handle around any
//! `core::error::Error + Send + Sync` value. Clones share the same underlying
//! error, so identity survives being passed around and wrapped:
//!
//! ```
//! use errorc::{new, Field};
//!
//! let invalid_input = new("invalid input");
//! let err = invalid_input.clone().with([Field::string("field1", "value1")]);
//!
//! assert!(err.is(&invalid_input));
//! assert_eq!(err.to_string(), "invalid input, field1: value1");
//! ```
use crate::inspect::{self, Chain};
use crate::types::alloc_type::{Arc, Box, Cow};
use crate::types::{Field, WrappedError};
use core::error::Error as StdError;
use core::fmt::{self, Debug, Display};
use core::ops::Deref;

/// Trait object shared by every [`Error`] handle.
pub type DynError = dyn StdError + Send + Sync + 'static;

/// Error built from a message, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    text: Cow<'static, str>,
}

impl Message {
    #[inline]
    pub fn new<M>(text: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { text: text.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl StdError for Message {}

/// Shared handle to an error value.
///
/// Equality is identity: two handles are equal when they point at the same
/// underlying error, not when their messages match. Use [`Error::is`] to
/// check identity through wrapping layers and [`Error::downcast_ref`] to
/// recover a concrete error type from anywhere in the chain.
///
/// `Error` does not implement `core::error::Error` itself, which is what
/// allows the blanket `From<E: Error>` conversion. It dereferences to
/// [`DynError`] and converts into `Box<dyn Error + Send + Sync>` where a
/// trait object is required; see [`SharedError`] for how shared handles
/// convert.
#[derive(Clone)]
pub struct Error {
    inner: Arc<Box<DynError>>,
}

impl Error {
    /// Creates an error with the given message.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::from(Message::new(message))
    }

    /// Adopts an already boxed error without adding a layer.
    #[inline]
    pub fn from_boxed(error: Box<DynError>) -> Self {
        Self { inner: Arc::new(error) }
    }

    /// Wraps this error with the present entries of `fields`.
    ///
    /// When no present field remains the same handle is returned, so
    /// [`ptr_eq`](Self::ptr_eq) against the original still holds.
    #[inline]
    pub fn with<I>(self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Field>>,
    {
        WrappedError::wrap(self, fields)
    }

    /// Returns the wrapped cause, if this error has one.
    #[inline]
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_dyn().source()
    }

    /// Returns the underlying error as a trait object.
    #[inline]
    pub fn as_dyn(&self) -> &DynError {
        &**self.inner
    }

    /// Iterates over this error and each transitive cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self.as_dyn())
    }

    /// Returns the innermost error of the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self.as_dyn();
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    /// Whether `target` appears anywhere in this error's chain.
    #[inline]
    pub fn is(&self, target: &Error) -> bool {
        inspect::is(self.as_dyn(), target.as_dyn())
    }

    /// Finds the first error of type `T` in the chain.
    #[inline]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        inspect::find(self.as_dyn())
    }

    /// Whether an error of type `T` appears in the chain.
    #[inline]
    pub fn is_type<T>(&self) -> bool
    where
        T: StdError + 'static,
    {
        self.downcast_ref::<T>().is_some()
    }

    /// Whether both handles share the same underlying error.
    #[inline]
    pub fn ptr_eq(&self, other: &Error) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Converts into a boxed trait object.
    ///
    /// The last handle hands over its error as is, so `downcast_ref` on the
    /// box finds the concrete type. A handle that is still shared is boxed
    /// as a [`SharedError`] whose `source()` is the shared error.
    pub fn into_boxed(self) -> Box<DynError> {
        match Arc::try_unwrap(self.inner) {
            Ok(error) => error,
            Err(inner) => Box::new(SharedError { error: Self { inner } }),
        }
    }

    /// Converts into a shared trait object.
    #[inline]
    pub fn into_inner(self) -> Arc<DynError> {
        Arc::from(self.into_boxed())
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self { inner: Arc::new(Box::new(error)) }
    }
}

impl From<Error> for Box<DynError> {
    #[inline]
    fn from(error: Error) -> Self {
        error.into_boxed()
    }
}

impl From<Error> for Arc<DynError> {
    #[inline]
    fn from(error: Error) -> Self {
        error.into_inner()
    }
}

impl Deref for Error {
    type Target = DynError;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_dyn()
    }
}

impl AsRef<DynError> for Error {
    #[inline]
    fn as_ref(&self) -> &DynError {
        self.as_dyn()
    }
}

impl PartialEq for Error {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_dyn(), f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_dyn(), f)
    }
}

/// Boxed form of an [`Error`] handle that was still shared when converted.
///
/// Displays exactly like the shared error and reports it as its `source()`,
/// so identity checks and type recovery through the chain keep working:
///
/// ```
/// use errorc::{inspect, new, DynError};
///
/// let sentinel = new("not found");
/// let boxed: Box<DynError> = sentinel.clone().into();
///
/// assert_eq!(boxed.to_string(), "not found");
/// assert!(inspect::is(&*boxed, sentinel.as_dyn()));
/// ```
pub struct SharedError {
    error: Error,
}

impl SharedError {
    /// The shared handle behind this box.
    #[inline]
    pub fn error(&self) -> &Error {
        &self.error
    }
}

impl Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl Debug for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.error, f)
    }
}

impl StdError for SharedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.error.as_dyn())
    }
}
