//! An error decorated with context fields.
//!
//! [`WrappedError`] is what [`with`](crate::with) produces when at least one
//! present field was supplied. Its message is the cause's message followed by
//! `", <field>"` for every field in insertion order:
//!
//! ```
//! use errorc::{new, with, Field};
//!
//! let err = with(
//!     new("test error"),
//!     [Field::string("", "message"), Field::string("key2", "value2")],
//! )
//! .unwrap();
//!
//! assert_eq!(err.to_string(), "test error, message, key2: value2");
//! ```
//!
//! A present field with an empty key and an empty value still costs the
//! `", "` separator, so `with(new(""), [Field::string("", "")])` renders as
//! `", "`. Absent fields never reach the wrapper at all.
use crate::types::alloc_type::{String, ToString};
use crate::types::{Error, Field, FieldVec};
use core::error::Error as StdError;
use core::fmt::{self, Display};

/// Separator written before every field fragment.
pub const FIELD_SEPARATOR: &str = ", ";

/// An error carrying its cause and one or more ordered fields.
#[derive(Debug, Clone)]
pub struct WrappedError {
    cause: Error,
    fields: FieldVec,
}

impl WrappedError {
    pub(crate) fn wrap<I>(cause: Error, fields: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<Option<Field>>,
    {
        let fields: FieldVec = fields.into_iter().filter_map(Into::into).collect();
        if fields.is_empty() {
            return cause;
        }
        Error::from(Self { cause, fields })
    }

    /// The wrapped error.
    #[inline]
    pub fn cause(&self) -> &Error {
        &self.cause
    }

    /// Attached fields in insertion order.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Renders the full message into a single buffer.
    ///
    /// The buffer starts as the cause's message and is grown once to the exact
    /// size of the remaining fragments. Produces the same text as `Display`.
    pub fn render(&self) -> String {
        let mut out = self.cause.to_string();
        let extra: usize =
            self.fields.iter().map(|field| FIELD_SEPARATOR.len() + field.rendered_len()).sum();
        out.reserve_exact(extra);
        for field in &self.fields {
            out.push_str(FIELD_SEPARATOR);
            field.push_to(&mut out);
        }
        out
    }
}

impl Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.cause, f)?;
        for field in &self.fields {
            f.write_str(FIELD_SEPARATOR)?;
            Display::fmt(field, f)?;
        }
        Ok(())
    }
}

impl StdError for WrappedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_dyn())
    }
}
