//! Context fields attached to errors by [`with`](crate::with).
//!
//! A [`Field`] is a key/value pair whose value is already in its final textual
//! form: integers and booleans are formatted when the field is built, and
//! error-derived values capture the error message at that moment. The only
//! work left for render time is joining `key`, `": "` and `value` into the
//! wrapped error's message buffer, which happens without any intermediate
//! allocation.
//!
//! # Examples
//!
//! ```
//! use errorc::Field;
//!
//! assert_eq!(Field::string("user", "alice").to_string(), "user: alice");
//! assert_eq!(Field::int("", -42).to_string(), "-42");
//! assert_eq!(Field::bool("cached", false).to_string(), "cached: false");
//! assert!(Field::error("cause", None::<&str>).is_none());
//! ```
use crate::types::alloc_type::{Cow, String, ToString};
use core::fmt::{self, Display};

/// Separator placed between a non-empty key and its value.
pub const KEY_VALUE_SEPARATOR: &str = ": ";

/// Longest decimal rendering of a 64-bit integer (`i64::MIN` and `u64::MAX`).
const DECIMAL_CAPACITY: usize = 20;

/// Base-10 text of an integer, formatted once into inline storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    digits: [u8; DECIMAL_CAPACITY],
    start: u8,
}

impl Decimal {
    /// Formats a signed integer.
    #[inline]
    pub fn signed(value: i64) -> Self {
        Self::from_parts(value < 0, value.unsigned_abs())
    }

    /// Formats an unsigned integer.
    #[inline]
    pub fn unsigned(value: u64) -> Self {
        Self::from_parts(false, value)
    }

    fn from_parts(negative: bool, mut magnitude: u64) -> Self {
        let mut digits = [0u8; DECIMAL_CAPACITY];
        let mut pos = DECIMAL_CAPACITY;
        loop {
            pos -= 1;
            digits[pos] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        if negative {
            pos -= 1;
            digits[pos] = b'-';
        }
        Self { digits, start: pos as u8 }
    }

    /// Returns the formatted digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and '-' are ever written.
        core::str::from_utf8(&self.digits[self.start as usize..]).unwrap_or_default()
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Decimal").field(&self.as_str()).finish()
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The already-formatted value of a [`Field`], tagged by where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// A string value stored verbatim.
    Text(Cow<'static, str>),
    /// An integer formatted at construction.
    Int(Decimal),
    /// A boolean, rendered as `true` or `false`.
    Bool(bool),
    /// Snapshot of an error's message taken at construction.
    Error(String),
}

impl FieldValue {
    /// Returns the textual form of the value.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Int(decimal) => decimal.as_str(),
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
            Self::Error(message) => message,
        }
    }
}

/// A single unit of context attached to a wrapped error.
///
/// Rendering follows three rules:
///
/// - both key and value empty: nothing is written
/// - empty key: the value alone
/// - otherwise `"<key>: <value>"`
///
/// Keys accept anything convertible into `Cow<'static, str>`, which includes
/// [`Key`](crate::Key) and any caller-defined newtype with the same conversion.
///
/// ```
/// use errorc::{Field, Key};
///
/// const USER_ID: Key = Key::from_static("user_id");
///
/// assert_eq!(Field::string(USER_ID, "42").to_string(), "user_id: 42");
/// assert_eq!(Field::string("", "just-value").to_string(), "just-value");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    key: Cow<'static, str>,
    value: FieldValue,
}

impl Field {
    /// Builds a field with a string value stored as-is.
    #[inline]
    pub fn string<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        Self { key: key.into(), value: FieldValue::Text(value.into()) }
    }

    /// Builds a field from a signed integer, formatted immediately.
    #[inline]
    pub fn int<K>(key: K, value: i64) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        Self { key: key.into(), value: FieldValue::Int(Decimal::signed(value)) }
    }

    /// Builds a field from an unsigned integer, formatted immediately.
    #[inline]
    pub fn uint<K>(key: K, value: u64) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        Self { key: key.into(), value: FieldValue::Int(Decimal::unsigned(value)) }
    }

    /// Builds a field from a boolean.
    #[inline]
    pub fn bool<K>(key: K, value: bool) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        Self { key: key.into(), value: FieldValue::Bool(value) }
    }

    /// Builds a field from an error's message.
    ///
    /// Returns `None` when there is no error, which [`with`](crate::with)
    /// drops as if the argument had never been passed. The message is captured
    /// now; later changes to the error are not reflected.
    ///
    /// ```
    /// use errorc::{new, with, Field};
    ///
    /// let err = with(new("operation failed"), [Field::error("cause", Some(new("disk full")))]);
    /// assert_eq!(err.unwrap().to_string(), "operation failed, cause: disk full");
    /// ```
    pub fn error<K, E>(key: K, err: Option<E>) -> Option<Self>
    where
        K: Into<Cow<'static, str>>,
        E: Display,
    {
        let err = err?;
        Some(Self { key: key.into(), value: FieldValue::Error(err.to_string()) })
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the tagged value.
    #[inline]
    pub fn raw_value(&self) -> &FieldValue {
        &self.value
    }

    /// Whether rendering this field writes nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value().is_empty()
    }

    /// Exact number of bytes [`push_to`](Self::push_to) appends.
    pub fn rendered_len(&self) -> usize {
        let value = self.value().len();
        if self.key.is_empty() {
            value
        } else {
            self.key.len() + KEY_VALUE_SEPARATOR.len() + value
        }
    }

    /// Appends the rendered fragment to `out`.
    pub fn push_to(&self, out: &mut String) {
        if !self.key.is_empty() {
            out.push_str(&self.key);
            out.push_str(KEY_VALUE_SEPARATOR);
        }
        out.push_str(self.value());
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.key.is_empty() {
            f.write_str(&self.key)?;
            f.write_str(KEY_VALUE_SEPARATOR)?;
        }
        f.write_str(self.value())
    }
}

