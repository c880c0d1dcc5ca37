//! Namespaced error messages.
//!
//! Namespaces identify the subsystem an error belongs to. Each namespace is
//! prepended to what has been composed so far, so the last one applied ends
//! up leftmost, and components are joined with `": "`.
//!
//! ```
//! use errorc::compose::message::{compose_message, new_with};
//!
//! assert_eq!(compose_message("read_failed", ["storage"]), "storage: read_failed");
//! assert_eq!(
//!     new_with("read_failed", ["storage", "environment"]).to_string(),
//!     "environment: storage: read_failed",
//! );
//! ```
use super::Assembler;
use crate::types::alloc_type::String;
use crate::types::Error;

/// Separator between message components.
pub const MESSAGE_SEPARATOR: &str = ": ";

string_newtype!(
    /// A subsystem prefix for error messages.
    Namespace
);

/// Composes `message` under `namespaces`, applied in order.
pub fn compose_message<I>(message: &str, namespaces: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = Assembler::new(MESSAGE_SEPARATOR);
    for namespace in namespaces {
        out.prepend(namespace.as_ref());
    }
    out.push(message);
    out.finish()
}

/// Creates an error whose message is `message` under `namespaces`.
///
/// Always returns a usable error, even when every component is empty.
#[inline]
pub fn new_with<I>(message: &str, namespaces: I) -> Error
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Error::new(compose_message(message, namespaces))
}

/// Pre-binds namespaces shared by the errors of one subsystem.
///
/// ```
/// use errorc::compose::message::ErrorFactory;
///
/// let storage = ErrorFactory::new(["storage"]);
/// assert_eq!(storage.error("read_failed").to_string(), "storage: read_failed");
///
/// let env = storage.namespace("environment");
/// assert_eq!(env.message("read_failed"), "environment: storage: read_failed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorFactory {
    prefix: String,
}

impl ErrorFactory {
    pub fn new<I>(namespaces: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self { prefix: compose_message("", namespaces) }
    }

    /// Returns a factory with `namespace` wrapped around the bound ones.
    pub fn namespace(&self, namespace: &str) -> Self {
        let mut prefix = Assembler::from_prefix(self.prefix.clone(), MESSAGE_SEPARATOR);
        prefix.prepend(namespace);
        Self { prefix: prefix.finish() }
    }

    /// Composes `message` under the bound namespaces.
    pub fn message(&self, message: &str) -> String {
        let mut out = Assembler::with_capacity(
            MESSAGE_SEPARATOR,
            self.prefix.len() + MESSAGE_SEPARATOR.len() + message.len(),
        );
        out.push(&self.prefix).push(message);
        out.finish()
    }

    /// Creates an error with [`message`](Self::message) as its text.
    #[inline]
    pub fn error(&self, message: &str) -> Error {
        Error::new(self.message(message))
    }

    /// The composed namespaces, without a trailing separator.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
