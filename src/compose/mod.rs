//! Composition of hierarchical identifiers from namespaces, segments and a
//! base name.
//!
//! Both identifier surfaces share the [`Assembler`], a single growable buffer
//! that only ever places a separator between two non-empty pieces:
//!
//! - [`key`]: dot-joined keys such as `"database.user.id"`
//! - [`message`]: namespaced error messages such as `"storage: read_failed"`
//!
//! # Examples
//!
//! ```
//! use errorc::compose::assemble;
//!
//! assert_eq!(assemble(["database", "", "user", "id"], "."), "database.user.id");
//! assert_eq!(assemble(["", ""], "."), "");
//! ```
use crate::types::alloc_type::String;

/// Declares a string newtype over `Cow<'static, str>` that can be built in
/// `const` context.
macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name($crate::types::alloc_type::Cow<'static, str>);

        impl $name {
            #[inline]
            pub const fn from_static(value: &'static str) -> Self {
                Self($crate::types::alloc_type::Cow::Borrowed(value))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            #[inline]
            pub fn into_inner(self) -> $crate::types::alloc_type::Cow<'static, str> {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&'static str> for $name {
            #[inline]
            fn from(value: &'static str) -> Self {
                Self::from_static(value)
            }
        }

        impl From<$crate::types::alloc_type::String> for $name {
            #[inline]
            fn from(value: $crate::types::alloc_type::String) -> Self {
                Self($crate::types::alloc_type::Cow::Owned(value))
            }
        }

        impl From<$crate::types::alloc_type::Cow<'static, str>> for $name {
            #[inline]
            fn from(value: $crate::types::alloc_type::Cow<'static, str>) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $crate::types::alloc_type::Cow<'static, str> {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<str> for $name {
            #[inline]
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            #[inline]
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

pub mod key;
pub mod message;

/// Incremental builder that joins non-empty pieces with a separator.
///
/// Pieces are added one at a time so that later stages can ask whether
/// anything has been written yet. An empty piece never produces a separator.
#[derive(Debug, Clone)]
pub struct Assembler<'s> {
    buf: String,
    separator: &'s str,
}

impl<'s> Assembler<'s> {
    #[inline]
    pub fn new(separator: &'s str) -> Self {
        Self { buf: String::new(), separator }
    }

    #[inline]
    pub fn with_capacity(separator: &'s str, capacity: usize) -> Self {
        Self { buf: String::with_capacity(capacity), separator }
    }

    /// Starts from an already assembled prefix.
    #[inline]
    pub fn from_prefix(prefix: String, separator: &'s str) -> Self {
        Self { buf: prefix, separator }
    }

    /// Appends `piece`, preceded by the separator if the buffer is non-empty.
    pub fn push(&mut self, piece: &str) -> &mut Self {
        if piece.is_empty() {
            return self;
        }
        if !self.buf.is_empty() {
            self.buf.push_str(self.separator);
        }
        self.buf.push_str(piece);
        self
    }

    /// Inserts `piece` at the front, followed by the separator if the buffer
    /// is non-empty.
    pub fn prepend(&mut self, piece: &str) -> &mut Self {
        if piece.is_empty() {
            return self;
        }
        if !self.buf.is_empty() {
            self.buf.insert_str(0, self.separator);
        }
        self.buf.insert_str(0, piece);
        self
    }

    /// Reserves room for at least `additional` more bytes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn separator(&self) -> &'s str {
        self.separator
    }

    #[inline]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Joins the non-empty `pieces` with `separator`.
pub fn assemble<I, S>(pieces: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Assembler::new(separator);
    for piece in pieces {
        out.push(piece.as_ref());
    }
    out.finish()
}
