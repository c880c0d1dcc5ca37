//! Dot-joined structured keys.
//!
//! A key has the form `namespace[.segment1[.segment2[...]]].name`. Options
//! are applied in order to a single buffer and the base name is appended
//! last:
//!
//! - [`with_namespace`] prepends, so the namespace stays leftmost whether it is
//!   given before or after the segments, and a later namespace wraps an
//!   earlier one
//! - [`with_segments`] appends each non-empty segment
//!
//! ```
//! use errorc::compose::key::{new_key, with_namespace, with_segments};
//!
//! let key = new_key("user", &[with_namespace("ns"), with_segments(["org", "id"])]);
//! assert_eq!(key, "ns.org.id.user");
//!
//! assert_eq!(new_key("id", &[with_segments(["database", "", "user"])]), "database.user.id");
//! assert_eq!(new_key("field", &[]), "field");
//! ```
use super::Assembler;
use crate::types::alloc_type::String;
use smallvec::SmallVec;

/// Separator between key components.
pub const KEY_SEPARATOR: &str = ".";

string_newtype!(
    /// A composed key, usable directly as a [`Field`](crate::Field) key.
    Key
);

string_newtype!(
    /// The leading component of a key, identifying a subsystem.
    KeyNamespace
);

string_newtype!(
    /// One component between the namespace and the base name.
    KeySegment
);

/// Segments contributed by a single [`KeyOption::Segments`].
pub type SegmentVec = SmallVec<[KeySegment; 4]>;

/// One step of key construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyOption {
    /// Prepended to whatever has been assembled so far.
    Namespace(KeyNamespace),
    /// Appended in order; empty segments are skipped.
    Segments(SegmentVec),
}

impl KeyOption {
    fn apply(&self, key: &mut Assembler<'_>) {
        match self {
            Self::Namespace(namespace) => {
                key.prepend(namespace.as_str());
            },
            Self::Segments(segments) => {
                for segment in segments {
                    key.push(segment.as_str());
                }
            },
        }
    }

    /// Upper bound on the bytes this option adds, separators included.
    fn len_hint(&self) -> usize {
        match self {
            Self::Namespace(namespace) => namespace.as_str().len() + KEY_SEPARATOR.len(),
            Self::Segments(segments) => {
                segments.iter().map(|segment| segment.as_str().len() + KEY_SEPARATOR.len()).sum()
            },
        }
    }
}

/// Sets a namespace prefix for the key. Empty namespaces contribute nothing.
#[inline]
pub fn with_namespace<N>(namespace: N) -> KeyOption
where
    N: Into<KeyNamespace>,
{
    KeyOption::Namespace(namespace.into())
}

/// Appends segments between the namespace and the base name.
#[inline]
pub fn with_segments<I>(segments: I) -> KeyOption
where
    I: IntoIterator,
    I::Item: Into<KeySegment>,
{
    KeyOption::Segments(segments.into_iter().map(Into::into).collect())
}

/// Builds a key from `options` applied in order followed by `name`.
///
/// Empty components never produce a separator; when every component is empty
/// the key is empty.
pub fn new_key(name: &str, options: &[KeyOption]) -> Key {
    compose(Assembler::new(KEY_SEPARATOR), name, options)
}

fn compose(mut key: Assembler<'_>, name: &str, options: &[KeyOption]) -> Key {
    let hint = options.iter().map(KeyOption::len_hint).sum::<usize>() + name.len();
    key.reserve(hint);
    for option in options {
        option.apply(&mut key);
    }
    key.push(name);
    Key::from(key.finish())
}

/// Pre-binds options shared by many keys.
///
/// The bound options are assembled once; each [`key`](Self::key) call only
/// appends its base name to a copy of that prefix.
///
/// ```
/// use errorc::compose::key::{with_namespace, with_segments, KeyFactory};
///
/// let users = KeyFactory::new([with_namespace("db"), with_segments(["users"])]);
///
/// assert_eq!(users.key("id"), "db.users.id");
/// assert_eq!(users.key_with("street", &[with_segments(["address"])]), "db.users.address.street");
/// assert_eq!(users.extend([with_namespace("app")]).key("id"), "app.db.users.id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyFactory {
    prefix: String,
}

impl KeyFactory {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = KeyOption>,
    {
        Self::default().extend(options)
    }

    /// Returns a factory with `options` applied after the bound ones.
    pub fn extend<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = KeyOption>,
    {
        let mut prefix = Assembler::from_prefix(self.prefix.clone(), KEY_SEPARATOR);
        for option in options {
            option.apply(&mut prefix);
        }
        Self { prefix: prefix.finish() }
    }

    /// Builds the key for `name` under the bound options.
    #[inline]
    pub fn key(&self, name: &str) -> Key {
        self.key_with(name, &[])
    }

    /// Builds the key for `name`, applying `options` after the bound ones.
    pub fn key_with(&self, name: &str, options: &[KeyOption]) -> Key {
        compose(Assembler::from_prefix(self.prefix.clone(), KEY_SEPARATOR), name, options)
    }

    /// The assembled namespace and segments.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Shorthand for [`KeyFactory::new`].
#[inline]
pub fn key_factory<I>(options: I) -> KeyFactory
where
    I: IntoIterator<Item = KeyOption>,
{
    KeyFactory::new(options)
}
