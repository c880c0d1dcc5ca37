//! Error and field types.
//!
//! - [`Field`]: one key/value unit of context, formatted at construction
//! - [`WrappedError`]: a cause plus its ordered fields
//! - [`Error`]: the shared handle every constructor returns
//! - [`Message`]: the plain message error behind [`new`](crate::new)
//!
//! # Examples
//!
//! ```
//! use errorc::{Error, Field, WrappedError};
//!
//! let err = Error::new("connect failed").with([
//!     Field::string("host", "db-primary"),
//!     Field::uint("port", 5432),
//!     Field::bool("tls", true),
//! ]);
//!
//! assert_eq!(err.to_string(), "connect failed, host: db-primary, port: 5432, tls: true");
//! assert_eq!(err.downcast_ref::<WrappedError>().map(|w| w.fields().len()), Some(3));
//! ```
use smallvec::SmallVec;

pub(crate) mod alloc_type;
pub mod error;
pub mod field;
pub mod wrapped_error;

pub use error::*;
pub use field::*;
pub use wrapped_error::*;

/// SmallVec-backed storage for the fields of a [`WrappedError`].
///
/// Two fields stay inline, which covers the common call sites without a
/// second heap allocation.
pub type FieldVec = SmallVec<[Field; 2]>;
