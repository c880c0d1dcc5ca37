//! Allocation-lean error context and namespaced identifiers.
//!
//! [`with`] decorates an error with key/value [`Field`]s. It is a faster
//! alternative to `format!`-based wrapping: field values are formatted when
//! the field is built and the final message is written once, straight into the
//! output, when the error is displayed. The cause stays reachable through
//! `source()`, so identity checks and type recovery keep working through any
//! number of layers.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `errorc::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Sentinel errors
//!
//! ```
//! use errorc::{new, with, Field};
//!
//! let invalid_input = new("invalid input");
//! let err = with(
//!     invalid_input.clone(),
//!     [Field::string("field1", "value1"), Field::string("field2", "value2")],
//! )
//! .unwrap();
//!
//! assert!(err.is(&invalid_input));
//! assert_eq!(err.to_string(), "invalid input, field1: value1, field2: value2");
//! ```
//!
//! ## Typed errors
//!
//! ```
//! use errorc::{Error, Field};
//!
//! #[derive(Debug)]
//! struct ValidationError {
//!     message: &'static str,
//! }
//!
//! impl std::fmt::Display for ValidationError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str(self.message)
//!     }
//! }
//!
//! impl std::error::Error for ValidationError {}
//!
//! let err = Error::from(ValidationError { message: "invalid input" })
//!     .with([Field::string("field1", "value1")]);
//!
//! let ve = err.downcast_ref::<ValidationError>().unwrap();
//! assert_eq!(ve.message, "invalid input");
//! assert_eq!(err.to_string(), "invalid input, field1: value1");
//! ```
//!
//! ## Keys and namespaced messages
//!
//! ```
//! use errorc::{new_key, new_with, with_namespace, with_segments, Field};
//!
//! let key = new_key("id", &[with_namespace("database"), with_segments(["user"])]);
//! assert_eq!(key, "database.user.id");
//!
//! let err = new_with("read_failed", ["storage"]).with([Field::string(key, "42")]);
//! assert_eq!(err.to_string(), "storage: read_failed, database.user.id: 42");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Namespace, segment and key composition
pub mod compose;
/// Entry points: `new`, `with`, `with_fn`
pub mod context;
/// Chain walking for identity checks and type recovery
pub mod inspect;
/// The `with!` macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result`
pub mod traits;
/// Error, field and message types
pub mod types;

/// Tracing integration - span fields (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use compose::key::{
    key_factory, new_key, with_namespace, with_segments, Key, KeyFactory, KeyNamespace, KeyOption,
    KeySegment,
};
pub use compose::message::{compose_message, new_with, ErrorFactory, Namespace};
pub use context::*;
pub use traits::*;
pub use types::{
    Decimal, DynError, Error, Field, FieldValue, FieldVec, Message, SharedError, WrappedError,
};
