//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use errorc::prelude::*;
//!
//! fn open(path: &'static str) -> Result<String, Error> {
//!     std::fs::read_to_string(path).with_fields([Field::string("path", path)])
//! }
//!
//! let err = open("missing.toml").unwrap_err();
//! assert!(err.to_string().ends_with(", path: missing.toml"));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`with!`](macro@crate::with)
//! - **Functions**: [`new`], [`with`](fn@crate::with), [`new_key`], [`new_with`]
//! - **Types**: [`Error`], [`Field`], [`Key`], [`KeyFactory`], [`ErrorFactory`]
//! - **Traits**: [`ResultExt`]

pub use crate::compose::key::{new_key, with_namespace, with_segments, Key, KeyFactory};
pub use crate::compose::message::{new_with, ErrorFactory};
pub use crate::{new, with};
pub use crate::traits::ResultExt;
pub use crate::types::{Error, Field};
