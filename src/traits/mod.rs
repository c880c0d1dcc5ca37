//! Extension traits.
//!
//! - [`ResultExt`]: attach fields to the error side of a `Result`
//! - [`ResultSpanExt`]: attach the active tracing span (requires `tracing`)

pub mod result_ext;

pub use result_ext::ResultExt;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::ResultSpanExt;
