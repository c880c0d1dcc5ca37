//! Tracing integration for errorc.
//!
//! This module turns `tracing` span information into fields, so an error can
//! record which span it was raised in without any logging taking place.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! errorc = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Error, Field};

/// Key of the field produced from a span.
pub const SPAN_KEY: &str = "span";

impl Field {
    /// Builds a `span: <name>` field from `span`.
    ///
    /// Returns `None` for [`Span::none`] and for spans disabled because no
    /// subscriber is interested in them. [`with`](crate::with) drops it.
    ///
    /// ```rust
    /// use errorc::Field;
    /// use tracing::{info_span, Span};
    ///
    /// tracing::subscriber::with_default(tracing_subscriber::registry(), || {
    ///     let span = info_span!("load_config");
    ///     assert_eq!(Field::span(&span).unwrap().to_string(), "span: load_config");
    /// });
    ///
    /// assert!(Field::span(&info_span!("unobserved")).is_none());
    /// assert!(Field::span(&Span::none()).is_none());
    /// ```
    pub fn span(span: &Span) -> Option<Field> {
        span.metadata().map(|metadata| Field::string(SPAN_KEY, metadata.name()))
    }

    /// Builds a field from the span the current thread is in, if any.
    #[inline]
    pub fn current_span() -> Option<Field> {
        Self::span(&Span::current())
    }
}

/// Extension trait for `Result` types to add span fields to errors.
pub trait ResultSpanExt<T> {
    /// Adds the current span as a field.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use errorc::ResultSpanExt;
    ///
    /// fn process() -> Result<Data, errorc::Error> {
    ///     do_work().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Result<T, Error>;

    /// Adds a specific span as a field.
    fn with_span(self, span: &Span) -> Result<T, Error>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn with_current_span(self) -> Result<T, Error> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Result<T, Error> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().with([Field::span(span)])),
        }
    }
}
