//! Utility functions for tracing

/// Create a span around one composition
///
/// # Example
///
/// ```rust
/// use chatter_observability::compose_span;
///
/// let span = compose_span!("greet", 1);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! compose_span {
    ($template:expr, $prefixes:expr) => {
        tracing::info_span!(
            "compose",
            template = $template,
            prefixes = $prefixes,
            batches = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Create a span around a single template render
///
/// # Example
///
/// ```rust
/// use chatter_observability::render_span;
///
/// let span = render_span!("greet.tmpl");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! render_span {
    ($template:expr) => {
        tracing::debug_span!("render", template = $template, output_len = tracing::field::Empty)
    };
}

/// Record an error on the current span
///
/// Marks the span as failed and logs the error.
///
/// # Example
///
/// ```rust
/// use chatter_observability::record_error;
///
/// let err = std::io::Error::other("boom");
/// record_error(&err);
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use chatter_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
