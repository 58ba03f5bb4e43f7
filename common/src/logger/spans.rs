use tracing::{Span, field};

use super::TraceId;

/// Root span for one TTI of one cell.
pub fn root_span(name: &'static str, trace_id: &TraceId, tti: u64) -> Span {
    tracing::info_span!(
        "tti",
        name = %name,
        trace_id = %trace_id,
        tti,
        cell = field::Empty
    )
}

/// Child span (inherits trace_id from the enclosing root span).
pub fn child_span(name: &'static str) -> Span {
    tracing::info_span!("child", name = %name)
}
