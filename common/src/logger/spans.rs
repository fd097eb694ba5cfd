use tracing::{Span, field};

use super::TraceId;

/// Root span for one swap run. `deposit_address` is filled in once the
/// quote has been received.
pub fn swap_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "swap",
        kind = %name,
        trace_id = %trace_id.as_str(),
        deposit_address = field::Empty
    )
}

pub fn record_deposit_address(deposit_address: &str) {
    Span::current().record("deposit_address", field::display(deposit_address));
}
