//! Query mode classification

use crate::canonical::{MetricEditorMode, MetricQueryType};
use crate::query::RawQuery;

/// Classify how a raw query should execute
///
/// A non-empty expression forces the raw-editor path no matter what the
/// stored mode fields claim; stored alerting queries predate the mode
/// fields entirely and carry only the expression. Every query lands in
/// exactly one of the two outcomes - there is no error case at this
/// layer.
pub fn classify_query(raw: &RawQuery) -> (MetricQueryType, MetricEditorMode) {
    if raw.expression.is_empty() {
        (MetricQueryType::Search, MetricEditorMode::Builder)
    } else {
        (MetricQueryType::Search, MetricEditorMode::Raw)
    }
}
