use chrono::{DateTime, Utc};

use super::dimensions::normalize_dimensions;
use super::error::NormalizeError;
use super::identity::resolve_query_id;
use super::mode::classify_query;
use super::period::resolve_period;
use crate::canonical::CanonicalQuery;
use crate::query::{RawQuery, TimeRange};

/// Normalize one raw query into its canonical record
///
/// `ref_id` is the transport-level correlation id for this query;
/// `range` and `now` are the batch-wide time window and wall clock the
/// caller applies to every query of one dashboard render.
///
/// Straight-through fields degrade to empty values when absent; only a
/// period that parses as neither a positive number nor `auto` fails the
/// query. On error no partial record is returned, and sibling queries
/// in the batch are unaffected.
pub fn normalize_query(
    raw: &RawQuery,
    ref_id: &str,
    range: &TimeRange,
    now: DateTime<Utc>,
) -> Result<CanonicalQuery, NormalizeError> {
    let period = resolve_period(&raw.period, range, now)?;
    let (metric_query_type, metric_editor_mode) = classify_query(raw);

    Ok(CanonicalQuery {
        ref_id: ref_id.to_string(),
        id: resolve_query_id(&raw.id, ref_id),
        region: raw.region.clone(),
        namespace: raw.namespace.clone(),
        metric_name: raw.metric_name.clone(),
        statistic: raw.statistic.clone(),
        dimensions: normalize_dimensions(&raw.dimensions),
        period,
        expression: raw.expression.clone(),
        return_data: !raw.hide,
        metric_query_type,
        metric_editor_mode,
    })
}
