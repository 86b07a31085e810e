//! Aggregation period resolution
//!
//! An explicit period from the editor always wins, even when it
//! disagrees with what auto-selection would pick. The `auto` token
//! derives a period from the window length, constrained by the
//! backend's resolution-retention tiers: old enough data only exists at
//! coarser granularities, so the window's absolute age matters as much
//! as its length.

use chrono::{DateTime, Duration, Utc};

use super::error::NormalizeError;
use crate::query::TimeRange;

/// Target seconds-per-datapoint divisor for auto-selection. Tuned so a
/// 2-day range lands on 300s and a 2-year range on 86400s.
const AUTO_PERIOD_DIVISOR: i64 = 2000;

/// Resolve the aggregation period for one query, in seconds
///
/// `spec` is the raw period field: a positive integer-as-string, the
/// `auto` token (any case), or empty, which historic payloads use
/// interchangeably with `auto`. `now` is injected by the caller so a
/// whole batch resolves against one consistent wall clock.
pub fn resolve_period(
    spec: &str,
    range: &TimeRange,
    now: DateTime<Utc>,
) -> Result<i64, NormalizeError> {
    if spec.is_empty() || spec.eq_ignore_ascii_case("auto") {
        return Ok(auto_period(range, now));
    }
    match spec.parse::<i64>() {
        Ok(period) if period > 0 => Ok(period),
        _ => Err(NormalizeError::MalformedPeriod(spec.to_string())),
    }
}

/// Pick the smallest retained period that keeps the datapoint count in
/// bounds, falling back to the coarsest when the window is too wide
fn auto_period(range: &TimeRange, now: DateTime<Utc>) -> i64 {
    let periods = retained_periods(now - range.from);
    let datapoints = div_ceil(range.span_seconds(), AUTO_PERIOD_DIVISOR);
    periods
        .iter()
        .copied()
        .find(|&period| datapoints <= period)
        .unwrap_or(periods[periods.len() - 1])
}

/// Periods still retrievable for a window whose start is `age` in the
/// past
///
/// Mirrors the backend's retention tiers: 60s datapoints are kept for
/// 15 days, 300s for 63 days, 3600s for 455 days, coarser ones longer.
fn retained_periods(age: Duration) -> &'static [i64] {
    if age > Duration::days(455) {
        &[21_600, 86_400]
    } else if age > Duration::days(63) {
        &[3_600, 21_600, 86_400]
    } else if age > Duration::days(15) {
        &[300, 900, 3_600, 21_600, 86_400]
    } else {
        &[60, 300, 900, 3_600, 21_600, 86_400]
    }
}

fn div_ceil(numerator: i64, divisor: i64) -> i64 {
    (numerator + divisor - 1) / divisor
}
