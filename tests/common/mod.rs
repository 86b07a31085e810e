//! Shared test utilities for integration tests

// Each integration test binary compiles this module separately and
// uses a different subset of it.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use metricnorm::{RawQuery, TimeRange};
use serde_json::{json, Value};

/// Fixed wall clock so period resolution is deterministic
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// A minimal builder-mode query, mirroring what the query editor emits
pub fn base_query() -> Value {
    json!({
        "refId": "ref1",
        "region": "us-east-1",
        "namespace": "ec2",
        "metricName": "CPUUtilization",
        "statistic": "Average",
        "period": "900",
    })
}

/// Deserialize a JSON value through the payload path
pub fn raw_query(value: &Value) -> RawQuery {
    let bytes = serde_json::to_vec(value).unwrap();
    RawQuery::from_slice(&bytes).unwrap()
}

/// Window of `span` ending `end_ago` before the fixed clock
pub fn window(end_ago: Duration, span: Duration) -> TimeRange {
    let to = now() - end_ago;
    TimeRange::new(to - span, to)
}

/// Parse migrated payload bytes back into a JSON value for comparison
pub fn as_value(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}
