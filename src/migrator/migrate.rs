//! Legacy payload migration
//!
//! Stored dashboards predate two schema changes: the multi-statistic
//! `statistics` array collapsed to a scalar `statistic`, and free-text
//! alias templates were replaced by dynamic-label expressions. Both
//! rewrites are idempotent, so re-migrating an already-current payload
//! is a no-op.

use serde_json::{Map, Value};
use tracing::debug;

use super::alias::rewrite_alias;
use super::error::MigrateError;
use crate::query::DataQuery;

/// Migrate a batch of stored queries into the current schema
///
/// A strict one-to-one, order-preserving rewrite: N inputs yield N
/// outputs carrying the same ref ids in the same order. Payloads
/// without legacy fields pass through unchanged apart from JSON
/// re-encoding. Each element migrates independently; a malformed
/// payload fails the batch with the offending ref id and corrupts no
/// sibling output.
pub fn migrate_legacy_queries(queries: &[DataQuery]) -> Result<Vec<DataQuery>, MigrateError> {
    queries.iter().map(migrate_query).collect()
}

fn migrate_query(query: &DataQuery) -> Result<DataQuery, MigrateError> {
    let mut model: Map<String, Value> =
        serde_json::from_slice(&query.json).map_err(|source| MigrateError::MalformedPayload {
            ref_id: query.ref_id.clone(),
            source,
        })?;

    collapse_statistics(&mut model, &query.ref_id);
    migrate_alias(&mut model, &query.ref_id);

    let json = serde_json::to_vec(&model).map_err(|source| MigrateError::MalformedPayload {
        ref_id: query.ref_id.clone(),
        source,
    })?;
    Ok(DataQuery {
        ref_id: query.ref_id.clone(),
        json,
    })
}

/// Collapse the legacy `statistics` array into the scalar `statistic`
///
/// Only the first requested statistic survives; the current schema
/// cannot represent more than one. A payload already carrying a scalar
/// `statistic` is left alone, and an empty array is removed without
/// synthesizing a statistic.
fn collapse_statistics(model: &mut Map<String, Value>, ref_id: &str) {
    if model.contains_key("statistic") {
        return;
    }
    if !matches!(model.get("statistics"), Some(Value::Array(_))) {
        return;
    }
    let Some(Value::Array(statistics)) = model.remove("statistics") else {
        return;
    };
    if let Some(first) = statistics.into_iter().next() {
        debug!("query {}: collapsed legacy statistics array", ref_id);
        model.insert("statistic".to_string(), first);
    }
}

/// Rewrite a legacy `alias` template in place
fn migrate_alias(model: &mut Map<String, Value>, ref_id: &str) {
    let Some(alias) = model.get("alias").and_then(Value::as_str) else {
        return;
    };
    if alias.is_empty() {
        return;
    }
    let rewritten = rewrite_alias(alias);
    if rewritten != alias {
        debug!("query {}: rewrote legacy alias to dynamic label", ref_id);
    }
    model.insert("alias".to_string(), Value::String(rewritten));
}
