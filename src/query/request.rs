use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ParseError;

/// One stored query as the dashboard transport hands it over: the
/// caller-assigned correlation id plus the opaque JSON payload.
///
/// The migrator maps envelopes to envelopes one-to-one; the ref id is
/// never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct DataQuery {
    pub ref_id: String,
    pub json: Vec<u8>,
}

impl DataQuery {
    pub fn new(ref_id: impl Into<String>, json: impl Into<Vec<u8>>) -> Self {
        Self {
            ref_id: ref_id.into(),
            json: json.into(),
        }
    }
}

/// A dimension value in either historical shape
///
/// Older dashboards stored a single string per dimension name, newer
/// ones a list of strings. Both deserialize transparently.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum DimensionValue {
    Single(String),
    Multiple(Vec<String>),
}

impl DimensionValue {
    /// Fold both shapes into an ordered value list
    ///
    /// Scalars wrap into a single-element list; list order is kept.
    pub fn to_values(&self) -> Vec<String> {
        match self {
            DimensionValue::Single(value) => vec![value.clone()],
            DimensionValue::Multiple(values) => values.clone(),
        }
    }
}

/// Request body for one metric query, as submitted by the query editor
/// or read back from stored dashboard state
///
/// Every field is optional on the wire and degrades to an empty/zero
/// value; absent optional fields are a normal query shape. Fields the
/// current schema no longer knows (e.g. an already-migrated `alias`)
/// are ignored.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawQuery {
    pub ref_id: String,
    pub region: String,
    pub namespace: String,
    pub metric_name: String,
    pub id: String,
    pub expression: String,
    pub dimensions: HashMap<String, DimensionValue>,
    pub statistic: String,
    /// Numeric seconds as a string, or the `auto` token
    pub period: String,
    pub hide: bool,
    /// Stored query family discriminant (0 = search, 1 = SQL query)
    pub metric_query_type: Option<u32>,
    /// Stored editor mode discriminant (0 = builder, 1 = raw)
    pub metric_editor_mode: Option<u32>,
}

impl RawQuery {
    /// Parse a raw query from payload bytes
    pub fn from_slice(bytes: &[u8]) -> Result<RawQuery, ParseError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
