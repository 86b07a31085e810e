//! Canonical query record types

use std::collections::HashMap;

/// Which query family the editor produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricQueryType {
    /// Metric search over namespace/metric/dimensions
    Search,
    /// SQL-style metric query. Present in stored dashboards; its
    /// execution path lives outside this crate.
    Query,
}

/// How a query was built in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricEditorMode {
    /// Structured builder: region/namespace/metric/dimensions as fields
    Builder,
    /// Free-text expression
    Raw,
}

/// Which shape of GetMetricData call a query maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GmdApiMode {
    /// Structured MetricStat entry
    MetricStat,
    /// Free-form math expression entry
    MathExpression,
    /// SQL expression entry (Query type only)
    SqlExpression,
}

/// The normalized, self-describing form of one metric query
///
/// Built once per incoming query by the normalizer and handed to the
/// metrics-backend client; immutable afterwards. No field requires
/// re-reading the raw payload to interpret.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalQuery {
    /// Caller-assigned correlation id, copied verbatim
    pub ref_id: String,
    /// Backend-safe identifier, always matching the backend's id grammar
    pub id: String,
    pub region: String,
    pub namespace: String,
    pub metric_name: String,
    pub statistic: String,
    /// Dimension name → ordered value list
    pub dimensions: HashMap<String, Vec<String>>,
    /// Aggregation period in seconds, always positive
    pub period: i64,
    /// Backend expression string; empty when unused
    pub expression: String,
    /// Inverse of the editor's "hide" flag
    pub return_data: bool,
    pub metric_query_type: MetricQueryType,
    pub metric_editor_mode: MetricEditorMode,
}

impl CanonicalQuery {
    /// Which GetMetricData call shape this query uses
    pub fn gmd_api_mode(&self) -> GmdApiMode {
        match (self.metric_query_type, self.metric_editor_mode) {
            (MetricQueryType::Search, MetricEditorMode::Builder) => GmdApiMode::MetricStat,
            (MetricQueryType::Search, MetricEditorMode::Raw) => GmdApiMode::MathExpression,
            (MetricQueryType::Query, _) => GmdApiMode::SqlExpression,
        }
    }
}
