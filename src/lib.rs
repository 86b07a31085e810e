//! metricnorm - Normalize dashboard metric queries into canonical
//! cloud-metrics requests
//!
//! This library provides:
//! - Transport-facing query types (RawQuery, DataQuery, TimeRange)
//! - Legacy payload migration (statistics list collapse, alias template rewrite)
//! - Query normalization (dimensions, period, identity, query mode)
//! - The canonical query record consumed by the metrics-backend client
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `query/` - queries as the dashboard transport delivers them
//! - `canonical/` - the normalized query record and its mode enums
//!
//! **Verb modules** (transformations):
//! - `migrator/` - legacy stored payload → current-schema payload
//! - `normalizer/` - RawQuery + time range + now → CanonicalQuery
//!
//! # Example
//!
//! ```ignore
//! use metricnorm::{migrate_legacy_queries, normalize_query, RawQuery};
//!
//! let migrated = migrate_legacy_queries(&stored)?;
//! let raw = RawQuery::from_slice(&migrated[0].json)?;
//! let canonical = normalize_query(&raw, &migrated[0].ref_id, &range, now)?;
//! match canonical.gmd_api_mode() { /* MetricStat vs MathExpression call */ }
//! ```

pub mod canonical;
pub mod error;
pub mod migrator;
pub mod normalizer;
pub mod query;

// Re-export commonly used types
pub use canonical::{CanonicalQuery, GmdApiMode, MetricEditorMode, MetricQueryType};
pub use error::ParseError;
pub use migrator::{migrate_legacy_queries, MigrateError};
pub use normalizer::{normalize_query, NormalizeError};
pub use query::{DataQuery, DimensionValue, RawQuery, TimeRange};
