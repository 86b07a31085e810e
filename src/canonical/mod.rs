mod query;

pub use query::{CanonicalQuery, GmdApiMode, MetricEditorMode, MetricQueryType};
