mod dimensions;
mod error;
mod identity;
mod mode;
mod normalize;
mod period;

pub use dimensions::normalize_dimensions;
pub use error::NormalizeError;
pub use identity::{resolve_query_id, VALID_METRIC_DATA_ID};
pub use mode::classify_query;
pub use normalize::normalize_query;
pub use period::resolve_period;
