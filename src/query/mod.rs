mod request;
mod time_range;

pub use request::{DataQuery, DimensionValue, RawQuery};
pub use time_range::TimeRange;
