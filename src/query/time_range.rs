use chrono::{DateTime, Utc};

/// The request's global time window
///
/// One range applies to every query in a batch. Both instants are
/// timezone-aware and supplied by the caller; `from` precedes `to` by
/// caller contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Window length in whole seconds
    pub fn span_seconds(&self) -> i64 {
        (self.to - self.from).num_seconds()
    }
}
