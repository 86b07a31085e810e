use std::fmt;

/// Errors that can occur during query normalization
#[derive(Debug)]
pub enum NormalizeError {
    /// The period field is neither a positive integer nor the `auto` token
    MalformedPeriod(String),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MalformedPeriod(spec) => {
                write!(
                    f,
                    "Malformed period '{}', expected a positive number of seconds or 'auto'",
                    spec
                )
            }
        }
    }
}

impl std::error::Error for NormalizeError {}
