use std::fmt;

/// Errors that can occur during legacy query migration
#[derive(Debug)]
pub enum MigrateError {
    /// A stored payload's bytes are not valid JSON
    MalformedPayload {
        ref_id: String,
        source: serde_json::Error,
    },
}

impl MigrateError {
    /// Ref id of the query whose payload failed to migrate
    pub fn ref_id(&self) -> &str {
        match self {
            MigrateError::MalformedPayload { ref_id, .. } => ref_id,
        }
    }
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::MalformedPayload { ref_id, source } => {
                write!(f, "Query '{}' carries a malformed payload: {}", ref_id, source)
            }
        }
    }
}

impl std::error::Error for MigrateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MigrateError::MalformedPayload { source, .. } => Some(source),
        }
    }
}
