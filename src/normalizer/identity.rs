//! Query identity resolution

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

lazy_static! {
    /// The backend's identifier grammar. Queries referenced from math
    /// expressions must start with a lowercase letter and stay within
    /// alphanumerics and underscores, capped at 255 characters.
    pub static ref VALID_METRIC_DATA_ID: Regex =
        Regex::new(r"^[a-z][a-zA-Z0-9_]{0,254}$").unwrap();
}

/// Resolve the backend-safe id for one query
///
/// A non-empty explicit id is returned unchanged - the caller is
/// trusted. Without one, a grammar-valid ref id gets a fixed prefix,
/// keeping ids unique per ref id and traceable back to their
/// originating query. A ref id the grammar rejects (panel refs like
/// `$$` exist in the wild) gets a synthesized id instead, stable only
/// for this normalization call.
pub fn resolve_query_id(id: &str, ref_id: &str) -> String {
    if !id.is_empty() {
        return id.to_string();
    }
    if VALID_METRIC_DATA_ID.is_match(ref_id) {
        format!("query{}", ref_id)
    } else {
        format!("query{}", Uuid::new_v4().simple())
    }
}
