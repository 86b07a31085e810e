//! Alias template rewriting

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A `{{name}}` placeholder, whitespace-tolerant inside the braces
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*(.+?)\s*\}\}").unwrap();
}

/// Rewrite one legacy alias template into a dynamic-label expression
///
/// Each placeholder rewrites independently and the literal text around
/// it (spaces included) is preserved. Names other than the two fixed
/// ones are treated as dimension keys. An already-rewritten string
/// contains no `{{...}}` tokens, so reapplying is a no-op.
///
/// The two output bracket forms differ (`${PROP('Period')}` vs
/// `$PROP{'Dim.name'}`); both are exactly what the dynamic-label
/// grammar on the consuming side accepts.
pub fn rewrite_alias(alias: &str) -> String {
    PLACEHOLDER
        .replace_all(alias, |caps: &Captures<'_>| match &caps[1] {
            "period" => "${PROP('Period')}".to_string(),
            "label" => "${LABEL}".to_string(),
            name => format!("$PROP{{'Dim.{}'}}", name),
        })
        .into_owned()
}
