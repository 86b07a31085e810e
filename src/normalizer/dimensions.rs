//! Dimension map normalization

use std::collections::HashMap;

use crate::query::DimensionValue;

/// Normalize a raw dimension map into name → ordered value list
///
/// Accepts both historical shapes per key (single string or list of
/// strings). Scalars wrap into a single-element list, list order within
/// a key is preserved, and no value is dropped or deduplicated. Whether
/// names and values mean anything to the backend is the backend
/// client's concern.
pub fn normalize_dimensions(
    raw: &HashMap<String, DimensionValue>,
) -> HashMap<String, Vec<String>> {
    raw.iter()
        .map(|(name, value)| (name.clone(), value.to_values()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_wraps_into_list() {
        let raw = HashMap::from([(
            "InstanceId".to_string(),
            DimensionValue::Single("i-123".to_string()),
        )]);

        let normalized = normalize_dimensions(&raw);
        assert_eq!(normalized["InstanceId"], vec!["i-123"]);
    }

    #[test]
    fn test_list_order_preserved() {
        let raw = HashMap::from([(
            "InstanceType".to_string(),
            DimensionValue::Multiple(vec!["m5.large".to_string(), "m5.xlarge".to_string()]),
        )]);

        let normalized = normalize_dimensions(&raw);
        assert_eq!(normalized["InstanceType"], vec!["m5.large", "m5.xlarge"]);
    }

    #[test]
    fn test_duplicates_survive() {
        let raw = HashMap::from([(
            "az".to_string(),
            DimensionValue::Multiple(vec!["us-east-1a".to_string(), "us-east-1a".to_string()]),
        )]);

        let normalized = normalize_dimensions(&raw);
        assert_eq!(normalized["az"].len(), 2);
    }

    #[test]
    fn test_empty_map() {
        assert!(normalize_dimensions(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_no_keys_lost_or_added() {
        let raw = HashMap::from([
            (
                "InstanceId".to_string(),
                DimensionValue::Single("i-1".to_string()),
            ),
            (
                "InstanceType".to_string(),
                DimensionValue::Multiple(vec!["t2".to_string(), "t3".to_string()]),
            ),
        ]);

        let normalized = normalize_dimensions(&raw);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized["InstanceId"].len(), 1);
        assert_eq!(normalized["InstanceType"].len(), 2);
    }
}
