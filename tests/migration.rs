//! Legacy payload migration: stored dashboard JSON → current schema

mod common;

use common::as_value;
use metricnorm::{migrate_legacy_queries, DataQuery};
use serde_json::json;

fn legacy_payload(alias: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "region": "us-east-1",
        "namespace": "ec2",
        "metricName": "CPUUtilization",
        "alias": alias,
        "dimensions": { "InstanceId": ["test"] },
        "statistics": ["Average", "Sum"],
        "period": "600",
        "hide": false,
    }))
    .unwrap()
}

#[test]
fn legacy_statistics_field_is_migrated() {
    let payload = serde_json::to_vec(&json!({
        "region": "us-east-1",
        "namespace": "ec2",
        "metricName": "CPUUtilization",
        "dimensions": { "InstanceId": ["test"] },
        "statistics": ["Average", "Sum"],
        "period": "600",
        "hide": false,
    }))
    .unwrap();

    let migrated = migrate_legacy_queries(&[DataQuery::new("A", payload)]).unwrap();
    assert_eq!(migrated.len(), 1);
    assert_eq!(migrated[0].ref_id, "A");

    let model = as_value(&migrated[0].json);
    assert_eq!(model["statistic"], json!("Average"));
    assert!(model.get("statistics").is_none());
}

#[test]
fn alias_field_is_migrated_to_dynamic_labels_for_single_query() {
    let queries = [DataQuery::new(
        "A",
        legacy_payload("{{period}} {{any_other_word}}"),
    )];

    let migrated = migrate_legacy_queries(&queries).unwrap();
    assert_eq!(migrated.len(), 1);

    assert_eq!(
        as_value(&migrated[0].json),
        json!({
            "alias": "${PROP('Period')} $PROP{'Dim.any_other_word'}",
            "dimensions": { "InstanceId": ["test"] },
            "hide": false,
            "metricName": "CPUUtilization",
            "namespace": "ec2",
            "period": "600",
            "region": "us-east-1",
            "statistic": "Average",
        })
    );
}

#[test]
fn alias_field_is_migrated_to_dynamic_labels_for_multiple_queries() {
    let queries = [
        DataQuery::new("A", legacy_payload("{{period}} {{any_other_word}}")),
        DataQuery::new("B", legacy_payload("{{  label }}")),
    ];

    let migrated = migrate_legacy_queries(&queries).unwrap();
    assert_eq!(migrated.len(), 2);
    assert_eq!(migrated[0].ref_id, "A");
    assert_eq!(migrated[1].ref_id, "B");

    assert_eq!(
        as_value(&migrated[0].json)["alias"],
        json!("${PROP('Period')} $PROP{'Dim.any_other_word'}")
    );
    assert_eq!(as_value(&migrated[1].json)["alias"], json!("${LABEL}"));
}

#[test]
fn current_schema_payload_passes_through() {
    let payload = serde_json::to_vec(&json!({
        "region": "us-east-1",
        "namespace": "ec2",
        "metricName": "CPUUtilization",
        "dimensions": { "InstanceId": ["test"] },
        "statistic": "Maximum",
        "period": "300",
        "hide": false,
    }))
    .unwrap();
    let before = as_value(&payload);

    let migrated = migrate_legacy_queries(&[DataQuery::new("A", payload)]).unwrap();
    assert_eq!(as_value(&migrated[0].json), before);
}

#[test]
fn migration_is_idempotent() {
    let queries = [DataQuery::new("A", legacy_payload("{{period}} {{label}}"))];

    let once = migrate_legacy_queries(&queries).unwrap();
    let twice = migrate_legacy_queries(&once).unwrap();

    assert_eq!(as_value(&once[0].json), as_value(&twice[0].json));
}

#[test]
fn malformed_payload_reports_ref_id_of_failed_query() {
    let queries = [
        DataQuery::new("A", legacy_payload("{{label}}")),
        DataQuery::new("B", &b"{truncated"[..]),
    ];

    let err = migrate_legacy_queries(&queries).unwrap_err();
    assert_eq!(err.ref_id(), "B");
    assert!(err.to_string().contains('B'));
}
