//! Integration tests for request validation
//!
//! These tests walk the validation gates in order and check that:
//! 1. Each gate reports its own error, first failure wins
//! 2. Client input problems and per-value problems land in different classes
//! 3. A valid payload always comes out sorted by date

use calchart_domain::chart::{parse_chart_request, ChartError, REQUIRED_FIELDS};
use serde_json::{json, Value};

fn parse(value: Value) -> Result<calchart_domain::ChartRequest, ChartError> {
    parse_chart_request(&serde_json::to_vec(&value).expect("serializable"))
}

fn base() -> Value {
    json!({
        "start_date": "2024-01-01",
        "end_date": "2024-01-03",
        "data": [
            {"date": "2024-01-02", "calories": 300},
            {"date": "2024-01-01", "calories": 200}
        ]
    })
}

/// Removing fields one by one always reports the earliest one in check order
#[test]
fn test_first_missing_field_wins() {
    for (i, field) in REQUIRED_FIELDS.iter().enumerate() {
        let mut payload = base();
        let object = payload.as_object_mut().unwrap();
        for later in &REQUIRED_FIELDS[i..] {
            object.remove(*later);
        }
        // Keep at least one key so the payload stays truthy
        object.insert("extra".to_string(), json!(true));

        assert_eq!(parse(payload), Err(ChartError::MissingField(*field)));
    }
}

#[test]
fn test_date_format_checked_before_data_shape() {
    let payload = json!({
        "start_date": "2024/01/01",
        "end_date": "2024-01-03",
        "data": []
    });

    assert_eq!(parse(payload), Err(ChartError::InvalidDateFormat));
}

#[test]
fn test_client_errors_vs_unexpected_failures() {
    let client = [
        json!({"start_date": "2024-01-01", "end_date": "2024-01-03", "data": []}),
        json!({"start_date": "2024-01-01", "end_date": "2024-01-03", "data": {"a": 1}}),
        json!({"start_date": "2024-01-01", "end_date": "2024-01-03", "data": [{"foo": 1}]}),
        json!({"start_date": "01-01-2024", "end_date": "2024-01-03", "data": []}),
    ];
    for payload in client {
        let err = parse(payload.clone()).unwrap_err();
        assert!(err.is_client_error(), "{payload} should be a client error");
    }

    let unexpected = json!({
        "start_date": "2024-01-01",
        "end_date": "2024-01-03",
        "data": [{"date": "not-a-date", "calories": 10}]
    });
    assert!(!parse(unexpected).unwrap_err().is_client_error());
}

#[test]
fn test_valid_request_sorted_ascending() {
    let request = parse(base()).unwrap();
    let dates: Vec<String> = request
        .series()
        .points()
        .iter()
        .map(|p| p.date.to_string())
        .collect();

    assert_eq!(dates, vec!["2024-01-01", "2024-01-02"]);
}

#[test]
fn test_fractional_calories_and_extra_keys() {
    let payload = json!({
        "start_date": "2024-01-01",
        "end_date": "2024-01-03",
        "data": [{"date": "2024-01-01", "calories": 12.5, "activity": "walk"}]
    });

    let request = parse(payload).unwrap();
    assert_eq!(request.series().points()[0].calories, 12.5);
}
