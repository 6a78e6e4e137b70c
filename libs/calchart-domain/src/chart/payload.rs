//! Request payload validation
//!
//! Turns a raw request body into a `ChartRequest`. The checks run in a fixed
//! order and the first failure wins, so callers always get the error for the
//! earliest violated constraint.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;

use super::{
    dates::parse_iso_date,
    entity::{CalorieSeries, ChartRequest, DataPoint},
    error::{ChartError, Result},
    table::RecordTable,
};

/// Top-level fields every payload must carry, in check order
pub const REQUIRED_FIELDS: [&str; 3] = ["start_date", "end_date", "data"];

const DATE_COLUMN: &str = "date";
const CALORIES_COLUMN: &str = "calories";

/// Parse and validate a chart request body
///
/// # Errors
///
/// - `ChartError::NoPayload` if the body is not JSON or is an empty/falsy value
/// - `ChartError::MissingField` naming the first absent field
/// - `ChartError::InvalidDateFormat` if either bound is not `YYYY-MM-DD`
/// - `ChartError::InvalidData` if `data` is not a non-empty list
/// - `ChartError::MissingColumns` if any entry lacks `date` or `calories`
/// - `ChartError::InvalidDateValue` / `ChartError::InvalidCalories` for bad entry values
pub fn parse_chart_request(body: &[u8]) -> Result<ChartRequest> {
    let payload: Value = serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "Request body is not valid JSON");
        ChartError::NoPayload
    })?;

    if !is_truthy(&payload) {
        return Err(ChartError::NoPayload);
    }

    // Truthy non-object payloads simply have no fields.
    let no_fields = Map::new();
    let fields = payload.as_object().unwrap_or(&no_fields);

    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| !fields.contains_key(**field))
    {
        return Err(ChartError::MissingField(*missing));
    }

    let start_date = parse_bound(fields.get("start_date"))?;
    let end_date = parse_bound(fields.get("end_date"))?;

    let records = match fields.get("data") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(ChartError::InvalidData),
    };

    let table = RecordTable::from_records(records);
    if !table.has_column(DATE_COLUMN) || !table.has_column(CALORIES_COLUMN) {
        return Err(ChartError::MissingColumns);
    }
    for column in [DATE_COLUMN, CALORIES_COLUMN] {
        let missing = table.rows_missing(column);
        if !missing.is_empty() {
            debug!(column, rows = ?missing, "Entries missing a required key");
            return Err(ChartError::MissingColumns);
        }
    }

    let series = build_series(&table)?;

    Ok(ChartRequest::new(start_date, end_date, series))
}

fn parse_bound(value: Option<&Value>) -> Result<NaiveDate> {
    value
        .and_then(Value::as_str)
        .and_then(parse_iso_date)
        .ok_or(ChartError::InvalidDateFormat)
}

fn build_series(table: &RecordTable<'_>) -> Result<CalorieSeries> {
    let points = table
        .column(DATE_COLUMN)
        .zip(table.column(CALORIES_COLUMN))
        .enumerate()
        .map(|(index, (date, calories))| -> Result<DataPoint> {
            let date = date
                .and_then(Value::as_str)
                .and_then(parse_iso_date)
                .ok_or_else(|| ChartError::invalid_date_value(index, render_value(date)))?;
            let calories = calories
                .and_then(Value::as_f64)
                .ok_or_else(|| ChartError::invalid_calories(index, render_value(calories)))?;

            Ok(DataPoint::new(date, calories))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CalorieSeries::new(points))
}

fn render_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), Value::to_string)
}

/// JSON truthiness: `null`, `false`, zero, and empty strings/arrays/objects are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    fn valid_payload() -> Value {
        json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-03",
            "data": [
                {"date": "2024-01-02", "calories": 300},
                {"date": "2024-01-01", "calories": 200}
            ]
        })
    }

    #[test]
    fn test_valid_payload_is_sorted() {
        let request = parse_chart_request(&body(valid_payload())).unwrap();

        let points = request.series().points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date.to_string(), "2024-01-01");
        assert_eq!(points[0].calories, 200.0);
        assert_eq!(points[1].date.to_string(), "2024-01-02");
        assert_eq!(request.start_date().to_string(), "2024-01-01");
        assert_eq!(request.end_date().to_string(), "2024-01-03");
    }

    #[test]
    fn test_invalid_json_is_no_payload() {
        assert_eq!(
            parse_chart_request(b"{not json"),
            Err(ChartError::NoPayload)
        );
        assert_eq!(parse_chart_request(b""), Err(ChartError::NoPayload));
    }

    #[test]
    fn test_falsy_json_is_no_payload() {
        for falsy in ["null", "{}", "[]", "false", "0", "\"\""] {
            assert_eq!(
                parse_chart_request(falsy.as_bytes()),
                Err(ChartError::NoPayload),
                "{falsy} should count as no payload"
            );
        }
    }

    #[test]
    fn test_truthy_non_object_reports_first_field() {
        assert_eq!(
            parse_chart_request(b"[1, 2]"),
            Err(ChartError::MissingField("start_date"))
        );
    }

    #[test]
    fn test_missing_fields_in_check_order() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("data");
        payload.as_object_mut().unwrap().remove("end_date");

        assert_eq!(
            parse_chart_request(&body(payload)),
            Err(ChartError::MissingField("end_date"))
        );
    }

    #[test]
    fn test_bad_bound_format() {
        for bad in ["2024-13-40", "01-01-2024", "2024/01/01"] {
            let mut payload = valid_payload();
            payload["end_date"] = json!(bad);
            assert_eq!(
                parse_chart_request(&body(payload)),
                Err(ChartError::InvalidDateFormat)
            );
        }

        let mut payload = valid_payload();
        payload["start_date"] = json!(20240101);
        assert_eq!(
            parse_chart_request(&body(payload)),
            Err(ChartError::InvalidDateFormat)
        );
    }

    #[test]
    fn test_bounds_do_not_filter_data() {
        let mut payload = valid_payload();
        payload["start_date"] = json!("2030-01-01");
        payload["end_date"] = json!("2020-01-01");

        let request = parse_chart_request(&body(payload)).unwrap();
        assert_eq!(request.series().len(), 2);
    }

    #[test]
    fn test_data_shape() {
        let mut payload = valid_payload();
        payload["data"] = json!([]);
        assert_eq!(
            parse_chart_request(&body(payload.clone())),
            Err(ChartError::InvalidData)
        );

        payload["data"] = json!({"date": "2024-01-01", "calories": 1});
        assert_eq!(
            parse_chart_request(&body(payload)),
            Err(ChartError::InvalidData)
        );
    }

    #[test]
    fn test_missing_columns() {
        let mut payload = valid_payload();
        payload["data"] = json!([{"foo": 1}]);
        assert_eq!(
            parse_chart_request(&body(payload)),
            Err(ChartError::MissingColumns)
        );
    }

    #[test]
    fn test_single_entry_missing_key_is_rejected() {
        let mut payload = valid_payload();
        payload["data"] = json!([
            {"date": "2024-01-01", "calories": 100},
            {"date": "2024-01-02"}
        ]);
        assert_eq!(
            parse_chart_request(&body(payload)),
            Err(ChartError::MissingColumns)
        );
    }

    #[test]
    fn test_malformed_entry_date_is_not_client_error() {
        let mut payload = valid_payload();
        payload["data"] = json!([{"date": "not-a-date", "calories": 100}]);

        let err = parse_chart_request(&body(payload)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDateValue { index: 0, .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_non_numeric_calories() {
        let mut payload = valid_payload();
        payload["data"] = json!([
            {"date": "2024-01-01", "calories": 100},
            {"date": "2024-01-02", "calories": "lots"}
        ]);

        let err = parse_chart_request(&body(payload)).unwrap_err();
        assert_eq!(err, ChartError::invalid_calories(1, "\"lots\""));
    }
}
