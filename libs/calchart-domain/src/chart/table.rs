//! Record table built from the `data` array
//!
//! Each element of `data` becomes one row. Columns are the union of keys seen
//! across all rows, in first-seen order. Elements that are not JSON objects
//! still occupy a row, they just have no keys.

use serde_json::{Map, Value};

/// A borrowed, column-addressable view over a list of JSON records
#[derive(Debug)]
pub struct RecordTable<'a> {
    columns: Vec<&'a str>,
    rows: Vec<Option<&'a Map<String, Value>>>,
}

impl<'a> RecordTable<'a> {
    /// Build a table with one row per record
    pub fn from_records(records: &'a [Value]) -> Self {
        let mut columns: Vec<&'a str> = Vec::new();
        let rows = records
            .iter()
            .map(|record| {
                let row = record.as_object();
                for key in row.into_iter().flat_map(|map| map.keys()) {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key.as_str());
                    }
                }
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Whether any row supplied this key
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(&name)
    }

    /// Indices of rows that lack `name`
    pub fn rows_missing(&self, name: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_some_and(|map| map.contains_key(name)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Values of one column in row order, `None` where a row lacks the key
    pub fn column(&self, name: &'a str) -> impl Iterator<Item = Option<&'a Value>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.and_then(|map| map.get(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_are_union_in_first_seen_order() {
        let records = vec![
            json!({"date": "2024-01-01"}),
            json!({"calories": 10, "date": "2024-01-02", "note": "run"}),
        ];
        let table = RecordTable::from_records(&records);

        assert!(table.has_column("date"));
        assert!(table.has_column("calories"));
        assert!(table.has_column("note"));
        assert_eq!(table.columns, vec!["date", "calories", "note"]);
        assert_eq!(table.rows_missing("calories"), vec![0]);
    }

    #[test]
    fn test_non_object_rows_have_no_keys() {
        let records = vec![json!(1), json!("x"), json!({"foo": 1})];
        let table = RecordTable::from_records(&records);

        assert_eq!(table.columns, vec!["foo"]);
        assert_eq!(table.rows_missing("foo"), vec![0, 1]);
    }

    #[test]
    fn test_column_values() {
        let records = vec![json!({"calories": 1}), json!({"date": "x"})];
        let table = RecordTable::from_records(&records);

        let values: Vec<_> = table.column("calories").collect();
        assert_eq!(values, vec![Some(&json!(1)), None]);
    }
}
