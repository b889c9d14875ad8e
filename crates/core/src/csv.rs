//! Flat CSV rendering of report records.
//!
//! Records are serialized to JSON and projected column by column; nested
//! objects and arrays are written into a single cell as compact JSON.

use serde::Serialize;
use serde_json::Value;

/// Quote a cell if it contains a delimiter, quote or line break.
pub fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Convert a JSON value to the text of one CSV cell.
fn json_value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Render `records` as CSV with one column per entry in `columns`.
///
/// The first line is the header. Each record is serialized to a JSON object
/// and the named fields are projected in column order; missing fields become
/// empty cells. Every line, including the last, ends with `\n`.
pub fn records_to_csv<T: Serialize>(
    columns: &[&str],
    records: &[T],
) -> Result<String, serde_json::Error> {
    let mut out = String::new();

    let header: Vec<String> = columns.iter().map(|c| csv_escape(c)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for record in records {
        let value = serde_json::to_value(record)?;
        let row: Vec<String> = columns
            .iter()
            .map(|column| {
                let cell = value.get(*column).unwrap_or(&Value::Null);
                csv_escape(&json_value_to_cell(cell))
            })
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_values_are_not_quoted() {
        assert_eq!(csv_escape("Paint"), "Paint");
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        assert_eq!(csv_escape("12 Main St, Leeds"), "\"12 Main St, Leeds\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn header_only_for_no_records() {
        let csv = records_to_csv::<Value>(&["_id", "name"], &[]).unwrap();
        assert_eq!(csv, "_id,name\n");
    }

    #[test]
    fn projects_columns_in_order() {
        let records = vec![json!({"name": "Paint", "_id": "abc", "quantity": 6, "costPerUnit": 5.5})];
        let csv = records_to_csv(&["_id", "name", "quantity", "costPerUnit"], &records).unwrap();
        assert_eq!(csv, "_id,name,quantity,costPerUnit\nabc,Paint,6,5.5\n");
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let records = vec![json!({"_id": "abc", "notes": null})];
        let csv = records_to_csv(&["_id", "notes", "absent"], &records).unwrap();
        assert_eq!(csv, "_id,notes,absent\nabc,,\n");
    }

    #[test]
    fn nested_values_become_quoted_json() {
        let records = vec![json!({"client": {"name": "Ann"}, "logs": [1, 2]})];
        let csv = records_to_csv(&["client", "logs"], &records).unwrap();
        assert_eq!(csv, "client,logs\n\"{\"\"name\"\":\"\"Ann\"\"}\",\"[1,2]\"\n");
    }
}
