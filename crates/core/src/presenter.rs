//! Console rendering of the fetched payload.
//!
//! The payload is untrusted: anything that is not an array produces a single
//! diagnostic line, and array elements that do not look like records are
//! reported inline instead of failing the run.

use std::fmt;
use std::io::{self, Write};

use serde_json::Value;
use tracing::{debug, warn};

/// One line of presenter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentedLine {
    /// The payload is missing or is not an array.
    NoData,
    /// Announces that an array was received.
    Header,
    /// A well-formed record.
    Record { id: String, name: String },
    /// An element that is not a well-formed record, in compact JSON form.
    InvalidItem(String),
}

impl fmt::Display for PresentedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentedLine::NoData => {
                write!(f, "No data received or data is not in the expected format.")
            }
            PresentedLine::Header => write!(f, "Data received:"),
            PresentedLine::Record { id, name } => write!(f, "ID: {}, Name: {}", id, name),
            PresentedLine::InvalidItem(item) => write!(f, "Invalid data item: {}", item),
        }
    }
}

/// A borrowed view of an element that carries a truthy `id` and `name`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub id: &'a Value,
    pub name: &'a Value,
}

impl<'a> Record<'a> {
    /// Returns `None` unless `value` is an object with truthy `id` and `name`.
    ///
    /// `id: 0` and `name: ""` are rejected like any other falsy value.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let object = value.as_object()?;
        let id = object.get("id").filter(|v| is_truthy(v))?;
        let name = object.get("name").filter(|v| is_truthy(v))?;
        Some(Self { id, name })
    }
}

/// Truthiness of a JSON value.
///
/// Falsy: `null`, `false`, `0`/`-0.0` and `""`. Everything else is truthy,
/// including empty arrays and objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings are shown without quotes, everything else as compact JSON.
fn display_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turn the payload into the ordered list of output lines.
pub fn render(data: &Value) -> Vec<PresentedLine> {
    let Some(items) = data.as_array() else {
        debug!("Payload is not an array");
        return vec![PresentedLine::NoData];
    };

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(PresentedLine::Header);
    lines.extend(items.iter().map(|item| match Record::from_value(item) {
        Some(record) => PresentedLine::Record {
            id: display_field(record.id),
            name: display_field(record.name),
        },
        None => PresentedLine::InvalidItem(item.to_string()),
    }));
    lines
}

/// Write the rendered payload to `out`, one line per entry.
pub fn present_to<W: Write>(data: &Value, out: &mut W) -> io::Result<()> {
    for line in render(data) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Write the rendered payload to stdout.
///
/// Output failures (closed pipe and the like) are logged, never returned.
pub fn present(data: &Value) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = present_to(data, &mut out) {
        warn!("Failed to write output: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendered(data: &Value) -> Vec<String> {
        render(data).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_mixed_records() {
        let data = json!([{"id": 1, "name": "Alice"}, {"id": 2, "name": ""}, "not an object"]);
        assert_eq!(
            rendered(&data),
            vec![
                "Data received:",
                "ID: 1, Name: Alice",
                r#"Invalid data item: {"id":2,"name":""}"#,
                r#"Invalid data item: "not an object""#,
            ]
        );
    }

    #[test]
    fn test_null_and_non_array_payloads() {
        for data in [
            Value::Null,
            json!({"id": 1, "name": "Alice"}),
            json!("users"),
            json!(42),
            json!(true),
        ] {
            assert_eq!(render(&data), vec![PresentedLine::NoData], "{data}");
        }
        assert_eq!(
            PresentedLine::NoData.to_string(),
            "No data received or data is not in the expected format."
        );
    }

    #[test]
    fn test_empty_array_prints_only_header() {
        assert_eq!(render(&json!([])), vec![PresentedLine::Header]);
    }

    #[test]
    fn test_string_fields_are_unquoted() {
        let data = json!([{"id": "7", "name": "Bob"}]);
        assert_eq!(rendered(&data), vec!["Data received:", "ID: 7, Name: Bob"]);
    }

    #[test]
    fn test_non_string_fields_use_json_form() {
        let data = json!([{"id": 1.5, "name": ["a", "b"]}, {"id": true, "name": {"first": "C"}}]);
        assert_eq!(
            rendered(&data),
            vec![
                "Data received:",
                r#"ID: 1.5, Name: ["a","b"]"#,
                r#"ID: true, Name: {"first":"C"}"#,
            ]
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let data = json!([{"id": 3, "name": "Clementine", "email": "c@example.com"}]);
        assert_eq!(rendered(&data)[1], "ID: 3, Name: Clementine");
    }

    #[test]
    fn test_falsy_fields_make_record_invalid() {
        for item in [
            json!({"id": 0, "name": "Zero"}),
            json!({"id": -0.0, "name": "Negative zero"}),
            json!({"id": null, "name": "Null"}),
            json!({"id": false, "name": "False"}),
            json!({"id": 1, "name": null}),
            json!({"id": 1}),
            json!({"name": "No id"}),
            json!({}),
            json!(null),
            json!([1, "Alice"]),
        ] {
            assert!(Record::from_value(&item).is_none(), "{item}");
            assert_eq!(
                render(&json!([item.clone()]))[1],
                PresentedLine::InvalidItem(item.to_string())
            );
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(0.1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_present_to_writes_lines_in_order() {
        let data = json!([{"id": 2, "name": "Ervin"}, {"id": 1, "name": "Leanne"}]);
        let mut out = Vec::new();
        present_to(&data, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Data received:\nID: 2, Name: Ervin\nID: 1, Name: Leanne\n"
        );
    }

    #[test]
    fn test_present_to_stdout_does_not_panic() {
        present(&json!([{"id": 1, "name": "Leanne"}, null]));
        present(&Value::Null);
    }
}
