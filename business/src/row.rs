//! Opaque rows and dotted-path field access.

use serde_json::{Map, Value};

/// One record returned by the collection endpoint. The table never assumes a schema.
pub type Row = Map<String, Value>;

/// Outcome of resolving a dotted path against a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Present(&'a Value),
    Absent,
}

impl<'a> FieldValue<'a> {
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.as_value().and_then(Value::as_str)
    }

    /// Text shown in a cell and written to CSV.
    ///
    /// Strings are used verbatim, scalars use their JSON text and nested objects or arrays are
    /// shown as compact JSON.
    pub fn to_display(&self) -> String {
        match self {
            Self::Absent | Self::Present(Value::Null) => String::new(),
            Self::Present(Value::String(text)) => text.clone(),
            Self::Present(other) => other.to_string(),
        }
    }
}

/// Walks `path` (`"address.city"`) segment by segment.
///
/// Stops with [`FieldValue::Absent`] as soon as a segment is missing or the value being walked
/// is not an object.
pub fn resolve<'a>(row: &'a Row, path: &str) -> FieldValue<'a> {
    if path.is_empty() {
        return FieldValue::Absent;
    }

    let mut segments = path.split('.');
    let Some(mut current) = segments.next().and_then(|first| row.get(first)) else {
        return FieldValue::Absent;
    };

    for segment in segments {
        match current {
            Value::Object(map) => match map.get(segment) {
                Some(next) => current = next,
                None => return FieldValue::Absent,
            },
            _ => return FieldValue::Absent,
        }
    }

    FieldValue::Present(current)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn resolves_top_level_field() {
        let row = row(json!({"firstName": "Emily"}));
        assert_eq!(resolve(&row, "firstName").as_str(), Some("Emily"));
    }

    #[test]
    fn resolves_nested_field() {
        let row = row(json!({"address": {"city": "Phoenix"}}));
        assert_eq!(resolve(&row, "address.city").as_str(), Some("Phoenix"));
    }

    #[test]
    fn missing_nested_segment_is_absent() {
        let row = row(json!({"address": {"city": "X"}}));
        assert_eq!(resolve(&row, "address.state"), FieldValue::Absent);
    }

    #[test]
    fn walking_through_scalar_is_absent() {
        let row = row(json!({"age": 28}));
        assert_eq!(resolve(&row, "age.years"), FieldValue::Absent);
    }

    #[test]
    fn walking_through_null_is_absent() {
        let row = row(json!({"company": null}));
        assert_eq!(resolve(&row, "company.name"), FieldValue::Absent);
        assert_eq!(resolve(&row, "company").to_display(), "");
    }

    #[test]
    fn empty_path_is_absent() {
        let row = row(json!({"": 1}));
        assert_eq!(resolve(&row, ""), FieldValue::Absent);
    }

    #[test]
    fn display_coercion() {
        let row = row(json!({
            "name": "Ada",
            "age": 36,
            "ratio": 1.5,
            "active": true,
            "gone": null,
            "tags": ["a", "b"],
            "hair": {"color": "Brown"}
        }));

        assert_eq!(resolve(&row, "name").to_display(), "Ada");
        assert_eq!(resolve(&row, "age").to_display(), "36");
        assert_eq!(resolve(&row, "ratio").to_display(), "1.5");
        assert_eq!(resolve(&row, "active").to_display(), "true");
        assert_eq!(resolve(&row, "gone").to_display(), "");
        assert_eq!(resolve(&row, "missing").to_display(), "");
        assert_eq!(resolve(&row, "tags").to_display(), r#"["a","b"]"#);
        assert_eq!(resolve(&row, "hair").to_display(), r#"{"color":"Brown"}"#);
    }
}
