//! Form serialization of edited values.
//!
//! Every materialized control is a form field, visible or not, the same way
//! a host form submits hidden inputs. Field names follow
//! `"{tableName}[{rowId}].{columnName}"`, so a server can regroup values by
//! row and column.

use serde::{Deserialize, Serialize};

/// One submitted name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Submitted value.
    pub value: String,
}

impl FormField {
    /// Creates a field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Renders fields as a JSON object keyed by field name. Later duplicates win.
pub fn to_json(fields: &[FormField]) -> serde_json::Value {
    let map = fields
        .iter()
        .map(|f| (f.name.clone(), serde_json::Value::String(f.value.clone())))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json() {
        let fields = vec![
            FormField::new("players[0].first", "Ann"),
            FormField::new("players[0].last", "Lee"),
        ];
        let json = to_json(&fields);
        assert_eq!(json["players[0].first"], "Ann");
        assert_eq!(json["players[0].last"], "Lee");
    }

    #[test]
    fn test_field_serializes() {
        let s = serde_json::to_string(&FormField::new("t[1].a", "x")).unwrap();
        assert_eq!(s, r#"{"name":"t[1].a","value":"x"}"#);
    }
}
