//! Column descriptors and the registry that builds them from header cells.

use crate::markup::HeaderCell;
use crate::metadata::MetadataProvider;
use crate::options::{ColumnDefaults, ColumnOverrides};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of value a column holds.
///
/// Serialized as a lower-case string; unknown names round-trip through
/// [`ColumnType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// Free text.
    #[default]
    Text,
    /// Whole numbers.
    Integer,
    /// Currency amounts.
    Money,
    /// Floating point numbers.
    Double,
    /// Any other declared type.
    Other(String),
}

impl From<String> for ColumnType {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => ColumnType::Text,
            "integer" => ColumnType::Integer,
            "money" => ColumnType::Money,
            "double" => ColumnType::Double,
            _ => ColumnType::Other(s),
        }
    }
}

impl From<ColumnType> for String {
    fn from(t: ColumnType) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Text => f.write_str("text"),
            ColumnType::Integer => f.write_str("integer"),
            ColumnType::Money => f.write_str("money"),
            ColumnType::Double => f.write_str("double"),
            ColumnType::Other(s) => f.write_str(s),
        }
    }
}

/// The resolved configuration of one column. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Field name used in generated form names.
    pub name: String,
    /// Kind of value the column holds.
    pub column_type: ColumnType,
    /// Whether cells get an input control in edit mode.
    pub editable: bool,
    /// Whether an edited value must be non-blank.
    pub required: bool,
    /// Space-separated class names for the input control.
    pub css_class: String,
    /// Placeholder for the input control.
    pub placeholder: String,
}

impl ColumnDescriptor {
    fn resolve(settings: ColumnDefaults, header: &HeaderCell) -> Self {
        let name = if settings.name.is_empty() {
            header.label.trim().to_string()
        } else {
            settings.name
        };
        Self {
            name,
            column_type: settings.column_type,
            editable: settings.editable,
            required: settings.required,
            css_class: settings.css_class,
            placeholder: settings.placeholder,
        }
    }
}

/// Builds one descriptor per header, in header order.
///
/// Each header's settings are `defaults` overlaid with the provider's
/// override for that header when a provider is attached and has one, else
/// with the positional entry of `overrides`. An empty resulting name takes
/// the header label.
pub fn build(
    headers: &[HeaderCell],
    defaults: &ColumnDefaults,
    overrides: &[ColumnOverrides],
    provider: Option<&dyn MetadataProvider>,
) -> Vec<ColumnDescriptor> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let settings = provider
                .and_then(|p| p.column_overrides(header))
                .or_else(|| overrides.get(index).cloned())
                .map(|o| o.apply(defaults))
                .unwrap_or_else(|| defaults.clone());
            ColumnDescriptor::resolve(settings, header)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AttributeMetadata, DEFAULT_METADATA_ATTR};

    #[test]
    fn test_names_default_to_labels() {
        let headers = vec![HeaderCell::new(" First "), HeaderCell::new("Last")];
        let cols = build(&headers, &ColumnDefaults::default(), &[], None);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].name, "First");
        assert_eq!(cols[1].name, "Last");
        assert!(cols.iter().all(|c| c.editable && c.column_type == ColumnType::Text));
    }

    #[test]
    fn test_positional_overrides() {
        let headers = vec![HeaderCell::new("Id"), HeaderCell::new("Name")];
        let overrides = vec![ColumnOverrides::new().editable(false).column_type(ColumnType::Integer)];
        let cols = build(&headers, &ColumnDefaults::default(), &overrides, None);
        assert!(!cols[0].editable);
        assert_eq!(cols[0].column_type, ColumnType::Integer);
        assert!(cols[1].editable);
    }

    #[test]
    fn test_provider_takes_precedence_and_falls_back() {
        let headers = vec![
            HeaderCell::new("Last Name")
                .with_attribute(DEFAULT_METADATA_ATTR, r#"{"name":"lastName"}"#),
            HeaderCell::new("Age"),
        ];
        let overrides = vec![
            ColumnOverrides::new().name("ignored"),
            ColumnOverrides::new().column_type(ColumnType::Integer),
        ];
        let provider = AttributeMetadata::new();
        let cols = build(
            &headers,
            &ColumnDefaults::default(),
            &overrides,
            Some(&provider),
        );
        assert_eq!(cols[0].name, "lastName");
        assert_eq!(cols[1].name, "Age");
        assert_eq!(cols[1].column_type, ColumnType::Integer);
    }

    #[test]
    fn test_column_type_strings() {
        assert_eq!(ColumnType::from("Money".to_string()), ColumnType::Money);
        assert_eq!(
            ColumnType::from("date".to_string()),
            ColumnType::Other("date".into())
        );
        assert_eq!(String::from(ColumnType::Double), "double");
    }
}
