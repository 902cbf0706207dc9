//! Optional declarative configuration read from element attributes.
//!
//! A grid works without any metadata provider: options and positional column
//! overrides then come from [`Options`](crate::options::Options) alone. When a
//! provider is attached, the grid asks it for a table-level options patch and
//! for per-header column overrides, and falls back to the plain options for
//! anything it does not supply.

use crate::markup::{HeaderCell, TableMarkup};
use crate::options::{ColumnOverrides, OptionsPatch};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Attribute [`AttributeMetadata`] reads by default.
pub const DEFAULT_METADATA_ATTR: &str = "data-writetable";

/// Supplies per-element configuration.
pub trait MetadataProvider: Send {
    /// Options declared on the table element.
    fn table_options(&self, table: &TableMarkup) -> Option<OptionsPatch>;

    /// Column settings declared on a header cell.
    fn column_overrides(&self, header: &HeaderCell) -> Option<ColumnOverrides>;
}

/// Reads a JSON object from a single element attribute.
///
/// ```rust
/// use bubbletea_writetable::markup::HeaderCell;
/// use bubbletea_writetable::metadata::{AttributeMetadata, MetadataProvider};
///
/// let header = HeaderCell::new("Last Name")
///     .with_attribute("data-writetable", r#"{"name":"lastName","required":true}"#);
/// let overrides = AttributeMetadata::new().column_overrides(&header).unwrap();
/// assert_eq!(overrides.name.as_deref(), Some("lastName"));
/// assert_eq!(overrides.required, Some(true));
/// ```
///
/// A malformed attribute is logged and treated as absent.
#[derive(Debug, Clone)]
pub struct AttributeMetadata {
    attribute: String,
}

impl Default for AttributeMetadata {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_METADATA_ATTR.to_string(),
        }
    }
}

impl AttributeMetadata {
    /// Creates a provider reading [`DEFAULT_METADATA_ATTR`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider reading the named attribute.
    pub fn with_attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// Returns the attribute this provider reads.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    fn read<T: DeserializeOwned>(&self, attributes: &BTreeMap<String, String>) -> Option<T> {
        let raw = attributes.get(&self.attribute)?;
        match serde_json::from_str(raw) {
            Ok(v) => Some(v),
            Err(error) => {
                tracing::warn!(attribute = %self.attribute, %error, "ignoring malformed metadata");
                None
            }
        }
    }
}

impl MetadataProvider for AttributeMetadata {
    fn table_options(&self, table: &TableMarkup) -> Option<OptionsPatch> {
        self.read(&table.attributes)
    }

    fn column_overrides(&self, header: &HeaderCell) -> Option<ColumnOverrides> {
        self.read(&header.attributes)
    }
}
