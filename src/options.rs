//! Grid configuration.
//!
//! [`Options`] mirrors the option object a host hands to the grid. Keys are
//! camelCase on the wire so an existing configuration document loads
//! unchanged:
//!
//! ```rust
//! use bubbletea_writetable::options::Options;
//!
//! let opts = Options::from_json(r#"{
//!     "tableName": "players",
//!     "autoAddRow": false,
//!     "columnDefaults": { "cssClass": "cell-input" }
//! }"#).unwrap();
//!
//! assert_eq!(opts.table_name, "players");
//! assert!(opts.enable_add_row);
//! assert!(!opts.auto_add_row);
//! assert_eq!(opts.column_defaults.css_class, "cell-input");
//! ```
//!
//! Anything missing takes its default. Per-column settings come either from a
//! [`MetadataProvider`](crate::metadata::MetadataProvider) or from the
//! positional [`Options::columns`] list.

use crate::column::ColumnType;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default table name used in generated field names.
pub const DEFAULT_TABLE_NAME: &str = "writeable-data";

/// Default marker class for the row in edit mode.
pub const DEFAULT_EDIT_MODE_CLASS: &str = "writeable-editmode";

/// Settings every column starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnDefaults {
    /// Column name; empty means "use the header label".
    pub name: String,
    /// Kind of value the column holds.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether cells in the column get an input control.
    pub editable: bool,
    /// Whether a value is required. Only meaningful for editable columns.
    pub required: bool,
    /// Space-separated class names applied to the input control.
    pub css_class: String,
    /// Placeholder shown in an empty input control.
    pub placeholder: String,
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self {
            name: String::new(),
            column_type: ColumnType::Text,
            editable: true,
            required: false,
            css_class: String::new(),
            placeholder: String::new(),
        }
    }
}

/// Partial column settings layered over [`ColumnDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnOverrides {
    /// Column name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Column type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    /// Editability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    /// Required flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Input class list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    /// Input placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ColumnOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the column name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Overrides the column type.
    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    /// Overrides editability.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    /// Overrides the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Overrides the input class list.
    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Overrides the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Returns `defaults` with every set field of `self` applied on top.
    pub fn apply(&self, defaults: &ColumnDefaults) -> ColumnDefaults {
        ColumnDefaults {
            name: self.name.clone().unwrap_or_else(|| defaults.name.clone()),
            column_type: self
                .column_type
                .clone()
                .unwrap_or_else(|| defaults.column_type.clone()),
            editable: self.editable.unwrap_or(defaults.editable),
            required: self.required.unwrap_or(defaults.required),
            css_class: self
                .css_class
                .clone()
                .unwrap_or_else(|| defaults.css_class.clone()),
            placeholder: self
                .placeholder
                .clone()
                .unwrap_or_else(|| defaults.placeholder.clone()),
        }
    }
}

/// The grid's options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Collection name used as the prefix of every generated field name.
    pub table_name: String,
    /// Reserved. Accepted and stored, but has no effect on editing.
    pub single_cell_edit_mode: bool,
    /// Whether rows may be appended.
    pub enable_add_row: bool,
    /// Whether a blank editable row is appended when the grid is created.
    pub auto_add_row: bool,
    /// Marker class for the row currently in edit mode.
    pub edit_mode_class: String,
    /// Settings every column starts from.
    pub column_defaults: ColumnDefaults,
    /// Positional per-column overrides, used when no metadata provider
    /// supplies settings for a header.
    pub columns: Vec<ColumnOverrides>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            single_cell_edit_mode: false,
            enable_add_row: true,
            auto_add_row: true,
            edit_mode_class: DEFAULT_EDIT_MODE_CLASS.to_string(),
            column_defaults: ColumnDefaults::default(),
            columns: Vec::new(),
        }
    }
}

impl Options {
    /// Creates options with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses options from a TOML document.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the table name.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    /// Enables or disables row addition.
    pub fn with_enable_add_row(mut self, enabled: bool) -> Self {
        self.enable_add_row = enabled;
        self
    }

    /// Enables or disables the blank row appended on creation.
    pub fn with_auto_add_row(mut self, enabled: bool) -> Self {
        self.auto_add_row = enabled;
        self
    }

    /// Sets the edit-mode marker class.
    pub fn with_edit_mode_class(mut self, class: impl Into<String>) -> Self {
        self.edit_mode_class = class.into();
        self
    }

    /// Sets the column defaults.
    pub fn with_column_defaults(mut self, defaults: ColumnDefaults) -> Self {
        self.column_defaults = defaults;
        self
    }

    /// Sets the positional column overrides.
    pub fn with_columns(mut self, columns: Vec<ColumnOverrides>) -> Self {
        self.columns = columns;
        self
    }

    /// Merges a patch over these options. Column defaults merge field by
    /// field; a patch `columns` list replaces the whole list.
    pub fn merge(&mut self, patch: OptionsPatch) {
        if let Some(v) = patch.table_name {
            self.table_name = v;
        }
        if let Some(v) = patch.single_cell_edit_mode {
            self.single_cell_edit_mode = v;
        }
        if let Some(v) = patch.enable_add_row {
            self.enable_add_row = v;
        }
        if let Some(v) = patch.auto_add_row {
            self.auto_add_row = v;
        }
        if let Some(v) = patch.edit_mode_class {
            self.edit_mode_class = v;
        }
        if let Some(v) = patch.column_defaults {
            self.column_defaults = v.apply(&self.column_defaults);
        }
        if let Some(v) = patch.columns {
            self.columns = v;
        }
    }
}

/// Partial options, as supplied by element metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionsPatch {
    /// See [`Options::table_name`].
    pub table_name: Option<String>,
    /// See [`Options::single_cell_edit_mode`].
    pub single_cell_edit_mode: Option<bool>,
    /// See [`Options::enable_add_row`].
    pub enable_add_row: Option<bool>,
    /// See [`Options::auto_add_row`].
    pub auto_add_row: Option<bool>,
    /// See [`Options::edit_mode_class`].
    pub edit_mode_class: Option<String>,
    /// Merged field by field over [`Options::column_defaults`].
    pub column_defaults: Option<ColumnOverrides>,
    /// Replaces [`Options::columns`].
    pub columns: Option<Vec<ColumnOverrides>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.table_name, "writeable-data");
        assert!(!opts.single_cell_edit_mode);
        assert!(opts.enable_add_row);
        assert!(opts.auto_add_row);
        assert_eq!(opts.edit_mode_class, "writeable-editmode");
        assert_eq!(opts.column_defaults.column_type, ColumnType::Text);
        assert!(opts.column_defaults.editable);
        assert!(!opts.column_defaults.required);
    }

    #[test]
    fn test_from_json_camel_case() {
        let opts = Options::from_json(
            r#"{"tableName":"players","enableAddRow":false,
                "columns":[{"name":"first","type":"integer","editable":false}]}"#,
        )
        .unwrap();
        assert_eq!(opts.table_name, "players");
        assert!(!opts.enable_add_row);
        assert_eq!(opts.columns.len(), 1);
        assert_eq!(opts.columns[0].column_type, Some(ColumnType::Integer));
        assert_eq!(opts.columns[0].editable, Some(false));
    }

    #[test]
    fn test_from_toml() {
        let opts = Options::from_toml(
            "tableName = \"roster\"\n\n[columnDefaults]\nplaceholder = \"...\"\ntype = \"money\"\n",
        )
        .unwrap();
        assert_eq!(opts.table_name, "roster");
        assert_eq!(opts.column_defaults.placeholder, "...");
        assert_eq!(opts.column_defaults.column_type, ColumnType::Money);
        assert!(opts.column_defaults.editable);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Options::from_json("{ tableName: ").unwrap_err();
        assert!(err.to_string().starts_with("JSON options error"));
    }

    #[test]
    fn test_merge_is_deep_for_column_defaults() {
        let mut opts = Options::default().with_column_defaults(ColumnDefaults {
            css_class: "wide".into(),
            ..ColumnDefaults::default()
        });
        opts.merge(OptionsPatch {
            auto_add_row: Some(false),
            column_defaults: Some(ColumnOverrides::new().placeholder("type here")),
            ..OptionsPatch::default()
        });
        assert!(!opts.auto_add_row);
        assert_eq!(opts.column_defaults.css_class, "wide");
        assert_eq!(opts.column_defaults.placeholder, "type here");
    }

    #[test]
    fn test_overrides_apply() {
        let merged = ColumnOverrides::new()
            .name("lastName")
            .required(true)
            .apply(&ColumnDefaults::default());
        assert_eq!(merged.name, "lastName");
        assert!(merged.required);
        assert!(merged.editable);
    }
}
