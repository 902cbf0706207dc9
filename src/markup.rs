//! The table structure a grid is attached to.
//!
//! A host describes its table as a header section (column labels, in order)
//! and a body section (optionally pre-populated rows). Elements carry string
//! attributes; body rows keep their identifier under [`ROW_ID_ATTR`], and a
//! [`MetadataProvider`](crate::metadata::MetadataProvider) may read
//! configuration from any of them.

use std::collections::BTreeMap;

/// Attribute holding a body row's identifier.
pub const ROW_ID_ATTR: &str = "rowId";

/// A header cell: one column's label and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCell {
    /// Label text shown in the header.
    pub label: String,
    /// Element attributes.
    pub attributes: BTreeMap<String, String>,
}

impl HeaderCell {
    /// Creates a header cell with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// A pre-populated body row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyRow {
    /// Cell texts, in column order.
    pub cells: Vec<String>,
    /// Element attributes.
    pub attributes: BTreeMap<String, String>,
}

impl BodyRow {
    /// Creates a body row without an identifier.
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the row identifier attribute.
    pub fn with_row_id(self, id: u64) -> Self {
        self.with_attribute(ROW_ID_ATTR, id.to_string())
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns the raw identifier attribute, if any.
    pub fn raw_row_id(&self) -> Option<&str> {
        self.attributes.get(ROW_ID_ATTR).map(String::as_str)
    }
}

/// A whole table: element attributes, header cells and body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMarkup {
    /// Attributes of the table element itself.
    pub attributes: BTreeMap<String, String>,
    /// Header cells, in column order.
    pub headers: Vec<HeaderCell>,
    /// Body rows, in display order.
    pub body: Vec<BodyRow>,
}

impl TableMarkup {
    /// Creates a table from header labels with an empty body.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            attributes: BTreeMap::new(),
            headers: labels.into_iter().map(HeaderCell::new).collect(),
            body: Vec::new(),
        }
    }

    /// Creates a table from prepared header cells.
    pub fn from_headers(headers: Vec<HeaderCell>) -> Self {
        Self {
            attributes: BTreeMap::new(),
            headers,
            body: Vec::new(),
        }
    }

    /// Appends a body row.
    pub fn with_row(mut self, row: BodyRow) -> Self {
        self.body.push(row);
        self
    }

    /// Adds an attribute to the table element.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}
