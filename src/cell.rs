//! Rows, cells and the cell editor.
//!
//! A cell starts as display text only. The first time its row enters edit
//! mode for an editable column, [`activate`] materializes an input control
//! next to the display text. From then on both coexist and only their
//! visibility toggles: [`activate`] shows the control, [`deactivate`] flushes
//! the control's value back into the display text and shows that instead.

use crate::column::ColumnDescriptor;
use crate::control;
use crate::Component;

/// One cell of a row.
#[derive(Debug, Clone)]
pub struct CellState {
    display: String,
    display_visible: bool,
    control: Option<control::Model>,
}

impl CellState {
    /// Creates a display-only cell.
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            display_visible: true,
            control: None,
        }
    }

    /// The display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Reports whether the display text is shown.
    pub fn display_visible(&self) -> bool {
        self.display_visible
    }

    /// Reports whether an input control has been materialized.
    pub fn input_created(&self) -> bool {
        self.control.is_some()
    }

    /// The input control, once materialized.
    pub fn control(&self) -> Option<&control::Model> {
        self.control.as_ref()
    }

    /// Mutable access to the input control, once materialized.
    pub fn control_mut(&mut self) -> Option<&mut control::Model> {
        self.control.as_mut()
    }

    /// The control's current value when one exists, else the display text.
    pub fn effective_value(&self) -> &str {
        match &self.control {
            Some(c) => c.value(),
            None => &self.display,
        }
    }
}

/// A grid row.
#[derive(Debug, Clone)]
pub struct Row {
    /// Identifier used in field names. `None` for pre-existing rows whose
    /// identifier attribute was missing or malformed.
    pub row_id: Option<u64>,
    /// Cells, one per column.
    pub cells: Vec<CellState>,
    /// Whether the row is in edit mode.
    pub editing: bool,
}

impl Row {
    /// Creates a static row from display texts.
    pub fn new(row_id: Option<u64>, cells: Vec<String>) -> Self {
        Self {
            row_id,
            cells: cells.into_iter().map(CellState::new).collect(),
            editing: false,
        }
    }

    /// Creates a static row of `columns` empty cells.
    pub fn empty(row_id: u64, columns: usize) -> Self {
        Self::new(Some(row_id), vec![String::new(); columns])
    }

    /// Effective values of every cell, in column order.
    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(CellState::effective_value).collect()
    }
}

/// Builds the form field name `"{table_name}[{row_id}].{column_name}"`.
///
/// ```rust
/// use bubbletea_writetable::cell::field_name;
///
/// assert_eq!(field_name("players", Some(2), "lastName"), "players[2].lastName");
/// assert_eq!(field_name("players", None, "lastName"), "players[].lastName");
/// ```
pub fn field_name(table_name: &str, row_id: Option<u64>, column_name: &str) -> String {
    match row_id {
        Some(id) => format!("{table_name}[{id}].{column_name}"),
        None => format!("{table_name}[].{column_name}"),
    }
}

/// Puts a cell into edit mode, materializing its control on first use.
///
/// A new control starts from the trimmed display text. An existing one is
/// synced from the display text as it is, so surrounding whitespace the user
/// typed survives a round trip.
pub fn activate(
    cell: &mut CellState,
    column: &ColumnDescriptor,
    row_id: Option<u64>,
    table_name: &str,
) {
    let value = match cell.control {
        None => cell.display.trim(),
        Some(_) => cell.display.as_str(),
    }
    .to_string();
    let input = cell.control.get_or_insert_with(|| {
        let name = field_name(table_name, row_id, &column.name);
        tracing::trace!(field = %name, "materializing cell control");
        let mut input = control::Model::new(name);
        if !column.css_class.is_empty() {
            input = input.with_class_list(&column.css_class);
        }
        if !column.placeholder.is_empty() {
            input = input.with_placeholder(column.placeholder.clone());
        }
        input
    });
    input.set_value(&value);
    input.show();
    cell.display_visible = false;
}

/// Returns a cell to static mode, writing the control's value into the
/// display text. Cells without a control are left as they are.
pub fn deactivate(cell: &mut CellState) {
    if let Some(input) = cell.control.as_mut() {
        cell.display = input.value().to_string();
        input.blur();
        input.hide();
        cell.display_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;

    fn column(name: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.into(),
            column_type: ColumnType::Text,
            editable: true,
            required: false,
            css_class: "wide".into(),
            placeholder: "Last name".into(),
        }
    }

    #[test]
    fn test_first_activation_materializes_control() {
        let mut cell = CellState::new("  Smith ");
        assert!(!cell.input_created());
        activate(&mut cell, &column("lastName"), Some(2), "players");

        let input = cell.control().unwrap();
        assert_eq!(input.id(), "players[2].lastName");
        assert_eq!(input.name(), "players[2].lastName");
        assert_eq!(input.value(), "Smith");
        assert_eq!(input.placeholder(), "Last name");
        assert!(input.has_class("wide"));
        assert!(input.visible());
        assert!(!cell.display_visible());
    }

    #[test]
    fn test_empty_class_and_placeholder_not_applied() {
        let mut col = column("a");
        col.css_class.clear();
        col.placeholder.clear();
        let mut cell = CellState::new("");
        activate(&mut cell, &col, Some(0), "t");
        assert!(cell.control().unwrap().class_list().is_empty());
        assert_eq!(cell.control().unwrap().placeholder(), "");
    }

    #[test]
    fn test_round_trip_through_deactivate() {
        let mut cell = CellState::new("");
        activate(&mut cell, &column("lastName"), Some(0), "players");
        cell.control_mut().unwrap().set_value("Smith");

        deactivate(&mut cell);
        assert_eq!(cell.display(), "Smith");
        assert!(cell.display_visible());
        assert!(!cell.control().unwrap().visible());

        activate(&mut cell, &column("lastName"), Some(0), "players");
        assert_eq!(cell.control().unwrap().value(), "Smith");
        assert!(cell.control().unwrap().visible());
    }

    #[test]
    fn test_reactivation_keeps_original_name() {
        let mut cell = CellState::new("x");
        activate(&mut cell, &column("a"), Some(1), "t");
        deactivate(&mut cell);
        activate(&mut cell, &column("a"), Some(9), "other");
        assert_eq!(cell.control().unwrap().name(), "t[1].a");
    }

    #[test]
    fn test_deactivate_without_control_is_noop() {
        let mut cell = CellState::new("keep");
        deactivate(&mut cell);
        assert_eq!(cell.display(), "keep");
        assert!(!cell.input_created());
    }

    #[test]
    fn test_effective_value_prefers_control() {
        let mut cell = CellState::new("old");
        assert_eq!(cell.effective_value(), "old");
        activate(&mut cell, &column("a"), Some(0), "t");
        cell.control_mut().unwrap().set_value("");
        assert_eq!(cell.effective_value(), "");
    }
}
