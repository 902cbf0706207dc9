//! Key bindings for the grid.

use crate::key::{self, Binding};
use crossterm::event::{KeyCode, KeyModifiers};

/// Row-level key bindings. Keys not bound here go to the focused control.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Select the row above, keeping the focused column.
    pub row_up: Binding,
    /// Select the row below, keeping the focused column.
    pub row_down: Binding,
    /// Append a row (or reactivate the blank last row).
    pub add_row: Binding,
    /// Remove the row in edit mode.
    pub remove_row: Binding,
    /// Return the row in edit mode to static mode.
    pub leave_row: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            row_up: Binding::new(vec![KeyCode::Up]).with_help("↑", "previous row"),
            row_down: Binding::new(vec![KeyCode::Down]).with_help("↓", "next row"),
            add_row: Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)])
                .with_help("ctrl+n", "add row"),
            remove_row: Binding::new(vec![(KeyCode::Char('x'), KeyModifiers::CONTROL)])
                .with_help("ctrl+x", "remove row"),
            leave_row: Binding::new(vec![KeyCode::Esc]).with_help("esc", "done"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.row_up, &self.row_down, &self.add_row, &self.leave_row]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.row_up, &self.row_down, &self.leave_row],
            vec![&self.add_row, &self.remove_row],
        ]
    }
}
