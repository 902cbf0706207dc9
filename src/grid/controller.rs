//! Row edit-state transitions.
//!
//! At most one row is in edit mode. Every transition runs to completion
//! before returning, which is all it takes to keep that true: the previous
//! editing row is always returned to static mode before a new one is promoted.

use super::model::Model;
use crate::blank;
use crate::cell::{self, Row};
use crate::events::{Event, Flow};
use crate::row_id;
use crate::Component;

impl Model {
    /// Selects the row at `index`: prunes every other blank row, puts the
    /// row in edit mode, focuses its first editable control unless
    /// `yield_focus`, then emits `rowSelected`.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn select_row(&mut self, index: usize, yield_focus: bool) -> bool {
        self.select(index, None, yield_focus)
    }

    /// A click on cell `(index, column)`: like [`select_row`](Model::select_row),
    /// but focus goes to the clicked cell when its column is editable.
    pub fn click(&mut self, index: usize, column: usize) -> bool {
        self.select(index, Some(column), false)
    }

    pub(super) fn select(&mut self, index: usize, column: Option<usize>, yield_focus: bool) -> bool {
        if index >= self.rows.len() {
            return false;
        }

        let blank_before = self.rows[..index]
            .iter()
            .filter(|r| blank::is_blank(r))
            .count();
        let pruned = blank::prune_except(&mut self.rows, Some(index));
        let index = index - blank_before;
        if !pruned.is_empty() {
            tracing::debug!(count = pruned.len(), "pruned blank rows");
            if self.editing_row().is_none() {
                self.focused_col = None;
            }
        }

        self.make_row_editable(index);
        if !yield_focus {
            self.focus_cell(index, column, true);
        }

        tracing::debug!(index, row_id = ?self.rows[index].row_id, "row selected");
        self.events.emit(&Event::RowSelected(&self.rows[index]));
        true
    }

    /// Appends a blank row in edit mode and emits `rowAdded`, returning its id.
    ///
    /// Appending is allowed when `enableAddRow` is set and the last row is
    /// not blank. Otherwise nothing is appended: the last row, if any, is
    /// put in edit mode instead and `None` is returned. Focus moves to the
    /// first editable cell unless `yield_focus`.
    pub fn add_row(&mut self, yield_focus: bool) -> Option<u64> {
        if !self.allow_new_row() {
            if let Some(last) = self.rows.len().checked_sub(1) {
                tracing::debug!(index = last, "add row blocked, reactivating last row");
                self.make_row_editable(last);
                if !yield_focus {
                    self.focus_cell(last, None, true);
                }
            }
            return None;
        }

        let id = row_id::next_id(&self.rows);
        self.rows.push(Row::empty(id, self.columns.len()));
        let index = self.rows.len() - 1;

        self.make_row_editable(index);
        if !yield_focus {
            self.focus_cell(index, None, false);
        }

        tracing::debug!(index, row_id = id, "row added");
        self.events.emit(&Event::RowAdded(&self.rows[index]));
        Some(id)
    }

    /// Removes the row at `index` unless a `rowRemoved` subscriber vetoes it.
    ///
    /// Subscribers run first and see the row as it is. Returns whether the
    /// row was removed; an out-of-range index removes nothing and emits
    /// nothing.
    pub fn remove_row(&mut self, index: usize) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        if self.events.emit(&Event::RowRemoved(row)) == Flow::Stop {
            tracing::debug!(index, "row removal vetoed");
            return false;
        }

        let removed = self.rows.remove(index);
        if removed.editing {
            self.focused_col = None;
        }
        tracing::debug!(index, row_id = ?removed.row_id, "row removed");
        true
    }

    /// Returns the row in edit mode, if any, to static mode.
    pub fn leave_row(&mut self) {
        if let Some(index) = self.editing_row() {
            self.make_row_static(index);
        }
    }

    fn allow_new_row(&self) -> bool {
        if !self.options.enable_add_row {
            return false;
        }
        self.rows.last().map_or(true, |last| !blank::is_blank(last))
    }

    /// Puts a row in edit mode. A row already in edit mode is left alone.
    fn make_row_editable(&mut self, index: usize) {
        if self.rows[index].editing {
            return;
        }
        if let Some(previous) = self.editing_row() {
            self.make_row_static(previous);
        }

        let row = &mut self.rows[index];
        row.editing = true;
        for (col, cell) in self.columns.iter().zip(row.cells.iter_mut()) {
            if col.editable {
                cell::activate(cell, col, row.row_id, &self.options.table_name);
            }
        }
    }

    fn make_row_static(&mut self, index: usize) {
        let row = &mut self.rows[index];
        row.editing = false;
        for cell in row.cells.iter_mut() {
            cell::deactivate(cell);
        }
        self.focused_col = None;
    }

    /// Focuses a control in the editing row at `index`: the requested column
    /// when it is editable, else the first editable one.
    fn focus_cell(&mut self, index: usize, column: Option<usize>, select: bool) {
        let target = column
            .filter(|&c| self.columns.get(c).is_some_and(|d| d.editable))
            .or_else(|| self.columns.iter().position(|d| d.editable));
        let Some(target) = target else {
            return;
        };

        let row = &mut self.rows[index];
        if let Some(previous) = self.focused_col.filter(|&c| c != target) {
            if let Some(input) = row.cells[previous].control_mut() {
                input.blur();
            }
        }
        if let Some(input) = row.cells[target].control_mut() {
            input.focus();
            if select {
                input.select_all();
            }
            self.focused_col = Some(target);
        }
    }
}
