//! Rendering for the grid.

use super::model::Model;
use crate::cell::CellState;
use lipgloss_extras::prelude::*;
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Styles used by [`Model::view`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header labels.
    pub header: Style,
    /// Display text of static cells.
    pub cell: Style,
    /// Display text of non-editable cells in the row in edit mode.
    pub edit_row: Style,
    /// Input controls without a matching class style.
    pub input: Style,
    /// Placeholder text in empty controls.
    pub placeholder: Style,
    /// Styles for controls by class name. The last class of a control that
    /// has an entry here wins over [`Styles::input`].
    pub class_styles: BTreeMap<String, Style>,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(true),
            cell: Style::new(),
            edit_row: Style::new().foreground(Color::from("212")),
            input: Style::new().underline(true),
            placeholder: Style::new().foreground(Color::from("240")),
            class_styles: BTreeMap::new(),
        }
    }
}

impl Styles {
    /// Adds a style for controls carrying `class`.
    pub fn with_class_style(mut self, class: impl Into<String>, style: Style) -> Self {
        self.class_styles.insert(class.into(), style);
        self
    }

    fn for_cell(&self, cell: &CellState) -> &Style {
        cell.control()
            .and_then(|c| {
                c.class_list()
                    .iter()
                    .rev()
                    .find_map(|class| self.class_styles.get(class))
            })
            .unwrap_or(&self.input)
    }
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi_escapes::strip_str(s).as_str())
}

fn pad(s: &str, width: usize) -> String {
    let w = visible_width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

impl Model {
    /// Plain-text width a cell needs: its shown text plus room for the cursor.
    fn cell_width(cell: &CellState) -> usize {
        match cell.control().filter(|c| c.visible()) {
            Some(input) => {
                let shown = if input.value().is_empty() {
                    input.placeholder()
                } else {
                    input.value()
                };
                UnicodeWidthStr::width(shown) + 1
            }
            None => UnicodeWidthStr::width(cell.display()),
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.columns.len())
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(Self::cell_width)
                    .chain(std::iter::once(
                        self.markup
                            .headers
                            .get(i)
                            .map_or(0, |h| UnicodeWidthStr::width(h.label.as_str())),
                    ))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_cell(&self, cell: &CellState, editing: bool) -> String {
        if let Some(input) = cell.control().filter(|c| c.visible()) {
            return input.render(self.styles.for_cell(cell), &self.styles.placeholder);
        }
        let style = if editing {
            &self.styles.edit_row
        } else {
            &self.styles.cell
        };
        style.clone().inline(true).render(cell.display())
    }

    /// Renders the header, a separator and every row. The row in edit mode
    /// is marked with `>`.
    pub fn view(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        output.push_str("  ");
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                output.push_str(" | ");
            }
            let label = self
                .markup
                .headers
                .get(i)
                .map_or("", |h| h.label.as_str());
            let label = self.styles.header.clone().inline(true).render(label);
            output.push_str(&pad(&label, *width));
        }
        output.push('\n');

        output.push_str("  ");
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                output.push_str("-+-");
            }
            output.push_str(&"-".repeat(*width));
        }
        output.push('\n');

        for row in &self.rows {
            output.push_str(if row.editing { "> " } else { "  " });
            for (i, (cell, width)) in row.cells.iter().zip(&widths).enumerate() {
                if i > 0 {
                    output.push_str(" | ");
                }
                output.push_str(&pad(&self.render_cell(cell, row.editing), *width));
            }
            output.push('\n');
        }

        output
    }
}
