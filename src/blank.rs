//! Blank row detection and pruning.

use crate::cell::Row;

/// A row is blank when every cell's effective value trims to empty.
pub fn is_blank(row: &Row) -> bool {
    row.cells.iter().all(|c| c.effective_value().trim().is_empty())
}

/// Removes every blank row except the one at `except`, returning the removed
/// rows in their original order.
///
/// `except` keeps a freshly added blank row alive while it is being selected.
pub fn prune_except(rows: &mut Vec<Row>, except: Option<usize>) -> Vec<Row> {
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(rows.len());
    for (index, row) in rows.drain(..).enumerate() {
        if Some(index) != except && is_blank(&row) {
            removed.push(row);
        } else {
            kept.push(row);
        }
    }
    *rows = kept;
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell;
    use crate::column::{ColumnDescriptor, ColumnType};

    fn row(id: u64, cells: &[&str]) -> Row {
        Row::new(Some(id), cells.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_all_empty_is_blank() {
        assert!(is_blank(&row(0, &["", "  ", ""])));
    }

    #[test]
    fn test_one_value_is_not_blank() {
        assert!(!is_blank(&row(0, &["", "x", ""])));
    }

    fn activate_with(row: &mut Row, index: usize, value: &str) {
        let column = ColumnDescriptor {
            name: "c".into(),
            column_type: ColumnType::Text,
            editable: true,
            required: false,
            css_class: String::new(),
            placeholder: String::new(),
        };
        cell::activate(&mut row.cells[index], &column, row.row_id, "t");
        if let Some(c) = row.cells[index].control_mut() {
            c.set_value(value);
        }
    }

    #[test]
    fn test_control_value_wins_over_display() {
        let mut r = row(0, &["", ""]);
        activate_with(&mut r, 1, "Smith");
        assert!(!is_blank(&r));

        let mut r = row(1, &["stale", ""]);
        activate_with(&mut r, 0, "   ");
        assert!(is_blank(&r));
    }

    #[test]
    fn test_prune_keeps_exception() {
        let mut rows = vec![row(0, &[""]), row(1, &["a"]), row(2, &[""]), row(3, &[""])];
        let removed = prune_except(&mut rows, Some(2));
        let removed_ids: Vec<_> = removed.iter().map(|r| r.row_id).collect();
        assert_eq!(removed_ids, vec![Some(0), Some(3)]);
        let kept_ids: Vec<_> = rows.iter().map(|r| r.row_id).collect();
        assert_eq!(kept_ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_prune_without_exception() {
        let mut rows = vec![row(0, &[""]), row(1, &["a"])];
        assert_eq!(prune_except(&mut rows, None).len(), 1);
        assert_eq!(rows.len(), 1);
    }
}
