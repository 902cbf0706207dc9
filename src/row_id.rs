//! Row identifier allocation.

use crate::cell::Row;

/// Returns one more than the largest identifier among `rows`, or `0` when no
/// row carries one.
///
/// The value is derived from the rows present right now rather than from a
/// counter, so removing rows can leave gaps but never yields a duplicate.
pub fn next_id(rows: &[Row]) -> u64 {
    rows.iter()
        .filter_map(|r| r.row_id)
        .max()
        .map_or(0, |max| max + 1)
}

/// Parses a raw identifier attribute. Anything but a non-negative integer is
/// treated as absent.
pub fn parse(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: Option<u64>) -> Row {
        Row::new(id, vec![String::new()])
    }

    #[test]
    fn test_empty_starts_at_zero() {
        assert_eq!(next_id(&[]), 0);
    }

    #[test]
    fn test_max_plus_one_after_removal() {
        let rows = vec![row(Some(0)), row(Some(2))];
        assert_eq!(next_id(&rows), 3);
    }

    #[test]
    fn test_rows_without_ids_are_skipped() {
        let rows = vec![row(None), row(Some(4)), row(None)];
        assert_eq!(next_id(&rows), 5);
        assert_eq!(next_id(&[row(None)]), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse(Some("7")), Some(7));
        assert_eq!(parse(Some(" 12 ")), Some(12));
        assert_eq!(parse(Some("-1")), None);
        assert_eq!(parse(Some("abc")), None);
        assert_eq!(parse(None), None);
    }
}
