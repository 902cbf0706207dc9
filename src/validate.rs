//! Value checks derived from a column's type and required flag.
//!
//! Checking is a query: the grid never blocks a transition or shows a message
//! because of an invalid value. Hosts call
//! [`Model::invalid_fields`](crate::grid::Model::invalid_fields) before
//! submitting if they care.

use crate::column::{ColumnDescriptor, ColumnType};
use std::fmt;

/// Why a value failed its column's checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required column is blank.
    Required,
    /// The value does not parse as the column's type.
    Type(ColumnType),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => f.write_str("a value is required"),
            ValidationError::Type(t) => write!(f, "not a valid {t} value"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks `value` against `column`. Blank optional values always pass.
pub fn check(column: &ColumnDescriptor, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return if column.required {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    let ok = match &column.column_type {
        ColumnType::Integer => is_integer(value),
        ColumnType::Double => value.parse::<f64>().map_or(false, f64::is_finite),
        ColumnType::Money => is_money(value),
        ColumnType::Text | ColumnType::Other(_) => true,
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::Type(column.column_type.clone()))
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_money(s: &str) -> bool {
    let s = s.strip_prefix('$').unwrap_or(s);
    let (whole, cents) = match s.split_once('.') {
        Some((w, c)) => (w, Some(c)),
        None => (s, None),
    };
    let cents_ok = cents.map_or(true, |c| {
        (1..=2).contains(&c.len()) && c.bytes().all(|b| b.is_ascii_digit())
    });
    cents_ok && is_grouped_digits(whole)
}

/// Digits, either plain or split by commas into a leading group of one to
/// three digits followed by groups of exactly three.
fn is_grouped_digits(s: &str) -> bool {
    let all_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());
    let mut groups = s.split(',');
    let first = groups.next().unwrap_or("");
    if !s.contains(',') {
        return !first.is_empty() && all_digits(first);
    }
    (1..=3).contains(&first.len())
        && all_digits(first)
        && groups.all(|g| g.len() == 3 && all_digits(g))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(column_type: ColumnType, required: bool) -> ColumnDescriptor {
        ColumnDescriptor {
            name: "c".into(),
            column_type,
            editable: true,
            required,
            css_class: String::new(),
            placeholder: String::new(),
        }
    }

    #[test]
    fn test_required() {
        assert_eq!(
            check(&col(ColumnType::Text, true), "  "),
            Err(ValidationError::Required)
        );
        assert!(check(&col(ColumnType::Text, false), "").is_ok());
        assert!(check(&col(ColumnType::Integer, false), "").is_ok());
    }

    #[test]
    fn test_integer() {
        let c = col(ColumnType::Integer, false);
        assert!(check(&c, "42").is_ok());
        assert!(check(&c, "-7").is_ok());
        assert!(check(&c, "4.2").is_err());
        assert!(check(&c, "-").is_err());
    }

    #[test]
    fn test_double() {
        let c = col(ColumnType::Double, false);
        assert!(check(&c, "3.25").is_ok());
        assert!(check(&c, "1e3").is_ok());
        assert!(check(&c, "abc").is_err());
        assert!(check(&c, "inf").is_err());
    }

    #[test]
    fn test_money() {
        let c = col(ColumnType::Money, false);
        assert!(check(&c, "$1,250.50").is_ok());
        assert!(check(&c, "12").is_ok());
        assert!(check(&c, "12.5").is_ok());
        assert!(check(&c, "12.505").is_err());
        assert!(check(&c, "$").is_err());
        assert!(check(&c, "1,000,000").is_ok());
    }

    #[test]
    fn test_money_rejects_malformed_separators_and_signs() {
        let c = col(ColumnType::Money, false);
        for bad in ["1,,2", ",5", "1,23", "1234,567", "12,", "-5", "$-5", "1.", ".50"] {
            assert_eq!(
                check(&c, bad),
                Err(ValidationError::Type(ColumnType::Money)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_other_types_accept_anything() {
        assert!(check(&col(ColumnType::Other("date".into()), false), "soon").is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::Type(ColumnType::Money).to_string(),
            "not a valid money value"
        );
    }
}
