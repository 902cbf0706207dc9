//! Text sanitization for single-line cell input.
//!
//! Pasted text can carry line breaks, tabs and terminal control sequences.
//! A [`Sanitizer`] drops control characters and replaces line breaks and tabs
//! with spaces so the result fits in a one-line input.
//!
//! ```rust
//! use bubbletea_writetable::runeutil::Sanitizer;
//!
//! let s = Sanitizer::default();
//! assert_eq!(s.sanitize_str("Smith\r\nJones\tJr\x07"), "Smith Jones Jr");
//! ```

/// Removes control characters and replaces each line break (`\n`, `\r` or
/// `\r\n`) and tab with a single space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sanitizer;

impl Sanitizer {
    /// Sanitizes a string.
    pub fn sanitize_str(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push(' ');
                }
                '\n' | '\t' => out.push(' '),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}
