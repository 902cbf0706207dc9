//! Single-line input control backing an editable cell.
//!
//! A control is created the first time its cell enters edit mode and then
//! lives as long as the row. It carries the generated field name (used as both
//! its id and its submission name), the class list and placeholder from its
//! column, a visibility flag toggled by the cell editor, and the usual
//! editing state: value, grapheme cursor and an all-text selection.
//!
//! ```rust
//! use bubbletea_writetable::control::Model;
//! use bubbletea_writetable::Component;
//!
//! let mut input = Model::new("players[0].lastName").with_placeholder("Last name");
//! input.set_value("Smith");
//! input.focus();
//! input.select_all();
//! assert!(input.selection_active());
//! assert_eq!(input.name(), "players[0].lastName");
//! ```

use crate::key::{self, Binding};
use crate::runeutil::Sanitizer;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Clipboard contents delivered by [`paste`].
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure delivered by [`paste`].
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Key bindings understood by a focused control.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor one grapheme right.
    pub character_forward: Binding,
    /// Move the cursor one grapheme left.
    pub character_backward: Binding,
    /// Delete the grapheme before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the grapheme under the cursor.
    pub delete_character_forward: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Delete everything after the cursor.
    pub delete_after_cursor: Binding,
    /// Move to the start of the value.
    pub line_start: Binding,
    /// Move to the end of the value.
    pub line_end: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::new(vec![
                key::KeyPress::from(KeyCode::Right),
                key::KeyPress::from((KeyCode::Char('f'), KeyModifiers::CONTROL)),
            ])
            .with_help("→", "right"),
            character_backward: Binding::new(vec![
                key::KeyPress::from(KeyCode::Left),
                key::KeyPress::from((KeyCode::Char('b'), KeyModifiers::CONTROL)),
            ])
            .with_help("←", "left"),
            delete_character_backward: Binding::new(vec![
                key::KeyPress::from(KeyCode::Backspace),
                key::KeyPress::from((KeyCode::Char('h'), KeyModifiers::CONTROL)),
            ])
            .with_help("backspace", "delete"),
            delete_character_forward: Binding::new(vec![
                key::KeyPress::from(KeyCode::Delete),
                key::KeyPress::from((KeyCode::Char('d'), KeyModifiers::CONTROL)),
            ])
            .with_help("del", "delete forward"),
            delete_before_cursor: Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)])
                .with_help("ctrl+u", "delete to start"),
            delete_after_cursor: Binding::new(vec![(KeyCode::Char('k'), KeyModifiers::CONTROL)])
                .with_help("ctrl+k", "delete to end"),
            line_start: Binding::new(vec![
                key::KeyPress::from(KeyCode::Home),
                key::KeyPress::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
            ])
            .with_help("home", "start"),
            line_end: Binding::new(vec![
                key::KeyPress::from(KeyCode::End),
                key::KeyPress::from((KeyCode::Char('e'), KeyModifiers::CONTROL)),
            ])
            .with_help("end", "end"),
            paste: Binding::new(vec![(KeyCode::Char('v'), KeyModifiers::CONTROL)])
                .with_help("ctrl+v", "paste"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Edit {
    Left,
    Right,
    DeleteBackward,
    DeleteForward,
    DeleteBeforeCursor,
    DeleteAfterCursor,
    Start,
    End,
    Insert(char),
}

/// An input control.
#[derive(Debug, Clone)]
pub struct Model {
    id: String,
    name: String,
    class_list: Vec<String>,
    placeholder: String,
    value: String,
    /// Cursor position in graphemes.
    pos: usize,
    focus: bool,
    visible: bool,
    selected: bool,
    /// Key bindings.
    pub key_map: KeyMap,
    sanitizer: Sanitizer,
}

impl Model {
    /// Creates a visible, unfocused, empty control whose id and name are both
    /// `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            class_list: Vec::new(),
            placeholder: String::new(),
            value: String::new(),
            pos: 0,
            focus: false,
            visible: true,
            selected: false,
            key_map: KeyMap::default(),
            sanitizer: Sanitizer::default(),
        }
    }

    /// Sets the class list from a space-separated string.
    pub fn with_class_list(mut self, classes: &str) -> Self {
        self.class_list = classes.split_whitespace().map(str::to_string).collect();
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Submission name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class names, in declaration order.
    pub fn class_list(&self) -> &[String] {
        &self.class_list
    }

    /// Reports whether the control carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value, moving the cursor to the end and dropping any
    /// selection.
    pub fn set_value(&mut self, value: &str) {
        self.value = self.sanitizer.sanitize_str(value);
        self.selected = false;
        self.pos = self.len();
    }

    /// Cursor position in graphemes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.len());
    }

    /// Shows the control.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the control. Its value is kept.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Reports whether the control is shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Selects the whole value; the next edit replaces it.
    pub fn select_all(&mut self) {
        self.selected = !self.value.is_empty();
        self.cursor_end();
    }

    /// Reports whether the whole value is selected.
    pub fn selection_active(&self) -> bool {
        self.selected
    }

    fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(pos)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Drops the selection, clearing the value when `clear` is set. Returns
    /// whether a selection was active.
    fn take_selection(&mut self, clear: bool) -> bool {
        if !self.selected {
            return false;
        }
        self.selected = false;
        if clear {
            self.value.clear();
            self.pos = 0;
        }
        true
    }

    /// Inserts text at the cursor, replacing the selection if there is one.
    pub fn insert_str(&mut self, s: &str) {
        let clean = self.sanitizer.sanitize_str(s);
        if clean.is_empty() {
            return;
        }
        self.take_selection(true);
        let at = self.byte_offset(self.pos);
        self.value.insert_str(at, &clean);
        self.pos = self.value[..at + clean.len()].graphemes(true).count();
    }

    fn delete_backward(&mut self) {
        if self.take_selection(true) || self.pos == 0 {
            return;
        }
        let start = self.byte_offset(self.pos - 1);
        let end = self.byte_offset(self.pos);
        self.value.replace_range(start..end, "");
        self.pos -= 1;
    }

    fn delete_forward(&mut self) {
        if self.take_selection(true) || self.pos >= self.len() {
            return;
        }
        let start = self.byte_offset(self.pos);
        let end = self.byte_offset(self.pos + 1);
        self.value.replace_range(start..end, "");
    }

    fn delete_before_cursor(&mut self) {
        if self.take_selection(true) {
            return;
        }
        let end = self.byte_offset(self.pos);
        self.value.replace_range(..end, "");
        self.pos = 0;
    }

    fn delete_after_cursor(&mut self) {
        if self.take_selection(true) {
            return;
        }
        let start = self.byte_offset(self.pos);
        self.value.truncate(start);
    }

    /// Handles key and paste messages while focused. Returns the paste command
    /// when the paste binding is pressed.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.insert_str(&paste_msg.0);
        } else if let Some(err) = msg.downcast_ref::<PasteErrMsg>() {
            tracing::debug!(control = %self.name, error = %err.0, "paste failed");
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let km = &self.key_map;
        let edit = if km.paste.matches(key_msg) {
            return Some(paste());
        } else if km.character_backward.matches(key_msg) {
            Edit::Left
        } else if km.character_forward.matches(key_msg) {
            Edit::Right
        } else if km.delete_character_backward.matches(key_msg) {
            Edit::DeleteBackward
        } else if km.delete_character_forward.matches(key_msg) {
            Edit::DeleteForward
        } else if km.delete_before_cursor.matches(key_msg) {
            Edit::DeleteBeforeCursor
        } else if km.delete_after_cursor.matches(key_msg) {
            Edit::DeleteAfterCursor
        } else if km.line_start.matches(key_msg) {
            Edit::Start
        } else if km.line_end.matches(key_msg) {
            Edit::End
        } else {
            match key_msg.key {
                KeyCode::Char(c)
                    if !key_msg
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Edit::Insert(c)
                }
                _ => return None,
            }
        };

        tracing::trace!(control = %self.name, ?edit, "control edit");
        match edit {
            Edit::Left => {
                if self.take_selection(false) {
                    self.cursor_start();
                } else if self.pos > 0 {
                    self.pos -= 1;
                }
            }
            Edit::Right => {
                self.take_selection(false);
                self.set_cursor(self.pos + 1);
            }
            Edit::DeleteBackward => self.delete_backward(),
            Edit::DeleteForward => self.delete_forward(),
            Edit::DeleteBeforeCursor => self.delete_before_cursor(),
            Edit::DeleteAfterCursor => self.delete_after_cursor(),
            Edit::Start => {
                self.take_selection(false);
                self.cursor_start();
            }
            Edit::End => {
                self.take_selection(false);
                self.cursor_end();
            }
            Edit::Insert(c) => self.insert_str(c.encode_utf8(&mut [0; 4])),
        }
        None
    }

    /// Renders with unstyled text.
    pub fn view(&self) -> String {
        self.render(&Style::new(), &Style::new())
    }

    /// Renders the value (or placeholder when empty) with the cursor shown
    /// while focused.
    pub fn render(&self, text_style: &Style, placeholder_style: &Style) -> String {
        let cursor = |s: &str| text_style.clone().inline(true).reverse(true).render(s);

        if self.value.is_empty() {
            if !self.focus {
                return placeholder_style.clone().inline(true).render(&self.placeholder);
            }
            let mut graphemes = self.placeholder.graphemes(true);
            let first = graphemes.next().unwrap_or(" ");
            let rest: String = graphemes.collect();
            return format!(
                "{}{}",
                cursor(first),
                placeholder_style.clone().inline(true).render(&rest)
            );
        }

        if !self.focus {
            return text_style.clone().inline(true).render(&self.value);
        }
        if self.selected {
            return cursor(&self.value);
        }

        let at = self.byte_offset(self.pos);
        let before = &self.value[..at];
        let (under, after) = match self.value[at..].graphemes(true).next() {
            Some(g) => (g, &self.value[at + g.len()..]),
            None => (" ", ""),
        };
        let plain = |s: &str| text_style.clone().inline(true).render(s);
        format!("{}{}{}", plain(before), cursor(under), plain(after))
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
        self.selected = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Reads the system clipboard and delivers a [`PasteMsg`] or [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn ctrl(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg
    }

    fn focused(value: &str) -> Model {
        let mut m = Model::new("t[0].a");
        m.set_value(value);
        m.focus();
        m
    }

    #[test]
    fn test_id_and_name_match() {
        let m = Model::new("players[2].lastName").with_class_list(" wide  bold ");
        assert_eq!(m.id(), "players[2].lastName");
        assert_eq!(m.name(), "players[2].lastName");
        assert_eq!(m.class_list(), &["wide".to_string(), "bold".to_string()]);
        assert!(m.has_class("bold"));
        assert!(m.visible());
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut m = focused("Smth");
        m.set_cursor(2);
        m.update(&key(KeyCode::Char('i')));
        assert_eq!(m.value(), "Smith");
        assert_eq!(m.position(), 3);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut m = Model::new("x");
        m.update(&key(KeyCode::Char('a')));
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_selection_replaced_by_typing() {
        let mut m = focused("Jones");
        m.select_all();
        m.update(&key(KeyCode::Char('S')));
        assert_eq!(m.value(), "S");
        assert!(!m.selection_active());
    }

    #[test]
    fn test_selection_cleared_by_backspace() {
        let mut m = focused("Jones");
        m.select_all();
        m.update(&key(KeyCode::Backspace));
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_left_collapses_selection_to_start() {
        let mut m = focused("Jones");
        m.select_all();
        m.update(&key(KeyCode::Left));
        assert!(!m.selection_active());
        assert_eq!(m.position(), 0);
        assert_eq!(m.value(), "Jones");
    }

    #[test]
    fn test_deletions() {
        let mut m = focused("abcdef");
        m.set_cursor(3);
        m.update(&key(KeyCode::Backspace));
        assert_eq!(m.value(), "abdef");
        m.update(&key(KeyCode::Delete));
        assert_eq!(m.value(), "abef");
        m.update(&ctrl('k'));
        assert_eq!(m.value(), "ab");
        m.update(&ctrl('u'));
        assert_eq!(m.value(), "");
        assert_eq!(m.position(), 0);
    }

    #[test]
    fn test_graphemes_move_as_one() {
        let mut m = focused("e\u{301}x");
        assert_eq!(m.position(), 2);
        m.update(&key(KeyCode::Left));
        m.update(&key(KeyCode::Backspace));
        assert_eq!(m.value(), "x");
    }

    #[test]
    fn test_paste_message_is_sanitized() {
        let mut m = focused("");
        m.update(&(Box::new(PasteMsg("a\nb".into())) as Msg));
        assert_eq!(m.value(), "a b");
    }

    #[test]
    fn test_hide_keeps_value() {
        let mut m = focused("Smith");
        m.hide();
        assert!(!m.visible());
        assert_eq!(m.value(), "Smith");
        m.show();
        assert!(m.visible());
    }

    #[test]
    fn test_render_plain_when_blurred() {
        let m = Model::new("x").with_placeholder("Name");
        let out = strip_ansi_escapes::strip_str(m.view());
        assert_eq!(out, "Name");
    }
}
