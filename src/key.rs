//! Type-safe key bindings.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text shown for it. Components collect their bindings in a key map
//! struct and implement [`KeyMap`] so help views can list them.
//!
//! ```rust
//! use bubbletea_writetable::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let add = Binding::new(vec![KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL))])
//!     .with_help("ctrl+n", "add row");
//! assert_eq!(add.help().key, "ctrl+n");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Reports whether a key message is this key press.
    ///
    /// Shift is ignored for character keys since terminals report it
    /// inconsistently for upper-case letters.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.modifiers == msg.modifiers {
            return true;
        }
        matches!(msg.key, KeyCode::Char(_))
            && msg.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"ctrl+n"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Reports whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Implemented by component key maps to expose their bindings for help views.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded help, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
