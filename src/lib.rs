#![warn(missing_docs)]

//! # bubbletea-writetable
//!
//! An editable, form-bound grid component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! The grid turns a static table into an editable one. Selecting a row puts
//! it in edit mode: every editable cell gets a single-line input control whose
//! id and name follow the `"{tableName}[{rowId}].{columnName}"` convention, so
//! the values can be submitted as a form and regrouped by row and column.
//! Selecting another row writes the edited values back into the display text.
//! A single blank trailing row can be kept around for appending entries, and
//! stale blank rows are pruned whenever the user moves on.
//!
//! ## Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`column`] | Builds column descriptors from header cells and options |
//! | [`row_id`] | Allocates row identifiers |
//! | [`blank`] | Detects and prunes blank rows |
//! | [`cell`] | Materializes and toggles a cell's input control |
//! | [`grid`] | The row edit-state controller, key handling and view |
//! | [`events`] | Synchronous, typed event notification |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_writetable::prelude::*;
//!
//! let table = TableMarkup::new(["firstName", "lastName"])
//!     .with_row(BodyRow::new(["Ann", "Lee"]).with_row_id(0))
//!     .with_row(BodyRow::new(["Bo", "Park"]).with_row_id(1));
//!
//! let mut grid = Grid::new(table, Options::new().with_table_name("players"));
//! grid.on_row_added(|row| println!("added row {:?}", row.row_id));
//! grid.create();
//!
//! assert_eq!(grid.num_columns(), 2);
//! assert_eq!(grid.rows()[2].row_id, Some(2));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_writetable::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     grid: Grid,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut grid = Grid::new(TableMarkup::new(["name"]), Options::new());
//!         grid.create();
//!         let cmd = grid.focus();
//!         (Self { grid }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.grid.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.grid.view()
//!     }
//! }
//! ```

pub mod blank;
pub mod cell;
pub mod column;
pub mod control;
pub mod error;
pub mod events;
pub mod form;
pub mod grid;
pub mod key;
pub mod markup;
pub mod metadata;
pub mod options;
pub mod row_id;
pub mod runeutil;
pub mod validate;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - **Focused**: the component receives keyboard input.
/// - **Blurred**: it ignores keyboard input and renders inactive.
///
/// ```rust
/// use bubbletea_writetable::prelude::*;
///
/// let mut grid = Grid::new(TableMarkup::new(["a"]), Options::new());
/// assert!(!grid.focused());
/// grid.focus();
/// assert!(grid.focused());
/// grid.blur();
/// assert!(!grid.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command for the
    /// bubbletea runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use cell::{CellState, Row};
pub use column::{ColumnDescriptor, ColumnType};
pub use control::Model as CellInput;
pub use error::{Error, Result};
pub use events::{Event, EventBus, EventKind, Flow, SubscriptionId};
pub use form::FormField;
pub use grid::{Model as Grid, Styles as GridStyles};
pub use markup::{BodyRow, HeaderCell, TableMarkup};
pub use metadata::{AttributeMetadata, MetadataProvider};
pub use options::{ColumnDefaults, ColumnOverrides, Options, OptionsPatch};
pub use validate::ValidationError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_writetable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cell::{CellState, Row};
    pub use crate::column::{ColumnDescriptor, ColumnType};
    pub use crate::control::Model as CellInput;
    pub use crate::events::{Event, EventKind, Flow, SubscriptionId};
    pub use crate::form::FormField;
    pub use crate::grid::{KeyMap as GridKeyMap, Model as Grid, Styles as GridStyles};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::markup::{BodyRow, HeaderCell, TableMarkup};
    pub use crate::metadata::{AttributeMetadata, MetadataProvider};
    pub use crate::options::{ColumnDefaults, ColumnOverrides, Options};
    pub use crate::Component;
}
