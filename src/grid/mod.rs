//! Editable grid component for Bubble Tea applications.
//!
//! The grid is attached to a [`TableMarkup`](crate::markup::TableMarkup):
//! header cells define the columns, body rows are the pre-existing data.
//! Selecting a row puts it in edit mode, which gives every editable cell an
//! input control named `"{tableName}[{rowId}].{columnName}"`; selecting
//! another row flushes those values back into the display text. A blank
//! trailing row can be kept around for appending entries.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_writetable::grid::Model;
//! use bubbletea_writetable::markup::{BodyRow, TableMarkup};
//! use bubbletea_writetable::options::Options;
//!
//! let table = TableMarkup::new(["firstName", "lastName"])
//!     .with_row(BodyRow::new(["Ann", "Lee"]).with_row_id(0));
//! let mut grid = Model::new(table, Options::new().with_table_name("players"));
//! grid.create();
//!
//! // One pre-existing row plus the auto-added blank row.
//! assert_eq!(grid.num_rows(), 2);
//! assert_eq!(grid.editing_row(), Some(1));
//!
//! grid.select_row(0, false);
//! let names: Vec<String> = grid.form_fields().into_iter().map(|f| f.name).collect();
//! assert!(names.contains(&"players[0].lastName".to_string()));
//! ```
//!
//! # Events
//!
//! Subscribe before calling [`Model::create`] to observe `create` and `init`.
//! A `rowRemoved` subscriber can veto the removal:
//!
//! ```rust
//! use bubbletea_writetable::events::Flow;
//! use bubbletea_writetable::grid::Model;
//! use bubbletea_writetable::markup::{BodyRow, TableMarkup};
//! use bubbletea_writetable::options::Options;
//!
//! let table = TableMarkup::new(["name"]).with_row(BodyRow::new(["keep me"]).with_row_id(0));
//! let mut grid = Model::new(table, Options::new().with_auto_add_row(false));
//! grid.on_row_removed(|_row| Flow::Stop);
//! grid.create();
//!
//! assert!(!grid.remove_row(0));
//! assert_eq!(grid.num_rows(), 1);
//! ```

pub mod controller;
pub mod keymap;
pub mod model;
pub mod view;


pub use keymap::KeyMap;
pub use model::{new, Model};
pub use view::Styles;
