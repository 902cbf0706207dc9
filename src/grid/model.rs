//! Grid state, lifecycle and queries.

use super::keymap::KeyMap;
use super::view::Styles;
use crate::cell::Row;
use crate::column::{self, ColumnDescriptor};
use crate::events::{Event, EventBus, EventKind, Flow, SubscriptionId};
use crate::form::{self, FormField};
use crate::markup::TableMarkup;
use crate::metadata::MetadataProvider;
use crate::options::Options;
use crate::row_id;
use crate::validate::{self, ValidationError};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

/// The editable grid.
///
/// Owns its columns, rows and subscribers. Columns are fixed by
/// [`create`](Model::create); rows change only through the controller
/// operations ([`select_row`](Model::select_row), [`add_row`](Model::add_row),
/// [`remove_row`](Model::remove_row)) and the key handling built on them.
pub struct Model {
    pub(super) markup: TableMarkup,
    pub(super) options: Options,
    pub(super) columns: Vec<ColumnDescriptor>,
    pub(super) rows: Vec<Row>,
    pub(super) events: EventBus,
    pub(super) metadata: Option<Box<dyn MetadataProvider>>,
    /// Column of the focused control within the row in edit mode.
    pub(super) focused_col: Option<usize>,
    pub(super) focus: bool,
    pub(super) created: bool,
    pub(super) destroyed: bool,

    /// Row-level key bindings.
    pub key_map: KeyMap,
    /// Rendering styles.
    pub styles: Styles,
}

/// Creates a grid for `markup` with default options. Call
/// [`Model::create`] to initialize it.
pub fn new(markup: TableMarkup) -> Model {
    Model::new(markup, Options::default())
}

impl Model {
    /// Creates a grid. Nothing is built until [`create`](Model::create), so
    /// subscribers registered in between see the `create` and `init` events.
    pub fn new(markup: TableMarkup, options: Options) -> Self {
        Self {
            markup,
            options,
            columns: Vec::new(),
            rows: Vec::new(),
            events: EventBus::new(),
            metadata: None,
            focused_col: None,
            focus: false,
            created: false,
            destroyed: false,
            key_map: KeyMap::default(),
            styles: Styles::default(),
        }
    }

    /// Attaches a metadata provider consulted by [`create`](Model::create).
    pub fn with_metadata(mut self, provider: impl MetadataProvider + 'static) -> Self {
        self.metadata = Some(Box::new(provider));
        self
    }

    /// Replaces the rendering styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Initializes the grid.
    ///
    /// On the first call: merges table metadata into the options, builds the
    /// columns, loads the body rows (padded or truncated to the column
    /// count), appends a blank row when both `enableAddRow` and `autoAddRow`
    /// are set, then emits `create` and `init`. Later calls only emit `init`.
    pub fn create(&mut self) {
        if self.destroyed {
            return;
        }
        if !self.created {
            self.build();
            self.created = true;
            self.events.emit(&Event::Create);
        }
        self.events.emit(&Event::Init);
    }

    fn build(&mut self) {
        if let Some(patch) = self
            .metadata
            .as_ref()
            .and_then(|p| p.table_options(&self.markup))
        {
            self.options.merge(patch);
        }

        self.columns = column::build(
            &self.markup.headers,
            &self.options.column_defaults,
            &self.options.columns,
            self.metadata.as_deref(),
        );

        let width = self.columns.len();
        self.rows = self
            .markup
            .body
            .iter()
            .map(|body| {
                let id = row_id::parse(body.raw_row_id());
                if id.is_none() {
                    tracing::warn!(raw = ?body.raw_row_id(), "body row has no usable row id");
                }
                let mut cells = body.cells.clone();
                cells.resize(width, String::new());
                Row::new(id, cells)
            })
            .collect();

        tracing::debug!(
            table = %self.options.table_name,
            columns = width,
            rows = self.rows.len(),
            "grid created"
        );

        if self.options.enable_add_row && self.options.auto_add_row {
            self.add_row(true);
        }
    }

    /// Tears the grid down: emits `destroyed`, releases focus and drops every
    /// subscriber. Rows keep their last state; further input is ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.blur();
        self.destroyed = true;
        self.events.emit(&Event::Destroyed);
        self.events.clear();
        tracing::debug!(table = %self.options.table_name, "grid destroyed");
    }

    /// Reports whether [`create`](Model::create) has run.
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Reports whether [`destroy`](Model::destroy) has run.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Effective options, including merged table metadata.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Stored but has no effect on editing.
    pub fn set_single_cell_edit_mode(&mut self, enabled: bool) {
        self.options.single_cell_edit_mode = enabled;
    }

    /// Enables or disables row addition.
    pub fn set_enable_add_row(&mut self, enabled: bool) {
        self.options.enable_add_row = enabled;
    }

    /// Sets the auto-add flag. Only consulted by [`create`](Model::create).
    pub fn set_auto_add_row(&mut self, enabled: bool) {
        self.options.auto_add_row = enabled;
    }

    /// Column descriptors, in header order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Rows, in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Mutable access to the row at `index`, for editing control values
    /// directly.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Position of the row carrying `id`.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.rows.iter().position(|r| r.row_id == Some(id))
    }

    /// Position of the row in edit mode.
    pub fn editing_row(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.editing)
    }

    /// `(row, column)` of the focused control.
    pub fn focused_cell(&self) -> Option<(usize, usize)> {
        Some((self.editing_row()?, self.focused_col?))
    }

    /// The edit-mode marker class when `index` is the row in edit mode.
    pub fn row_class(&self, index: usize) -> Option<&str> {
        self.rows
            .get(index)
            .filter(|r| r.editing)
            .map(|_| self.options.edit_mode_class.as_str())
    }

    /// Registers a subscriber for one kind of event.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event<'_>) -> Flow + Send + 'static,
    {
        self.events.subscribe(kind, handler)
    }

    /// Removes a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Called when the grid is created.
    pub fn on_create<F: FnMut() + Send + 'static>(&mut self, mut f: F) -> SubscriptionId {
        self.subscribe(EventKind::Create, move |_| {
            f();
            Flow::Continue
        })
    }

    /// Called when initialization completes.
    pub fn on_init<F: FnMut() + Send + 'static>(&mut self, mut f: F) -> SubscriptionId {
        self.subscribe(EventKind::Init, move |_| {
            f();
            Flow::Continue
        })
    }

    /// Called when the grid is destroyed.
    pub fn on_destroyed<F: FnMut() + Send + 'static>(&mut self, mut f: F) -> SubscriptionId {
        self.subscribe(EventKind::Destroyed, move |_| {
            f();
            Flow::Continue
        })
    }

    /// Called with each appended row.
    pub fn on_row_added<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(&Row) + Send + 'static,
    {
        self.subscribe(EventKind::RowAdded, move |e| {
            if let Some(row) = e.row() {
                f(row);
            }
            Flow::Continue
        })
    }

    /// Called with each selected row.
    pub fn on_row_selected<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(&Row) + Send + 'static,
    {
        self.subscribe(EventKind::RowSelected, move |e| {
            if let Some(row) = e.row() {
                f(row);
            }
            Flow::Continue
        })
    }

    /// Called with each row about to be removed. Return [`Flow::Stop`] to
    /// keep the row.
    pub fn on_row_removed<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(&Row) -> Flow + Send + 'static,
    {
        self.subscribe(EventKind::RowRemoved, move |e| match e.row() {
            Some(row) => f(row),
            None => Flow::Continue,
        })
    }

    /// One field per materialized control, in row then column order.
    pub fn form_fields(&self) -> Vec<FormField> {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter_map(|c| c.control())
            .map(|c| FormField::new(c.name(), c.value()))
            .collect()
    }

    /// The form fields as a JSON object keyed by field name.
    pub fn form_json(&self) -> serde_json::Value {
        form::to_json(&self.form_fields())
    }

    /// Materialized controls in editable columns whose value fails the
    /// column's checks.
    pub fn invalid_fields(&self) -> Vec<(String, ValidationError)> {
        let mut out = Vec::new();
        for row in &self.rows {
            for (col, cell) in self.columns.iter().zip(&row.cells) {
                let Some(input) = cell.control().filter(|_| col.editable) else {
                    continue;
                };
                if let Err(e) = validate::check(col, input.value()) {
                    out.push((input.name().to_string(), e));
                }
            }
        }
        out
    }

    /// Handles key messages while focused and forwards everything else to
    /// the focused control.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus || self.destroyed {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.add_row.matches(key_msg) {
                self.add_row(false);
                return None;
            }
            if self.key_map.remove_row.matches(key_msg) {
                if let Some(index) = self.editing_row() {
                    self.remove_row(index);
                }
                return None;
            }
            if self.key_map.row_up.matches(key_msg) {
                self.move_row(false);
                return None;
            }
            if self.key_map.row_down.matches(key_msg) {
                self.move_row(true);
                return None;
            }
            if self.key_map.leave_row.matches(key_msg) {
                self.leave_row();
                return None;
            }
        }

        let (r, c) = self.focused_cell()?;
        self.rows[r].cells[c].control_mut()?.update(&msg)
    }

    fn move_row(&mut self, down: bool) {
        let last = match self.rows.len().checked_sub(1) {
            Some(last) => last,
            None => return,
        };
        let target = match (self.editing_row(), down) {
            (Some(i), true) if i < last => i + 1,
            (Some(i), false) if i > 0 => i - 1,
            (Some(_), _) => return,
            (None, true) => 0,
            (None, false) => last,
        };
        tracing::trace!(target, "keyboard row move");
        let col = self.focused_col;
        self.select(target, col, false);
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        let (r, c) = self.focused_cell()?;
        self.rows[r].cells[c].control_mut()?.focus()
    }

    fn blur(&mut self) {
        self.focus = false;
        if let Some((r, c)) = self.focused_cell() {
            if let Some(input) = self.rows[r].cells[c].control_mut() {
                input.blur();
            }
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(TableMarkup::default());
        model.create();
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
