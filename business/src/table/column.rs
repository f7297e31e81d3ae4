use std::fmt;
use std::sync::Arc;

use crate::row::{FieldValue, Row, resolve};

/// Visual tone of a [`Cell::Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Edit,
    Delete,
}

/// A per-row button, identified by the row's `id` when it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub row_id: Option<i64>,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self.kind {
            RowActionKind::Edit => "Edit",
            RowActionKind::Delete => "Delete",
        }
    }
}

/// What a column hands to the UI for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge { text: String, tone: Tone },
    Actions(Vec<RowAction>),
}

impl Cell {
    /// Plain text view of the cell, used by tests and accessibility labels.
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) | Self::Badge { text, .. } => text.clone(),
            Self::Actions(actions) => actions
                .iter()
                .map(RowAction::label)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// `(value, row, row index on the page) -> cell`
pub type CellRenderer = Arc<dyn Fn(FieldValue<'_>, &Row, usize) -> Cell + Send + Sync>;

#[derive(Clone)]
pub struct ColumnDef {
    key: String,
    label: String,
    sortable: bool,
    exportable: bool,
    is_serial_number: bool,
    render: Option<CellRenderer>,
}

impl ColumnDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            exportable: true,
            is_serial_number: false,
            render: None,
        }
    }

    /// A running row number computed from the page offset. Never sortable.
    pub fn serial(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            is_serial_number: true,
            ..Self::new(key, label)
        }
    }

    /// Ignored for serial columns.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable && !self.is_serial_number;
        self
    }

    pub fn exportable(mut self, exportable: bool) -> Self {
        self.exportable = exportable;
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(FieldValue<'_>, &Row, usize) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_exportable(&self) -> bool {
        self.exportable
    }

    pub fn is_serial_number(&self) -> bool {
        self.is_serial_number
    }

    /// Cell for the row at `index` on the current page; `serial` is its running number.
    pub fn cell(&self, row: &Row, index: usize, serial: u64) -> Cell {
        if self.is_serial_number {
            return Cell::Text(serial.to_string());
        }

        let value = resolve(row, &self.key);
        match &self.render {
            Some(render) => render(value, row, index),
            None => Cell::Text(value.to_display()),
        }
    }

    /// Raw field text for a CSV line. Renderers are not applied; serial columns count from
    /// the export position.
    pub fn export_field(&self, row: &Row, export_index: usize) -> String {
        if self.is_serial_number {
            return (export_index + 1).to_string();
        }
        resolve(row, &self.key).to_display()
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("exportable", &self.exportable)
            .field("is_serial_number", &self.is_serial_number)
            .field("render", &self.render.is_some())
            .finish()
    }
}
