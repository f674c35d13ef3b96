//! UI-agnostic view models.
//!
//! [`crate::table::SortableTable::view_model`] builds a [`common::TableViewModel`];
//! the TUI maps it to ratatui widgets and [`plain`] prints it as text.

pub mod common;
pub mod plain;

pub use common::{StyleClass, TableViewModel, ViewCell, ViewRow};
pub use plain::render_plain;
