//! campus360 - role-based campus dashboard library.
//!
//! Provides the sortable table core and the pages built on it, shared by:
//! - the interactive TUI (`campus360`)
//! - plain-text output (`campus360 --print`)

pub mod error;
pub mod fixtures;
pub mod models;
pub mod pages;
pub mod report;
pub mod table;
pub mod tui;
pub mod view;
