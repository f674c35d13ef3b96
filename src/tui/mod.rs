//! Terminal User Interface for the campus360 dashboard.
//!
//! One tab per page; each tab shows a sortable, filterable table.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, HeaderHitbox, InputMode, PageState, PopupState};
