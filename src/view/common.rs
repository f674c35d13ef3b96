//! UI-agnostic view model types.
//!
//! These types describe a table ready for display without depending on a
//! rendering framework. The TUI maps them to ratatui styles, the plain-text
//! printer ignores styling entirely.

/// Cell-level style classification used by badge renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleClass {
    #[default]
    Normal,
    /// Positive/active (TUI: green). E.g. "Placed", "active".
    Positive,
    /// Informational (TUI: blue). E.g. "Upcoming", faculty role.
    Info,
    /// Warning level (TUI: yellow).
    Warning,
    /// Critical level (TUI: red).
    Critical,
    /// Accent (TUI: magenta). E.g. admin role.
    Accent,
    /// Dimmed (TUI: dark gray).
    Dimmed,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<StyleClass>,
}

impl ViewCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: StyleClass) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

/// One displayed table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub id: u64,
    pub cells: Vec<ViewCell>,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub title: String,
    /// Header labels, including the sort indicator on the sorted column.
    pub headers: Vec<String>,
    /// Whether each column reacts to header clicks.
    pub sortable: Vec<bool>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow>,
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
}
