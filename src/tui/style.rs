//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::StyleClass;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::Gray;

    pub const FOCUS: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Header cell of the keyboard-focused column.
    pub fn focused_header() -> Style {
        Self::table_header()
            .fg(Theme::FOCUS)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Filter input style.
    pub fn filter_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Status message style.
    pub fn status() -> Style {
        Style::default().fg(Color::Yellow).bg(Theme::HEADER_BG)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Maps a UI-agnostic [`StyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: StyleClass) -> Style {
        match class {
            StyleClass::Normal => Self::default(),
            StyleClass::Positive => Style::default().fg(Color::Green),
            StyleClass::Info => Style::default().fg(Color::LightBlue),
            StyleClass::Warning => Style::default().fg(Color::Yellow),
            StyleClass::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            StyleClass::Accent => Style::default().fg(Color::Magenta),
            StyleClass::Dimmed => Style::default().fg(Color::DarkGray),
        }
    }
}
