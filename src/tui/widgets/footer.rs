//! One-line key hint bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

const HINTS: &[(&str, &str)] = &[
    ("Tab", "page"),
    ("←→", "column"),
    ("s", "sort"),
    ("/", "filter"),
    ("?", "help"),
    ("q", "quit"),
];

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {}", key), Styles::help_key()),
                Span::styled(format!(" {} ", action), Styles::help()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
