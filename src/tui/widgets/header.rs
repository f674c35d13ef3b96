//! Header widget showing app name, tabs, and filter/status.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Name
        Constraint::Min(20),    // Tabs
        Constraint::Length(36), // Filter/Status
    ])
    .split(area);

    frame.render_widget(Paragraph::new(" campus360").style(Styles::header()), chunks[0]);

    let tabs: Vec<Span> = state
        .pages
        .iter()
        .enumerate()
        .flat_map(|(i, page)| {
            let style = if i == state.current {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            vec![
                Span::styled(format!(" {}:", i + 1), Styles::dim()),
                Span::styled(format!("{} ", page.page.name()), style),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(Styles::header()),
        chunks[1],
    );

    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::status())
    } else {
        match state.input_mode {
            InputMode::Filter => (
                format!("Filter: {}█", state.filter_input),
                Styles::filter_input(),
            ),
            InputMode::Normal => {
                let text = state
                    .current_filter()
                    .map(|f| format!("/{}", f))
                    .unwrap_or_default();
                (text, Styles::header())
            }
        }
    };
    frame.render_widget(Paragraph::new(right_content).style(right_style), chunks[2]);
}
