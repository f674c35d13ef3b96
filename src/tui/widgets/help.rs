//! Help popup widget with the current page's columns.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::PageState;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Next / previous page"),
    ("1-9", "Jump to page"),
    ("← → / < >", "Focus column"),
    ("s / Enter", "Toggle sort on focused column"),
    ("Click header", "Toggle sort on that column"),
    ("/", "Filter rows (Esc clears)"),
    ("↑ ↓ / j k", "Move selection"),
    ("PgUp / PgDn", "Page up / down"),
    ("Home / End", "First / last row"),
    ("? / H", "Toggle this help"),
    ("q", "Quit"),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, page: Option<&PageState>, scroll: &mut usize) {
    // 60% width, 80% height, clamped to 40-80 x 10-30
    let popup_width = (area.width * 60 / 100).clamp(40, 80).min(area.width);
    let popup_height = (area.height * 80 / 100).clamp(10, 30).min(area.height);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(area.x + popup_x, area.y + popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let title = page.map(|p| p.page.title()).unwrap_or("Help");
    let content = help_content(page);
    let content_lines = content.len();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_content(page: Option<&PageState>) -> Vec<Line<'static>> {
    let section = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);

    let mut lines = vec![Line::from(Span::styled("Keys", section))];
    for (key, action) in KEY_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", key), key_style),
            Span::raw(*action),
        ]));
    }

    if let Some(page) = page {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Columns", section)));
        let vm = page.table.view_model(page.page.title());
        for (label, sortable) in vm.headers.iter().zip(&vm.sortable) {
            let mark = if *sortable { "sortable" } else { "-" };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", label), key_style),
                Span::styled(mark, Style::default().fg(Color::DarkGray)),
            ]));
        }
    }
    lines
}
