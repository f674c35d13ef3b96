//! Sortable table widget. Thin TUI wrapper over [`DashboardTable::view_model`].
//!
//! [`DashboardTable::view_model`]: crate::pages::DashboardTable::view_model

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table};

use crate::tui::state::{AppState, HeaderHitbox};
use crate::tui::style::Styles;

const COLUMN_SPACING: u16 = 1;

pub fn render_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let loading = state.is_loading();
    let Some(page) = state.pages.get_mut(state.current) else {
        state.header_hitbox = None;
        return;
    };
    let title = format!(" {} ({}) ", page.page.title(), page.page.name());

    if loading || !page.loaded {
        state.header_hitbox = None;
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Styles::default());
        frame.render_widget(
            Paragraph::new("Loading…").style(Styles::dim()).block(block),
            area,
        );
        return;
    }

    let vm = page.table.view_model(page.page.title());

    // Labels already carry the sort indicator.
    let headers: Vec<Span> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let style = if i == page.focused_column {
                Styles::focused_header()
            } else {
                Styles::table_header()
            };
            Span::styled(h.clone(), style)
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let cells: Vec<Cell> = vr
                .cells
                .iter()
                .map(|c| {
                    let style = c.style.map(Styles::from_class).unwrap_or_else(Styles::default);
                    Cell::from(Span::styled(c.text.clone(), style))
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    // One spare cell for the sort indicator.
    let constraints: Vec<Constraint> = vm
        .widths
        .iter()
        .map(|w| Constraint::Length(w.saturating_add(1)))
        .collect();

    let filter_info = match page.table.filter() {
        Some(f) => format!(" [{}/{} filter: {}] ", vm.rows.len(), page.table.total_len(), f),
        None => format!(" [{}] ", vm.rows.len()),
    };
    let block = Block::default()
        .title(title)
        .title_bottom(Span::styled(filter_info, Styles::dim()))
        .borders(Borders::ALL)
        .style(Styles::default());

    let inner = block.inner(area);
    let cells = Layout::horizontal(constraints.clone())
        .spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .split(inner)
        .iter()
        .map(|r| (r.x, r.width))
        .collect();
    state.header_hitbox = Some(HeaderHitbox { y: inner.y, cells });

    if vm.rows.is_empty() {
        page.ratatui_state.select(None);
    } else {
        page.ratatui_state.select(Some(page.table.selected()));
    }

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .highlight_spacing(HighlightSpacing::Never)
        .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(table, area, &mut page.ratatui_state);
}
