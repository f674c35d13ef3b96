//! Application state management.

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tracing::debug;

use crate::fixtures::Dataset;
use crate::pages::{DashboardTable, Page};

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Screen position of the table header row, recorded at render time so
/// mouse clicks can be mapped back to columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderHitbox {
    pub y: u16,
    /// `(x, width)` per column.
    pub cells: Vec<(u16, u16)>,
}

impl HeaderHitbox {
    /// Column index under the given screen position.
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        if y != self.y {
            return None;
        }
        self.cells
            .iter()
            .position(|&(start, width)| x >= start && x < start.saturating_add(width))
    }
}

/// One tab: a page, its table and per-tab UI state.
pub struct PageState {
    pub page: Page,
    pub table: Box<dyn DashboardTable>,
    /// Column the keyboard sort toggle applies to.
    pub focused_column: usize,
    /// Data has been revealed at least once.
    pub loaded: bool,
    pub ratatui_state: TableState,
}

impl PageState {
    fn new(page: Page, data: &Dataset) -> Self {
        Self {
            page,
            table: page.build(data),
            focused_column: 0,
            loaded: false,
            ratatui_state: TableState::default(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.table.column_keys().len()
    }
}

/// Complete application state.
pub struct AppState {
    pub pages: Vec<PageState>,
    /// Index into `pages`.
    pub current: usize,
    pub input_mode: InputMode,
    pub filter_input: String,
    pub popup: PopupState,
    /// One-shot message in the header, cleared on the next key.
    pub status_message: Option<String>,
    /// Simulated fetch latency before a page's data is first shown.
    pub load_delay: Duration,
    loading_since: Option<Instant>,
    pub header_hitbox: Option<HeaderHitbox>,
}

impl AppState {
    pub fn new(pages: &[Page], data: &Dataset, load_delay: Duration) -> Self {
        let mut state = Self {
            pages: pages.iter().map(|&p| PageState::new(p, data)).collect(),
            current: 0,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            popup: PopupState::None,
            status_message: None,
            load_delay,
            loading_since: None,
            header_hitbox: None,
        };
        state.switch_page(0);
        state
    }

    pub fn current_page(&self) -> Option<&PageState> {
        self.pages.get(self.current)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut PageState> {
        self.pages.get_mut(self.current)
    }

    /// Current page's table, unless its data is still loading.
    pub fn active_table_mut(&mut self) -> Option<&mut Box<dyn DashboardTable>> {
        self.pages
            .get_mut(self.current)
            .filter(|p| p.loaded)
            .map(|p| &mut p.table)
    }

    pub fn is_loading(&self) -> bool {
        self.loading_since.is_some()
    }

    /// Switches to the page at `index`; out-of-range indices are ignored.
    pub fn switch_page(&mut self, index: usize) {
        if index >= self.pages.len() {
            return;
        }
        self.current = index;
        self.header_hitbox = None;
        let delay = self.load_delay;
        let page = &mut self.pages[index];
        debug!(page = page.page.slug(), "switched page");
        if page.loaded {
            self.loading_since = None;
        } else if delay.is_zero() {
            page.loaded = true;
            self.loading_since = None;
        } else {
            self.loading_since = Some(Instant::now());
        }
    }

    pub fn next_page(&mut self) {
        if !self.pages.is_empty() {
            self.switch_page((self.current + 1) % self.pages.len());
        }
    }

    pub fn prev_page(&mut self) {
        if !self.pages.is_empty() {
            let len = self.pages.len();
            self.switch_page((self.current + len - 1) % len);
        }
    }

    /// Reveals the current page once the simulated delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(since) = self.loading_since else {
            return;
        };
        if now.saturating_duration_since(since) >= self.load_delay {
            self.loading_since = None;
            if let Some(page) = self.pages.get_mut(self.current) {
                page.loaded = true;
                debug!(page = page.page.slug(), "page data revealed");
            }
        }
    }

    pub fn focus_left(&mut self) {
        if let Some(page) = self.current_page_mut() {
            page.focused_column = page.focused_column.saturating_sub(1);
        }
    }

    pub fn focus_right(&mut self) {
        if let Some(page) = self.current_page_mut() {
            let max = page.column_count().saturating_sub(1);
            page.focused_column = (page.focused_column + 1).min(max);
        }
    }

    /// Toggles sort on the focused column. Unsortable columns are inert.
    pub fn toggle_focused_sort(&mut self) -> bool {
        let Some(page) = self.pages.get_mut(self.current).filter(|p| p.loaded) else {
            return false;
        };
        page.table.sort_by_column(page.focused_column)
    }

    /// Handles a click at a screen position; a click on a header cell
    /// focuses that column and toggles its sort.
    pub fn click_header(&mut self, x: u16, y: u16) -> bool {
        let Some(column) = self
            .header_hitbox
            .as_ref()
            .and_then(|h| h.column_at(x, y))
        else {
            return false;
        };
        let Some(page) = self.pages.get_mut(self.current).filter(|p| p.loaded) else {
            return false;
        };
        page.focused_column = column;
        page.table.sort_by_column(column)
    }

    /// Applies the filter input to the current table.
    pub fn apply_filter_input(&mut self) {
        let filter = Some(self.filter_input.clone());
        if let Some(page) = self.current_page_mut() {
            page.table.set_filter(filter);
        }
    }

    pub fn current_filter(&self) -> Option<&str> {
        self.current_page().and_then(|p| p.table.filter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(delay: Duration) -> AppState {
        AppState::new(Page::all(), &Dataset::sample(), delay)
    }

    #[test]
    fn test_zero_delay_reveals_immediately() {
        let state = state(Duration::ZERO);
        assert!(!state.is_loading());
        assert!(state.pages[0].loaded);
    }

    #[test]
    fn test_delay_reveals_after_tick() {
        let mut state = state(Duration::from_millis(500));
        assert!(state.is_loading());
        assert!(state.active_table_mut().is_none());

        state.tick(Instant::now());
        assert!(state.is_loading());

        state.tick(Instant::now() + Duration::from_secs(1));
        assert!(!state.is_loading());
        assert!(state.pages[0].loaded);

        // Revisiting a loaded page does not load again.
        state.next_page();
        assert!(state.is_loading());
        state.prev_page();
        assert!(!state.is_loading());
    }

    #[test]
    fn test_page_cycling_wraps() {
        let mut state = state(Duration::ZERO);
        state.prev_page();
        assert_eq!(state.current, Page::all().len() - 1);
        state.next_page();
        assert_eq!(state.current, 0);
        state.switch_page(99);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn test_focus_and_toggle_sort() {
        let mut state = state(Duration::ZERO);
        // Users page: Name (sortable), Email (not).
        assert!(state.toggle_focused_sort());
        state.focus_right();
        assert!(!state.toggle_focused_sort());

        for _ in 0..20 {
            state.focus_right();
        }
        assert_eq!(state.pages[0].focused_column, 5);
        state.focus_left();
        assert_eq!(state.pages[0].focused_column, 4);
    }

    #[test]
    fn test_header_click_maps_to_column() {
        let mut state = state(Duration::ZERO);
        state.header_hitbox = Some(HeaderHitbox {
            y: 2,
            cells: vec![(1, 13), (15, 25), (41, 9)],
        });

        assert!(!state.click_header(20, 3));
        assert!(!state.click_header(20, 2));
        assert_eq!(state.pages[0].focused_column, 1);

        assert!(state.click_header(5, 2));
        let vm = state.pages[0].table.view_model("Users");
        assert_eq!(vm.sort_column, Some(0));
        assert!(vm.sort_ascending);

        assert!(state.click_header(1, 2));
        let vm = state.pages[0].table.view_model("Users");
        assert!(!vm.sort_ascending);
    }

    #[test]
    fn test_hitbox_bounds() {
        let hitbox = HeaderHitbox {
            y: 0,
            cells: vec![(0, 4), (5, 3)],
        };
        assert_eq!(hitbox.column_at(3, 0), Some(0));
        assert_eq!(hitbox.column_at(4, 0), None);
        assert_eq!(hitbox.column_at(7, 0), Some(1));
        assert_eq!(hitbox.column_at(8, 0), None);
    }
}
