//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::state::{AppState, InputMode, PopupState};
use crate::pages::DashboardTable;

const PAGE_SIZE: usize = 20;

/// Result of handling an input event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;
    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

/// Handles mouse input: left click on a header cell sorts, wheel scrolls.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> KeyAction {
    if state.popup.is_open() {
        return KeyAction::None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.click_header(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollUp => {
            if let Some(table) = state.active_table_mut() {
                table.select_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if let Some(table) = state.active_table_mut() {
                table.select_down();
            }
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('H') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char('?') | KeyCode::Char('H') => {
            state.popup = PopupState::Help { scroll: 0 };
        }

        // Page navigation
        KeyCode::Tab => state.next_page(),
        KeyCode::BackTab => state.prev_page(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            state.switch_page(index);
        }

        // Column focus and sorting
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('<') => state.focus_left(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('>') => state.focus_right(),
        KeyCode::Char('s') | KeyCode::Enter => {
            state.toggle_focused_sort();
        }

        // Filter
        KeyCode::Char('/') => {
            if state.active_table_mut().is_some() {
                state.filter_input = state.current_filter().unwrap_or_default().to_string();
                state.input_mode = InputMode::Filter;
            }
        }

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => with_table(state, |t| t.select_up()),
        KeyCode::Down | KeyCode::Char('j') => with_table(state, |t| t.select_down()),
        KeyCode::PageUp => with_table(state, |t| t.page_up(PAGE_SIZE)),
        KeyCode::PageDown => with_table(state, |t| t.page_down(PAGE_SIZE)),
        KeyCode::Home => with_table(state, |t| t.home()),
        KeyCode::End => with_table(state, |t| t.end()),

        _ => {}
    }
    KeyAction::None
}

/// Handles keys in filter mode. The filter applies as you type.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.filter_input.clear();
            state.apply_filter_input();
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            state.apply_filter_input();
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            state.apply_filter_input();
        }
        _ => {}
    }
    KeyAction::None
}

fn with_table(state: &mut AppState, f: impl FnOnce(&mut Box<dyn DashboardTable>)) {
    if let Some(table) = state.active_table_mut() {
        f(table);
    }
}
