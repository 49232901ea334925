use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};
use crate::ui::controls::ControlsIntent;
use crate::ui::nav::{NavIntent, NavState};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Esc always navigates home, from anywhere.
    if matches!(key.code, KeyCode::Esc) {
        app.dispatch_nav(NavIntent::GoHome);
        return;
    }

    match app.nav() {
        NavState::Home => handle_home_key(app, key),
        NavState::Details { .. } => handle_grid_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Tab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Backspace => app.dispatch_controls(ControlsIntent::SearchBackspace),
            KeyCode::Char(ch) if !has_control_modifier(key) => {
                app.dispatch_controls(ControlsIntent::SearchChar(ch));
            }
            _ => {}
        },
        Focus::Grid => {
            match key.code {
                // Category browsing and grid width only make sense while
                // the grid itself has focus; in the search box these
                // characters are text.
                KeyCode::Char('c') => app.dispatch_controls(ControlsIntent::CategoryNext),
                KeyCode::Char('C') => app.dispatch_controls(ControlsIntent::CategoryPrev),
                KeyCode::Char('+') => app.dispatch_controls(ControlsIntent::ColumnsUp),
                KeyCode::Char('-') => app.dispatch_controls(ControlsIntent::ColumnsDown),
                KeyCode::Char('/') => {
                    app.dispatch_controls(ControlsIntent::SearchClear);
                    app.toggle_focus();
                }
                _ => handle_grid_key(app, key),
            }
        }
    }
}

/// Cursor movement and the per-card Open action; shared between the home
/// grid and the details recommendation grid.
fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.move_selection(-1, 0),
        KeyCode::Right => app.move_selection(1, 0),
        KeyCode::Up => app.move_selection(0, -1),
        KeyCode::Down => app.move_selection(0, 1),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

fn has_control_modifier(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
}
