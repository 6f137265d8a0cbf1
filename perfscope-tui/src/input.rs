//! Keyboard handling — maps key events to view toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle keyboard input and update app state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }

        // Direct view toggles
        KeyCode::Char('1') | KeyCode::Char('w') => {
            app.select("waterfall");
        }
        KeyCode::Char('2') | KeyCode::Char('c') => {
            app.select("calltree");
        }
        KeyCode::Char('3') | KeyCode::Char('f') => {
            app.select("flamegraph");
        }

        // Cycle through views
        KeyCode::Tab | KeyCode::Right => {
            app.select_next();
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.select_prev();
        }

        _ => {}
    }
}

/// Key bindings help text for the status bar.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("1/w", "Waterfall"),
        ("2/c", "Call Tree"),
        ("3/f", "Flame Graph"),
        ("Tab / Shift+Tab", "Cycle views"),
    ]
}
