//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
/// Lowercase steps a parameter down, uppercase steps it up.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') => app.adjust_cost(-10.0),
        KeyCode::Char('C') => app.adjust_cost(10.0),
        KeyCode::Char('v') => app.adjust_coverage(-5.0),
        KeyCode::Char('V') => app.adjust_coverage(5.0),
        KeyCode::Char('h') => app.adjust_sun_hours(-0.5),
        KeyCode::Char('H') => app.adjust_sun_hours(0.5),
        KeyCode::Char('p') => app.cycle_panel(false),
        KeyCode::Char('P') => app.cycle_panel(true),
        KeyCode::Char('w') => app.adjust_window(-1),
        KeyCode::Char('W') => app.adjust_window(1),
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('d') => app.reset_params(),
        _ => {}
    }
}
