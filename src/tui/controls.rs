//! Keyboard input handling for the chart.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char('m') => app.toggle_month(),
        KeyCode::Right | KeyCode::Char('n') => app.next_week(),
        KeyCode::Left | KeyCode::Char('p') => app.prev_week(),
        KeyCode::Char('1') => app.switch_preset("office"),
        KeyCode::Char('2') => app.switch_preset("retail"),
        KeyCode::Char('3') => app.switch_preset("night_shift"),
        KeyCode::Char('r') => app.regenerate(),
        _ => {}
    }
}
