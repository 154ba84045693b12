use crossterm::event::{KeyCode, KeyEvent};

use crate::model::phase::ChangeEvent;
use crate::ops::phase_ops;

use super::app::{App, FlatRow, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = app.build_flat_rows().len().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => activate_row(app),
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.search_input.clear();
        }
        KeyCode::Esc => {
            app.last_search = None;
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.build_flat_rows().len();
    if len == 0 {
        return;
    }
    let cursor = app.cursor.min(len - 1) as isize + delta;
    app.cursor = cursor.clamp(0, len as isize - 1) as usize;
}

/// Activate the row under the cursor: a phase header collapses or expands
/// its section; a task row dispatches a single checkbox change event.
/// Locked tasks dispatch nothing, like a disabled checkbox.
fn activate_row(app: &mut App) {
    let rows = app.build_flat_rows();
    match rows.get(app.cursor) {
        Some(&FlatRow::PhaseHeader { phase_idx }) => {
            let Some(data) = app.store.data() else {
                return;
            };
            let phase_id = data.start_up_phases[phase_idx].id;
            if !app.collapsed.remove(&phase_id) {
                app.collapsed.insert(phase_id);
            }
        }
        Some(&FlatRow::Task {
            phase_idx,
            task_idx,
        }) => {
            let event = {
                let Some(data) = app.store.data() else {
                    return;
                };
                if phase_ops::phase_locked(data, phase_idx) {
                    return;
                }
                let phase = &data.start_up_phases[phase_idx];
                let task = &phase.tasks[task_idx];
                ChangeEvent {
                    phase_id: phase.id,
                    task_id: task.id,
                    checked: !task.is_checked,
                }
            };
            app.store.handle_change(&event);
        }
        None => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
        }
        KeyCode::Enter => {
            app.last_search = if app.search_input.is_empty() {
                None
            } else {
                Some(app.search_input.clone())
            };
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}
