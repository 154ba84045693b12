use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::ops::phase_ops;
use crate::tui::app::{App, FlatRow};

use super::{checkbox, phase_header};

/// Render the phase list content area: one header row per phase in data
/// order, task checkbox rows beneath expanded sections.
pub fn render_phases_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }

    let rows = app.build_flat_rows();

    // Clamp cursor and keep it in the visible window
    app.cursor = app.cursor.min(rows.len().saturating_sub(1));
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    // An empty checklist is just the page chrome, no placeholder row.
    if rows.is_empty() {
        return;
    }

    let data = match app.store.data() {
        Some(d) => d,
        None => return,
    };
    let search_re = app.active_search_re();
    let width = area.width as usize;
    let scroll = app.scroll_offset;
    let end = rows.len().min(scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for (item, row_idx) in rows[scroll..end].iter().zip(scroll..end) {
        let is_cursor = row_idx == app.cursor;
        match *item {
            FlatRow::PhaseHeader { phase_idx } => {
                let phase = &data.start_up_phases[phase_idx];
                let expanded = !app.collapsed.contains(&phase.id);
                lines.push(phase_header::phase_header_line(
                    &app.theme,
                    phase,
                    phase_idx + 1,
                    expanded,
                    is_cursor,
                    width,
                    search_re.as_ref(),
                ));
            }
            FlatRow::Task {
                phase_idx,
                task_idx,
            } => {
                let phase = &data.start_up_phases[phase_idx];
                let locked = phase_ops::phase_locked(data, phase_idx);
                lines.push(checkbox::checkbox_line(
                    &app.theme,
                    &phase.tasks[task_idx],
                    locked,
                    is_cursor,
                    width,
                    search_re.as_ref(),
                ));
            }
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
