use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::{phases_view, status_row};

/// The static page header. A literal, never derived from data.
const HEADER: &str = "My startup phase";

/// Render the page wrapper: header, phase list, status row.
pub fn render_page(frame: &mut Frame, app: &mut App, area: Rect) {
    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Min(1),    // phase list
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    phases_view::render_phases_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title = Line::from(Span::styled(
        format!(" {}", HEADER),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let header = Paragraph::new(vec![title, separator]).style(Style::default().bg(bg));
    frame.render_widget(header, area);
}
