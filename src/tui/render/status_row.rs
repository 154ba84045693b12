use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen): the store's random fact (or
/// last error) on the left, key hints on the right; the search prompt while
/// searching.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let mut spans: Vec<Span> = Vec::new();
            if let Some(err) = app.store.last_error() {
                spans.push(Span::styled(
                    format!(" ! {}", unicode::truncate_to_width(err, width.saturating_sub(3))),
                    Style::default().fg(app.theme.red).bg(bg),
                ));
            } else {
                spans.push(Span::styled(
                    format!(
                        " {}",
                        unicode::truncate_to_width(
                            app.store.random_fact(),
                            width.saturating_sub(2)
                        )
                    ),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }

            if app.show_key_hints {
                let hint = "space toggle  enter fold  / search  q quit";
                let content_width: usize = spans
                    .iter()
                    .map(|s| unicode::display_width(&s.content))
                    .sum();
                let hint_width = unicode::display_width(hint);
                if content_width + hint_width + 1 < width {
                    let padding = width - content_width - hint_width - 1;
                    spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                    spans.push(Span::styled(
                        hint,
                        Style::default().fg(app.theme.dim).bg(bg),
                    ));
                }
            }
            Line::from(spans)
        }
        Mode::Search => {
            // Search prompt: /pattern▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            let hint = "Enter search  Esc cancel";
            let content_width: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            let hint_width = unicode::display_width(hint);
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(
                    hint,
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
