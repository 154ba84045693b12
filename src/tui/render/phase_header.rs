use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

use crate::model::phase::StartUpPhase;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::{pad_to_width, push_highlighted_spans};

/// Build a phase section header row: cursor gutter, fold indicator,
/// numbered title colored by the completion flag, check mark and completion
/// date when done.
pub fn phase_header_line(
    theme: &Theme,
    phase: &StartUpPhase,
    number: usize,
    expanded: bool,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'static> {
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let mut spans: Vec<Span> = Vec::new();

    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(theme.selection_border).bg(bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let indicator = if expanded { "\u{25BC} " } else { "\u{25B6} " };
    spans.push(Span::styled(
        indicator,
        Style::default().fg(theme.dim).bg(bg),
    ));

    let title_style = Style::default()
        .fg(theme.phase_color(phase.is_completed))
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let hl_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg)
        .add_modifier(Modifier::BOLD);
    push_highlighted_spans(
        &mut spans,
        &format!("Phase {}: {}", number, phase.title),
        title_style,
        hl_style,
        search_re,
    );

    if phase.is_completed {
        spans.push(Span::styled(
            " \u{2713}",
            Style::default().fg(theme.green).bg(bg),
        ));
    }

    // Completion date, right-justified with a 1-space buffer
    if let Some(ref date) = phase.completed_at {
        let used: usize = spans
            .iter()
            .map(|s| unicode::display_width(&s.content))
            .sum();
        let date_start = width.saturating_sub(unicode::display_width(date) + 1);
        if used < date_start {
            spans.push(Span::styled(
                " ".repeat(date_start - used),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                date.clone(),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
    }

    pad_to_width(&mut spans, width, bg);
    Line::from(spans)
}
