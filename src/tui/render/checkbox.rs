use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

use crate::model::phase::Task;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::{pad_to_width, push_highlighted_spans};

/// The character inside the checkbox `[ ]`
fn checkbox_symbol(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Build a task checkbox row: cursor gutter, indent, checkbox bound to the
/// task's checked state, label. Locked rows render dimmed throughout, like
/// a disabled checkbox.
pub fn checkbox_line(
    theme: &Theme,
    task: &Task,
    locked: bool,
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

    spans.push(Span::styled("    ", Style::default().bg(bg)));
    spans.push(Span::styled(
        format!("{} ", checkbox_symbol(task.is_checked)),
        Style::default()
            .fg(theme.task_color(task.is_checked, locked))
            .bg(bg),
    ));

    let label_fg = if locked {
        theme.dim
    } else if is_cursor {
        theme.text_bright
    } else {
        theme.text
    };
    let mut label_style = Style::default().fg(label_fg).bg(bg);
    if is_cursor {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let hl_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg)
        .add_modifier(Modifier::BOLD);

    let prefix_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let available = width.saturating_sub(prefix_width + 1);
    let label = unicode::truncate_to_width(&task.label, available);
    push_highlighted_spans(&mut spans, &label, label_style, hl_style, search_re);

    pad_to_width(&mut spans, width, bg);
    Line::from(spans)
}
