//! Rendering for the result list and its idle/loading/empty/error states.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, Character, Focus, ViewState};
use crate::theme::Theme;
use crate::util::truncate_to_width;

use super::{pane_border, status_color};

/// Render the center pane from the current view state.
pub fn render_results(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let focused = matches!(app.focus, Focus::Results);
    let border = pane_border(th, focused);

    match &app.view {
        ViewState::Populated(page) => {
            let width = area.width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = page
                .items
                .iter()
                .map(|c| result_row(c, th, width))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .title(Span::styled(
                            format!("Results ({})", page.total_count),
                            Style::default().fg(th.subtext),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border),
                )
                .highlight_style(Style::default().fg(th.base).bg(th.accent))
                .highlight_symbol("> ");
            f.render_stateful_widget(list, area, &mut app.list_state);
        }
        other => {
            let (text, style) = match other {
                ViewState::Idle => (
                    "Type a name and press Enter, or cycle a filter.".to_string(),
                    Style::default().fg(th.subtext),
                ),
                ViewState::Loading => ("Searching…".to_string(), Style::default().fg(th.subtext)),
                ViewState::Empty => (
                    "No characters found.".to_string(),
                    Style::default().fg(th.yellow),
                ),
                ViewState::Error(msg) => (
                    msg.clone(),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                ),
                ViewState::Populated(_) => unreachable!("handled above"),
            };
            let message = Paragraph::new(Line::from(Span::styled(text, style)))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled("Results", Style::default().fg(th.subtext)))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border),
                );
            f.render_widget(message, area);
        }
    }
}

/// One list row: status dot, name, species/gender, and last known location.
fn result_row(c: &Character, th: &Theme, width: usize) -> ListItem<'static> {
    let mut segs = vec![
        Span::styled("● ", Style::default().fg(status_color(&c.status, th))),
        Span::styled(
            c.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} · {}", c.species, c.gender),
            Style::default().fg(th.subtext),
        ),
    ];
    if !c.location.name.is_empty() {
        // Keep the row on one line even for long location names.
        let used: usize = segs.iter().map(|s| s.content.chars().count()).sum();
        let budget = width.saturating_sub(used + 3);
        if budget > 4 {
            segs.push(Span::raw("  @ "));
            segs.push(Span::styled(
                truncate_to_width(&c.location.name, budget),
                Style::default().fg(th.subtext),
            ));
        }
    }
    ListItem::new(Line::from(segs))
}
