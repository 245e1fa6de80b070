//! UI rendering for Rickdex.
//!
//! The layer is stateless: every frame is a pure function of [`AppState`],
//! and no handler logic lives here.

mod modals;
mod results;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::logic::{PageEntry, page_strip};
use crate::state::{AppState, Focus, Modal, ViewState};
use crate::theme::{Theme, theme};

/// Page size of the character directory; used only for the results info line.
const RESULTS_PER_PAGE: u32 = 20;

/// Render one frame of the application.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme(app.dark);
    let area = f.area();

    // Background
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_search_bar(f, app, &th, chunks[0]);
    render_filters(f, app, &th, chunks[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(chunks[2]);
    render_history(f, app, &th, middle[0]);
    results::render_results(f, app, &th, middle[1]);

    render_footer(f, app, &th, chunks[3]);

    match &app.modal {
        Modal::Details(character) => {
            let character = character.clone();
            modals::render_details(f, &th, &character, area);
        }
        Modal::Help => modals::render_help(f, &th, area),
        Modal::None => {}
    }
}

/// Border style for a pane, highlighted when it has focus.
fn pane_border(th: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(th.accent)
    } else {
        Style::default().fg(th.surface)
    }
}

/// Color for a character's life status (alive, dead, or anything else).
pub(crate) fn status_color(status: &str, th: &Theme) -> Color {
    if status.eq_ignore_ascii_case("alive") {
        th.green
    } else if status.eq_ignore_ascii_case("dead") {
        th.red
    } else {
        th.yellow
    }
}

/// Render the search input with the validation notice inline.
fn render_search_bar(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(
        app.input.clone(),
        Style::default().fg(th.text),
    )];
    if matches!(app.focus, Focus::Search) {
        spans.push(Span::styled("█", Style::default().fg(th.accent)));
    }
    if let Some(notice) = &app.notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ));
    }
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(
                "Search Character",
                Style::default().fg(th.subtext),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(pane_border(th, matches!(app.focus, Focus::Search))),
    );
    f.render_widget(input, area);
}

/// Render the three filter axes with non-default values highlighted.
fn render_filters(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let axis = |name: &str, label: &str, active: bool| -> Vec<Span<'static>> {
        let value_style = if active {
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        vec![
            Span::styled(format!("{name}: "), Style::default().fg(th.subtext)),
            Span::styled(label.to_string(), value_style),
            Span::raw("   "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(axis(
        "Status",
        app.query.status.label(),
        app.query.status.as_param().is_some(),
    ));
    spans.extend(axis(
        "Species",
        app.query.species.label(),
        app.query.species.as_param().is_some(),
    ));
    spans.extend(axis(
        "Gender",
        app.query.gender.label(),
        app.query.gender.as_param().is_some(),
    ));
    spans.push(Span::styled(
        "Ctrl+S/P/G cycle · Ctrl+R reset",
        Style::default().fg(th.subtext),
    ));

    let filters = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled("Filters", Style::default().fg(th.subtext)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface)),
    );
    f.render_widget(filters, area);
}

/// Render the recent searches pane.
fn render_history(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let items: Vec<ListItem> = app
        .history_values()
        .into_iter()
        .map(|term| ListItem::new(Line::from(Span::styled(term, Style::default().fg(th.text)))))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled("Recent", Style::default().fg(th.subtext)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(pane_border(th, matches!(app.focus, Focus::History))),
        )
        .highlight_style(Style::default().fg(th.base).bg(th.accent))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.history_state);
}

/// Render the bottom status line: results info, page strip, and key hints.
fn render_footer(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    if let ViewState::Populated(page) = &app.view {
        let shown = u32::try_from(page.items.len()).unwrap_or(0);
        let start = (app.query.page - 1) * RESULTS_PER_PAGE + 1;
        let end = start + shown.saturating_sub(1);
        spans.push(Span::styled(
            format!(
                " Showing {start}\u{2013}{end} of {} · page {} of {} ",
                page.total_count, app.query.page, page.total_pages
            ),
            Style::default().fg(th.subtext),
        ));
        for entry in page_strip(app.query.page, page.total_pages) {
            match entry {
                PageEntry::Page(p) if p == app.query.page => {
                    spans.push(Span::styled(
                        format!("[{p}]"),
                        Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                    ));
                }
                PageEntry::Page(p) => {
                    spans.push(Span::styled(
                        format!(" {p} "),
                        Style::default().fg(th.text),
                    ));
                }
                PageEntry::Ellipsis => {
                    spans.push(Span::styled(" … ", Style::default().fg(th.subtext)));
                }
            }
        }
    }

    spans.push(Span::styled(
        "  F1 help · Ctrl+T theme · Ctrl+C quit",
        Style::default().fg(th.subtext),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
