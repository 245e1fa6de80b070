//! Modal overlays: the character details card and the help reference.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::Character;
use crate::theme::Theme;

use super::status_color;

/// Centered rectangle covering the given percentages of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Render the full character card as a centered modal.
pub fn render_details(f: &mut Frame, th: &Theme, c: &Character, area: Rect) {
    let rect = centered_rect(60, 70, area);
    f.render_widget(Clear, rect);

    let field = |label: &str, value: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), Style::default().fg(th.subtext)),
            Span::styled(value, Style::default().fg(th.text)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            c.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Status          ", Style::default().fg(th.subtext)),
            Span::styled(
                c.status.clone(),
                Style::default()
                    .fg(status_color(&c.status, th))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        field("Species", c.species.clone()),
    ];
    if !c.kind.is_empty() {
        lines.push(field("Type", c.kind.clone()));
    }
    lines.push(field("Gender", c.gender.clone()));
    lines.push(field("Origin", c.origin.name.clone()));
    lines.push(field("Last location", c.location.name.clone()));
    lines.push(field("Episodes", c.episode.len().to_string()));
    if !c.image.is_empty() {
        lines.push(Line::default());
        lines.push(field("Image", c.image.clone()));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                " Character ",
                Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.accent)),
    );
    f.render_widget(card, rect);
}

/// Render the keybinding reference as a centered modal.
pub fn render_help(f: &mut Frame, th: &Theme, area: Rect) {
    let rect = centered_rect(50, 70, area);
    f.render_widget(Clear, rect);

    let entry = |keys: &str, action: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{keys:<14}"), Style::default().fg(th.accent)),
            Span::styled(action.to_string(), Style::default().fg(th.text)),
        ])
    };

    let lines = vec![
        entry("Enter", "Submit search / open details / pick history"),
        entry("Tab", "Cycle focus: search, results, recent"),
        entry("Up/Down", "Move selection"),
        entry("Left/Right", "Previous / next page (results)"),
        entry("Ctrl+S", "Cycle status filter"),
        entry("Ctrl+P", "Cycle species filter"),
        entry("Ctrl+G", "Cycle gender filter"),
        entry("Ctrl+R", "Reset all filters"),
        entry("Ctrl+L", "Clear search text"),
        entry("Ctrl+T", "Toggle dark/light theme"),
        entry("x", "Clear recent searches (recent pane)"),
        entry("Esc", "Close this window"),
        entry("Ctrl+C / q", "Quit"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " Keybindings ",
                Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.accent)),
    );
    f.render_widget(help, rect);
}
