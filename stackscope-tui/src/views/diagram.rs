//! Exploded-diagram page: the six layers pulled apart with the data flow
//! drawn between them, plus the three architecture notes.

use crate::state::App;
use crate::theme::layer_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use stackscope_core::layers;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    render_diagram(f, app, layout[0]);
    render_notes(f, app, layout[1]);
}

fn render_diagram(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "An exploded perspective of the modular semantic layers, visualizing",
            Style::default().fg(app.theme.text_dim),
        )),
        Line::from(Span::styled(
            "the flow of information across the entire AI pipeline.",
            Style::default().fg(app.theme.text_dim),
        )),
        Line::from(""),
    ];
    for layer in layers() {
        let accent = layer_color(layer.id);
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:^34}  ", layer.title),
                Style::default()
                    .fg(accent)
                    .bg(app.theme.panel)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(layer.integration, Style::default().fg(app.theme.text_dim)),
        ]));
        if layer.id.index() < 5 {
            lines.push(Line::from(Span::styled(
                "                    │",
                Style::default().fg(app.theme.border),
            )));
            lines.push(Line::from(Span::styled(
                "                    ▼",
                Style::default().fg(app.theme.border),
            )));
        }
    }

    let diagram = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Architectural Blowout Diagram"),
    );
    f.render_widget(diagram, area);
}

fn render_notes(f: &mut Frame<'_>, app: &App, area: Rect) {
    let notes = [
        (
            "Perspective",
            "Six modular layers decoupled for maximum scalability and reliability.",
            app.theme.primary,
        ),
        (
            "Integration",
            "Seamless data flow between retrieval, reasoning, and generation.",
            app.theme.accent,
        ),
        (
            "Governance",
            "Integrated safety guardrails ensuring output quality at every stage.",
            app.theme.success,
        ),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, (title, body, color)) in notes.into_iter().enumerate() {
        let widget = Paragraph::new(Span::raw(body))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, Style::default().fg(color))),
            );
        f.render_widget(widget, columns[i]);
    }
}
