//! Layer breakout page: the full functional breakdown for a single layer.

use crate::state::App;
use crate::theme::layer_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use stackscope_core::LayerId;

pub fn render(f: &mut Frame<'_>, app: &App, id: LayerId, area: Rect) {
    let info = id.info();
    let accent = layer_color(id);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("MODULE 0{}", id.index() + 1),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            info.title,
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            info.semantic_role,
            Style::default().fg(app.theme.text_dim),
        )),
        Line::from(""),
        Line::from(Span::raw(info.description)),
        Line::from(""),
        Line::from(Span::styled(
            "Functional Breakdown",
            Style::default().fg(app.theme.text_dim).add_modifier(Modifier::BOLD),
        )),
    ];
    for detail in info.details {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(accent)),
            Span::raw(*detail),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Example: ", Style::default().fg(app.theme.text_dim)),
        Span::raw(info.example),
    ]));

    let main = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );
    f.render_widget(main, columns[0]);

    render_side(f, app, id, columns[1]);
}

fn render_side(f: &mut Frame<'_>, app: &App, id: LayerId, area: Rect) {
    let info = id.info();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let strategy = Paragraph::new(Span::styled(
        info.context_need,
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Core Strategy", Style::default().fg(app.theme.warning))),
    );
    f.render_widget(strategy, rows[0]);

    let integration = Paragraph::new(Span::raw(info.integration))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Integration"));
    f.render_widget(integration, rows[1]);

    let components: Vec<Line<'_>> = info
        .sub_components
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::styled("▪ ", Style::default().fg(app.theme.primary)),
                Span::raw(*c),
            ])
        })
        .collect();
    let sub = Paragraph::new(components)
        .block(Block::default().borders(Borders::ALL).title("Sub-Components"));
    f.render_widget(sub, rows[2]);
}
