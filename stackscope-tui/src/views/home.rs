//! Overview page: the six-layer stack with hover highlight and the
//! quick-view popup for a pinned layer.

use crate::state::App;
use crate::theme::layer_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use stackscope_core::{layers, LayerId};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_stack(f, app, columns[0]);

    if let (Some(id), true) = (app.view.selected, app.view.popup_visible) {
        render_popup(f, app, id, columns[1]);
    } else {
        render_hint(f, app, columns[1]);
    }
}

fn render_stack(f: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("The Semantic LLM Stack")
        .style(Style::default().fg(app.theme.text));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // One three-row band per layer, top of the stack first.
    let constraints: Vec<Constraint> =
        std::iter::repeat(Constraint::Length(3)).take(6).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for layer in layers() {
        let selected = app.view.selected == Some(layer.id);
        let accent = layer_color(layer.id);
        let style = if selected {
            Style::default()
                .fg(accent)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        let marker = if selected { "» " } else { "  " };
        let card = Paragraph::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(accent)),
            Span::styled(layer.title, style),
            Span::raw("  "),
            Span::styled(layer.semantic_role, Style::default().fg(app.theme.text_dim)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if selected {
                    accent
                } else {
                    app.theme.border
                })),
        );
        f.render_widget(card, rows[layer.id.index()]);
    }
}

fn render_popup(f: &mut Frame<'_>, app: &App, id: LayerId, area: Rect) {
    let info = id.info();
    let accent = layer_color(id);
    let mut lines = vec![
        Line::from(Span::styled(
            info.title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            info.semantic_role,
            Style::default().fg(app.theme.text_dim),
        )),
        Line::from(""),
        Line::from(Span::raw(info.description)),
        Line::from(""),
    ];
    for detail in info.details {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(accent)),
            Span::raw(*detail),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to open the full breakout, Esc to dismiss.",
        Style::default().fg(app.theme.text_dim),
    )));

    let popup = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quick View")
            .border_style(Style::default().fg(accent)),
    );
    f.render_widget(popup, area);
}

fn render_hint(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "An illustrated guide to the modern LLM stack.",
            Style::default().fg(app.theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Hover a layer with j/k, then Enter to pin its quick view.",
            Style::default().fg(app.theme.text_dim),
        )),
        Line::from(Span::styled(
            "Tab cycles through the business value, diagram, and resource pages.",
            Style::default().fg(app.theme.text_dim),
        )),
    ];
    let hint = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("About"));
    f.render_widget(hint, area);
}
