//! Resource breakout page: curated links for one resource group.

use crate::state::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use stackscope_core::ResourceId;

pub fn render(f: &mut Frame<'_>, app: &App, id: ResourceId, area: Rect) {
    let group = id.info();

    let mut lines = vec![
        Line::from(Span::styled(
            group.description,
            Style::default().fg(app.theme.text_dim),
        )),
        Line::from(""),
    ];
    for link in group.items {
        lines.push(Line::from(Span::styled(
            link.name,
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::raw(link.desc)));
        lines.push(Line::from(Span::styled(
            link.url,
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(group.title)
            .style(Style::default().fg(app.theme.text)),
    );
    f.render_widget(widget, area);
}
