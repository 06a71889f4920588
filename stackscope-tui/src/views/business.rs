//! Business value page: subject input plus the four value cards, either the
//! built-in defaults or a generated set.

use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_input(f, app, layout[0]);
    render_cards(f, app, layout[1]);
}

fn render_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let border = if app.input_focused {
        app.theme.border_focus
    } else {
        app.theme.border
    };
    let status = if app.generating {
        " (generating...)"
    } else {
        ""
    };
    let text = if app.subject_input.is_empty() && !app.input_focused {
        Span::styled(
            "e.g. 'a bakery', 'logistics', 'telehealth'",
            Style::default().fg(app.theme.text_dim),
        )
    } else {
        Span::styled(
            app.subject_input.as_str(),
            Style::default().fg(app.theme.text),
        )
    };
    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Your business or industry{}", status))
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(input, area);
}

fn render_cards(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = if app.cards_generated {
        format!("Value for '{}'", app.subject_input.trim())
    } else {
        "Why a semantic stack pays off".to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    let cells = [
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]),
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]),
    ];

    for (i, card) in app.cards.iter().enumerate() {
        // A 2x2 grid; any records past the fourth simply have no cell.
        if i >= 4 {
            break;
        }
        let cell = cells[i / 2][i % 2];
        let lines = vec![
            Line::from(Span::styled(
                card.title.clone(),
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::raw(card.desc.clone())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Impact Metric: ", Style::default().fg(app.theme.text_dim)),
                Span::styled(card.metric.clone(), Style::default().fg(app.theme.success)),
            ]),
        ];
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, cell);
    }
}
