//! View rendering dispatch.

pub mod business;
pub mod diagram;
pub mod home;
pub mod layer;
pub mod resource;

use crate::nav::NavTarget;
use crate::notifications::NotificationLevel;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.view.target {
        NavTarget::Home => home::render(f, app, layout[1]),
        NavTarget::BusinessValue => business::render(f, app, layout[1]),
        NavTarget::ExplodedDiagram => diagram::render(f, app, layout[1]),
        NavTarget::Layer(id) => layer::render(f, app, id, layout[1]),
        NavTarget::Resource(id) => resource::render(f, app, id, layout[1]),
    }

    render_footer(f, app, layout[2]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let breadcrumb = match app.view.target {
        NavTarget::Home => "Home".to_string(),
        other => format!("Home > {}", other.title()),
    };
    let title = format!("STACKSCOPE | {}", breadcrumb);
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.view.target {
        NavTarget::Home if app.view.popup_visible => {
            "Enter open layer • Esc dismiss • Tab switch page • q quit"
        }
        NavTarget::Home => "j/k hover layer • Enter pin • Tab switch page • q quit",
        NavTarget::BusinessValue if app.input_focused => {
            "type subject • Enter generate • Esc unfocus"
        }
        NavTarget::BusinessValue => "i edit subject • Enter generate • o home • q quit",
        _ => "Tab/Shift-Tab switch page • o home • Esc back • q quit",
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.primary,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (format!("{}: {}", label, note.message), Style::default().fg(color))
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
