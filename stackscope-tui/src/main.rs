//! Stackscope TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use stackscope_gen::GenerationClient;
use stackscope_tui::config::TuiConfig;
use stackscope_tui::error::TuiError;
use stackscope_tui::events::TuiEvent;
use stackscope_tui::keys::{map_key, Action};
use stackscope_tui::nav::NavTarget;
use stackscope_tui::notifications::NotificationLevel;
use stackscope_tui::state::{App, ViewEvent};
use stackscope_tui::views::render_view;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let client = Arc::new(GenerationClient::new(&config.gen_settings())?);
    let mut app = App::new(config, client);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event, &event_tx) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if app.input_focused {
                handle_input_key(app, key.code, sender);
            } else if let Some(action) = map_key(key) {
                return handle_action(app, action, sender);
            }
        }
        TuiEvent::Generated(result) => {
            app.apply_generation(result);
        }
        TuiEvent::Tick => {
            app.on_tick();
        }
        TuiEvent::Resize { .. } => {}
    }
    false
}

/// Text-entry mode for the subject field on the business-value page.
fn handle_input_key(app: &mut App, code: KeyCode, sender: &mpsc::Sender<TuiEvent>) {
    match code {
        KeyCode::Esc => app.input_focused = false,
        KeyCode::Enter => {
            app.input_focused = false;
            submit_generation(app, sender);
        }
        KeyCode::Backspace => {
            app.subject_input.pop();
        }
        KeyCode::Char(c) => app.subject_input.push(c),
        _ => {}
    }
}

fn handle_action(app: &mut App, action: Action, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextPage => {
            app.view.apply(ViewEvent::Navigate(app.view.target.next()));
        }
        Action::PrevPage => {
            app.view.apply(ViewEvent::Navigate(app.view.target.previous()));
        }
        Action::SwitchPage(index) => {
            if let Some(target) = NavTarget::from_index(index) {
                app.view.apply(ViewEvent::Navigate(target));
            }
        }
        Action::MoveDown => {
            if app.view.target == NavTarget::Home {
                app.hover_next();
            }
        }
        Action::MoveUp => {
            if app.view.target == NavTarget::Home {
                app.hover_previous();
            }
        }
        Action::Confirm => match app.view.target {
            NavTarget::Home => app.click_selected(),
            NavTarget::BusinessValue => submit_generation(app, sender),
            _ => {}
        },
        Action::Cancel => {
            if app.view.popup_visible {
                app.view.apply(ViewEvent::DismissPopup);
            } else if app.view.target != NavTarget::Home {
                app.view.apply(ViewEvent::Navigate(NavTarget::Home));
            }
        }
        Action::FocusInput => {
            if app.view.target == NavTarget::BusinessValue {
                app.input_focused = true;
            }
        }
        Action::GoHome => {
            app.view.apply(ViewEvent::Navigate(NavTarget::Home));
        }
    }
    false
}

/// Kick off a background generation for the current subject. Duplicate
/// submissions while one is running are rejected up front so the attempt
/// counter never starts for them.
fn submit_generation(app: &mut App, sender: &mpsc::Sender<TuiEvent>) {
    let subject = app.subject_input.trim().to_string();
    if subject.is_empty() {
        app.notify(NotificationLevel::Warning, "Enter a business or industry first.");
        return;
    }
    if app.client.is_in_flight() {
        app.notify(NotificationLevel::Warning, "A generation is already running.");
        return;
    }
    app.generating = true;
    let client = Arc::clone(&app.client);
    let sender = sender.clone();
    tokio::spawn(async move {
        let result = client.generate(&subject).await;
        let _ = sender.send(TuiEvent::Generated(result)).await;
    });
}
