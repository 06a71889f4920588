//! Keybinding definitions for the TUI.
//!
//! Text entry for the subject field is handled by the input branch in main,
//! not here; this map covers navigation mode only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    SwitchPage(usize),
    MoveUp,
    MoveDown,
    /// Activate the hovered/pinned layer (a click).
    Confirm,
    /// Dismiss the popup, or back out to the overview.
    Cancel,
    /// Focus the subject input on the business-value page.
    FocusInput,
    GoHome,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('i') => Some(Action::FocusInput),
        KeyCode::Char('o') | KeyCode::Home => Some(Action::GoHome),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextPage),
        KeyCode::BackTab => Some(Action::PrevPage),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let idx = c.to_digit(10).map(|d| d as usize)?;
            // '1' is the first page; '0' reaches the tenth.
            Some(Action::SwitchPage(if idx == 0 { 9 } else { idx - 1 }))
        }
        _ => None,
    }
}
