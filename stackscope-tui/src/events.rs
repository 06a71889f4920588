//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;
use stackscope_core::{GenError, ValueCard};

#[derive(Debug)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    /// Outcome of a background generation call.
    Generated(Result<Vec<ValueCard>, GenError>),
}
