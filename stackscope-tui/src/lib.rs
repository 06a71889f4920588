//! Stackscope TUI library exports.

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod nav;
pub mod notifications;
pub mod state;
pub mod theme;
pub mod views;
