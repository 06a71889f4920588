//! Midnight theme and per-layer accent colors.

use ratatui::style::Color;
use stackscope_core::LayerId;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub panel: Color,
    pub highlight: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            bg: Color::Rgb(15, 23, 42),
            panel: Color::Rgb(30, 41, 59),
            highlight: Color::Rgb(51, 65, 85),
            primary: Color::Rgb(96, 165, 250),
            accent: Color::Rgb(129, 140, 248),
            success: Color::Rgb(52, 211, 153),
            warning: Color::Rgb(251, 191, 36),
            error: Color::Rgb(248, 113, 113),
            text: Color::Rgb(241, 245, 249),
            text_dim: Color::Rgb(148, 163, 184),
            border: Color::Rgb(71, 85, 105),
            border_focus: Color::Rgb(96, 165, 250),
        }
    }
}

/// Each layer carries its own badge color on the home stack and breakout
/// pages.
pub fn layer_color(id: LayerId) -> Color {
    match id {
        LayerId::Ui => Color::Rgb(59, 130, 246),
        LayerId::Embedding => Color::Rgb(16, 185, 129),
        LayerId::Rag => Color::Rgb(245, 158, 11),
        LayerId::Dialogue => Color::Rgb(168, 85, 247),
        LayerId::Llm => Color::Rgb(99, 102, 241),
        LayerId::Output => Color::Rgb(244, 63, 94),
    }
}
