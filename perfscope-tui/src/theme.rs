//! Color tokens for the perfscope TUI.
//!
//! Dark profiler palette: charcoal background, cyan accents, warm
//! colors reserved for long-running work.

use ratatui::style::{Color, Modifier, Style};

/// Shared palette passed to every render call.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal background
    pub background: Color,
    /// Electric cyan (focus, selected tab)
    pub accent: Color,
    /// Neon green (fast, below-budget durations)
    pub positive: Color,
    /// Hot pink (slow, over-budget durations)
    pub negative: Color,
    /// Orange (warnings, GC markers)
    pub warning: Color,
    /// Cool purple (secondary info)
    pub neutral: Color,
    /// Steel blue (muted text, unselected tabs)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::Rgb(240, 240, 240),
            text_secondary: Color::Rgb(170, 170, 175),
        }
    }
}

impl Theme {
    /// Style for a toolbar tab; checked tabs get the accent.
    pub fn tab(&self, checked: bool) -> Style {
        if checked {
            Style::default()
                .fg(self.background)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Color a duration against a rough frame budget.
    pub fn duration(&self, ms: f64) -> Style {
        if ms >= 50.0 {
            Style::default().fg(self.negative)
        } else if ms >= 16.0 {
            Style::default().fg(self.warning)
        } else {
            Style::default().fg(self.positive)
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}
