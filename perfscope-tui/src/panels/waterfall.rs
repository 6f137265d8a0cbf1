//! Markers waterfall — one row per timeline marker, bar positioned on
//! the recording timeline.

use std::sync::{Arc, Mutex};

use anyhow::Context;
use futures::future::BoxFuture;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use perfscope_core::ViewHandle;

use crate::sample_data::Recording;
use crate::theme::Theme;

/// Widest marker label kept before truncation.
const LABEL_WIDTH: usize = 18;

#[derive(Debug, Clone)]
struct WaterfallRow {
    label: String,
    duration_ms: f64,
    /// Fractions of the recording duration, for bar placement.
    start_frac: f64,
    width_frac: f64,
}

#[derive(Default)]
struct State {
    rows: Vec<WaterfallRow>,
    initialized: bool,
}

pub struct WaterfallPanel {
    recording: Arc<Recording>,
    state: Mutex<State>,
}

impl WaterfallPanel {
    pub fn new(recording: Arc<Recording>) -> Self {
        Self {
            recording,
            state: Mutex::new(State::default()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().map(|s| s.initialized).unwrap_or(false)
    }

    pub fn row_count(&self) -> usize {
        self.state.lock().map(|s| s.rows.len()).unwrap_or(0)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let state = match self.state.lock() {
            Ok(state) => state,
            Err(_) => return,
        };
        if !state.initialized {
            f.render_widget(
                Paragraph::new("waterfall not initialized").style(theme.muted()),
                area,
            );
            return;
        }

        let track_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 11).max(8);
        let mut lines = Vec::with_capacity(state.rows.len());
        for row in state.rows.iter().take(area.height as usize) {
            let offset = (row.start_frac * track_width as f64).round() as usize;
            let bar = ((row.width_frac * track_width as f64).round() as usize).max(1);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<LABEL_WIDTH$}", truncate(&row.label, LABEL_WIDTH)),
                    theme.text(),
                ),
                Span::styled(format!("{:>7.1}ms ", row.duration_ms), theme.duration(row.duration_ms)),
                Span::raw(" ".repeat(offset.min(track_width.saturating_sub(1)))),
                Span::styled("▇".repeat(bar.min(track_width - offset.min(track_width - 1))), theme.duration(row.duration_ms)),
            ]));
        }
        f.render_widget(Paragraph::new(lines), area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

impl ViewHandle for WaterfallPanel {
    fn initialize(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            let duration = self.recording.duration_ms.max(f64::EPSILON);
            let rows = self
                .recording
                .markers
                .iter()
                .map(|m| WaterfallRow {
                    label: m.name.to_string(),
                    duration_ms: m.duration_ms(),
                    start_frac: m.start_ms / duration,
                    width_frac: m.duration_ms() / duration,
                })
                .collect();

            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow::anyhow!("waterfall state poisoned"))
                .context("initializing waterfall")?;
            state.rows = rows;
            state.initialized = true;
            Ok(())
        })
    }

    fn destroy(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow::anyhow!("waterfall state poisoned"))?;
            state.rows.clear();
            state.initialized = false;
            Ok(())
        })
    }
}
