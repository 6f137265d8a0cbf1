//! Flame graph — one line per stack depth, frames drawn as blocks
//! sized by their share of the recording.

use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use perfscope_core::ViewHandle;

use crate::sample_data::Recording;
use crate::theme::Theme;

#[derive(Debug, Clone)]
struct Block {
    name: String,
    width_frac: f64,
    total_ms: f64,
}

#[derive(Default)]
struct State {
    /// Outer index = stack depth, innermost first.
    levels: Vec<Vec<Block>>,
    initialized: bool,
}

pub struct FlameGraphPanel {
    recording: Arc<Recording>,
    state: Mutex<State>,
}

impl FlameGraphPanel {
    pub fn new(recording: Arc<Recording>) -> Self {
        Self {
            recording,
            state: Mutex::new(State::default()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().map(|s| s.initialized).unwrap_or(false)
    }

    pub fn depth(&self) -> usize {
        self.state.lock().map(|s| s.levels.len()).unwrap_or(0)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let state = match self.state.lock() {
            Ok(state) => state,
            Err(_) => return,
        };
        if !state.initialized {
            f.render_widget(
                Paragraph::new("flame graph not initialized").style(theme.muted()),
                area,
            );
            return;
        }

        let width = area.width.max(1) as usize;
        let mut lines = Vec::with_capacity(state.levels.len());
        for (depth, level) in state.levels.iter().enumerate() {
            let mut spans = Vec::with_capacity(level.len());
            for block in level {
                let cells = ((block.width_frac * width as f64).round() as usize).max(1);
                spans.push(Span::styled(
                    fit_label(&block.name, cells),
                    theme.duration(block.total_ms),
                ));
                spans.push(Span::raw(" "));
            }
            let mut line = Line::from(spans);
            if depth % 2 == 1 {
                line = line.style(theme.secondary());
            }
            lines.push(line);
        }
        f.render_widget(Paragraph::new(lines), area);
    }
}

/// Pad or truncate `name` to exactly `cells` characters, bracketed so
/// adjacent frames stay distinguishable.
fn fit_label(name: &str, cells: usize) -> String {
    let inner = cells.saturating_sub(2);
    if inner == 0 {
        return "▪".to_string();
    }
    let mut label: String = name.chars().take(inner).collect();
    while label.chars().count() < inner {
        label.push('─');
    }
    format!("[{label}]")
}

impl ViewHandle for FlameGraphPanel {
    fn initialize(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            let duration = self.recording.duration_ms.max(f64::EPSILON);
            let max_depth = self
                .recording
                .frames
                .iter()
                .map(|f| f.depth)
                .max()
                .unwrap_or(0);

            let mut levels = vec![Vec::new(); max_depth + 1];
            for frame in &self.recording.frames {
                levels[frame.depth].push(Block {
                    name: frame.name.to_string(),
                    width_frac: frame.total_ms / duration,
                    total_ms: frame.total_ms,
                });
            }

            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow::anyhow!("flame graph state poisoned"))?;
            state.levels = levels;
            state.initialized = true;
            Ok(())
        })
    }

    fn destroy(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow::anyhow!("flame graph state poisoned"))?;
            state.levels.clear();
            state.initialized = false;
            Ok(())
        })
    }
}
