//! Call tree — flattened frame table with self/total times and the
//! share of the recording each frame accounts for.

use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use perfscope_core::ViewHandle;

use crate::sample_data::Recording;
use crate::theme::Theme;

#[derive(Debug, Clone)]
struct TreeRow {
    /// Frame name, pre-indented by depth.
    label: String,
    self_ms: f64,
    total_ms: f64,
    total_pct: f64,
}

#[derive(Default)]
struct State {
    rows: Vec<TreeRow>,
    initialized: bool,
}

pub struct CallTreePanel {
    recording: Arc<Recording>,
    state: Mutex<State>,
}

impl CallTreePanel {
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
                Paragraph::new("call tree not initialized").style(theme.muted()),
                area,
            );
            return;
        }

        let header = Row::new(vec![
            Cell::from("Function").style(theme.panel_title()),
            Cell::from("Self").style(theme.panel_title()),
            Cell::from("Total").style(theme.panel_title()),
            Cell::from("Total %").style(theme.panel_title()),
        ]);

        let rows = state.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.label.clone()).style(theme.text()),
                Cell::from(format!("{:>8.1}ms", row.self_ms)).style(theme.duration(row.self_ms)),
                Cell::from(format!("{:>8.1}ms", row.total_ms)).style(theme.secondary()),
                Cell::from(format!("{:>6.1}%", row.total_pct)).style(theme.secondary()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .column_spacing(1);

        f.render_widget(table, area);
    }
}

impl ViewHandle for CallTreePanel {
    fn initialize(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            let duration = self.recording.duration_ms.max(f64::EPSILON);
            let rows = self
                .recording
                .frames
                .iter()
                .map(|frame| TreeRow {
                    label: format!("{}{}", "  ".repeat(frame.depth), frame.name),
                    self_ms: frame.self_ms,
                    total_ms: frame.total_ms,
                    total_pct: frame.total_ms / duration * 100.0,
                })
                .collect();

            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow::anyhow!("call tree state poisoned"))?;
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
                .map_err(|_| anyhow::anyhow!("call tree state poisoned"))?;
            state.rows.clear();
            state.initialized = false;
            Ok(())
        })
    }
}
