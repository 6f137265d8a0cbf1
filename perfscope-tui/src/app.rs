//! Host state — single owner of the controller and the view handles.

use std::sync::Arc;

use chrono::NaiveDateTime;

use perfscope_core::{
    ComponentRegistry, DetailsView, EventBus, SharedView, ToggleEvent,
};

use crate::panels::{CallTreePanel, FlameGraphPanel, WaterfallPanel};
use crate::sample_data::Recording;
use crate::theme::Theme;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the status history.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub context: String,
}

pub struct App {
    pub details: DetailsView,
    pub waterfall: Arc<WaterfallPanel>,
    pub calltree: Arc<CallTreePanel>,
    pub flamegraph: Arc<FlameGraphPanel>,
    pub theme: Theme,
    pub status_message: Option<(String, StatusLevel)>,
    pub errors: Vec<ErrorRecord>,
    pub running: bool,
}

impl App {
    /// Build the registry and controller around one recording. The
    /// app keeps concrete handles to the panels for rendering; the
    /// registry holds the same objects as `SharedView`s.
    pub fn new(recording: Arc<Recording>) -> Self {
        let waterfall = Arc::new(WaterfallPanel::new(recording.clone()));
        let calltree = Arc::new(CallTreePanel::new(recording.clone()));
        let flamegraph = Arc::new(FlameGraphPanel::new(recording));

        let registry = ComponentRegistry::new()
            .with_view("waterfall", "waterfall-view", waterfall.clone() as SharedView)
            .with_view("calltree", "calltree-view", calltree.clone() as SharedView)
            .with_view(
                "flamegraph",
                "flamegraph-view",
                flamegraph.clone() as SharedView,
            );

        Self {
            details: DetailsView::new(registry, EventBus::new()),
            waterfall,
            calltree,
            flamegraph,
            theme: Theme::default(),
            status_message: None,
            errors: Vec::new(),
            running: true,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Warning));
    }

    pub fn push_error(&mut self, message: impl Into<String>, context: impl Into<String>) {
        let message = message.into();
        self.status_message = Some((message.clone(), StatusLevel::Error));
        self.errors.push(ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message,
            context: context.into(),
        });
    }

    /// Route a toolbar toggle for `name` through the controller.
    pub fn select(&mut self, name: &str) {
        if let Err(err) = self.details.on_view_toggle(&ToggleEvent::new(name)) {
            self.push_error(err.to_string(), format!("selecting '{name}'"));
        } else {
            self.set_status(format!("{name} view"));
        }
    }

    /// Cycle to the next view in registry order.
    pub fn select_next(&mut self) {
        self.cycle(1);
    }

    /// Cycle to the previous view in registry order.
    pub fn select_prev(&mut self) {
        self.cycle(-1);
    }

    fn cycle(&mut self, step: isize) {
        let names: Vec<String> = self
            .details
            .registry()
            .names()
            .into_iter()
            .map(String::from)
            .collect();
        if names.is_empty() {
            return;
        }
        let current = self
            .details
            .selected_view_name()
            .and_then(|name| names.iter().position(|n| n == name))
            .unwrap_or(0);
        let len = names.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.select(&names[next]);
    }
}
