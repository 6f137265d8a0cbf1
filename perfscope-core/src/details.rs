//! The details-pane controller. Manages subviews and toggles
//! visibility between them.
//!
//! One logical actor (the host task) owns the controller; selection is
//! synchronous, lifecycle is sequential awaits in registry order.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;

use crate::bus::{DetailsEvent, EventBus};
use crate::deck::{PanelDeck, ToggleEvent, Toolbar, ToolbarButton};
use crate::error::DetailsError;
use crate::view::{ComponentRegistry, SharedView};

/// Subview shown after `initialize` unless the host overrides it.
pub const DEFAULT_SUBVIEW: &str = "waterfall";

/// Panel-switching controller: owns the deck and toolbar models, a
/// fixed registry of subviews, and the selection bus.
pub struct DetailsView {
    registry: ComponentRegistry,
    deck: PanelDeck,
    toolbar: Toolbar,
    bus: EventBus,
    default_view: String,
    wired: bool,
}

impl DetailsView {
    /// An explicit instance, constructed once by the host. Nothing
    /// happens until `initialize`.
    pub fn new(registry: ComponentRegistry, bus: EventBus) -> Self {
        Self {
            registry,
            deck: PanelDeck::new(),
            toolbar: Toolbar::new(),
            bus,
            default_view: DEFAULT_SUBVIEW.to_string(),
            wired: false,
        }
    }

    /// Override the subview selected at the end of `initialize`.
    pub fn set_default_view(&mut self, name: impl Into<String>) {
        self.default_view = name.into();
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn deck(&self) -> &PanelDeck {
        &self.deck
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// View-name backing the currently visible panel.
    pub fn selected_view_name(&self) -> Option<&str> {
        let selected = self.deck.selected_panel()?;
        self.registry
            .iter()
            .find(|(_, d)| d.panel_id == selected)
            .map(|(name, _)| name)
    }

    /// Populate the deck and toolbar from the registry, wire toggle
    /// routing, initialize each subview in registry order (each
    /// awaited to completion before the next begins), then select the
    /// default subview.
    ///
    /// The first subview failure propagates unmodified; subviews
    /// already initialized are not rolled back.
    pub async fn initialize(&mut self) -> anyhow::Result<()> {
        let entries: Vec<(String, String)> = self
            .registry
            .iter()
            .map(|(name, d)| (name.to_string(), d.panel_id.clone()))
            .collect();
        self.deck.clear();
        self.toolbar.clear();
        for (name, panel_id) in entries {
            self.deck.add_panel(panel_id);
            self.toolbar.push(ToolbarButton::with_view(name));
        }
        self.wired = true;

        for (name, descriptor) in self.registry.iter() {
            tracing::debug!(view = name, "initializing subview");
            descriptor.view.initialize().await?;
        }

        let default = self.default_view.clone();
        self.select_view(&default)?;
        Ok(())
    }

    /// Detach toggle routing, then tear each subview down in registry
    /// order. The first failure propagates; later subviews are left
    /// untouched.
    ///
    /// Calling `destroy` again, or before `initialize`, is a no-op.
    pub async fn destroy(&mut self) -> anyhow::Result<()> {
        if !self.wired {
            return Ok(());
        }
        self.wired = false;

        for (name, descriptor) in self.registry.iter() {
            tracing::debug!(view = name, "destroying subview");
            descriptor.view.destroy().await?;
        }
        Ok(())
    }

    /// Make `name`'s panel the visible one, re-check every toolbar
    /// button, and publish the selection.
    ///
    /// Re-selecting the current view re-applies the same state and
    /// publishes again; events are not deduplicated. An unknown name
    /// fails before any state is touched.
    pub fn select_view(&mut self, name: &str) -> Result<(), DetailsError> {
        let panel_id = self
            .registry
            .get(name)
            .ok_or_else(|| DetailsError::UnknownView(name.to_string()))?
            .panel_id
            .clone();
        self.deck.select(&panel_id)?;

        for button in self.toolbar.buttons_mut() {
            let checked = button.view_attr() == Some(name);
            button.set_checked(checked);
        }

        tracing::debug!(view = name, "details view selected");
        self.bus.emit(DetailsEvent::Selected(name.to_string()));
        Ok(())
    }

    /// True iff `view` backs the currently visible panel. Pure query.
    pub fn is_view_selected(&self, view: &SharedView) -> bool {
        let Some(selected_id) = self.deck.selected_panel() else {
            return false;
        };
        self.registry
            .iter()
            .any(|(_, d)| d.panel_id == selected_id && Arc::ptr_eq(&d.view, view))
    }

    /// Future resolving once `view` is the selected subview; resolves
    /// immediately if it already is.
    ///
    /// The future owns its bus subscription (taken at call time) and
    /// does not borrow the controller, so the host keeps driving
    /// `select_view` while waits are pending. Selection events naming
    /// other subviews are skipped and the wait continues; there is no
    /// timeout, so an abandoned wait stays pending — callers needing a
    /// bound wrap this in `tokio::time::timeout`.
    pub fn when_view_selected(
        &self,
        view: &SharedView,
    ) -> impl Future<Output = Result<(), DetailsError>> + Send + 'static {
        let already = self.is_view_selected(view);
        // The registry is fixed, so the target's names are stable for
        // the life of the wait.
        let names = self.registry.names_of(view);
        let mut rx = self.bus.subscribe();
        async move {
            if already {
                return Ok(());
            }
            loop {
                match rx.recv().await {
                    Ok(DetailsEvent::Selected(selected)) => {
                        if names.iter().any(|n| *n == selected) {
                            return Ok(());
                        }
                    }
                    // Missed events describe selections that have
                    // already been superseded; keep waiting.
                    Err(RecvError::Lagged(_)) => {}
                    Err(RecvError::Closed) => return Err(DetailsError::EventBusClosed),
                }
            }
        }
    }

    /// Toolbar button activation handler: routes the button's
    /// data-view attribute into `select_view`. Events arriving while
    /// unwired are dropped, like a click on a button whose listener
    /// was removed.
    pub fn on_view_toggle(&mut self, event: &ToggleEvent) -> Result<(), DetailsError> {
        if !self.wired {
            return Ok(());
        }
        self.select_view(event.view())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use futures::future::BoxFuture;
    use futures::FutureExt;

    use super::*;
    use crate::view::ViewHandle;

    /// Test subview recording lifecycle calls into a shared log.
    struct RecordingView {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        inits: AtomicUsize,
        destroys: AtomicUsize,
        fail_init: bool,
    }

    impl RecordingView {
        fn new(name: &'static str, log: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
            Arc::new(Self {
                name,
                log,
                inits: AtomicUsize::new(0),
                destroys: AtomicUsize::new(0),
                fail_init: false,
            })
        }

        fn failing(name: &'static str, log: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
            Arc::new(Self {
                name,
                log,
                inits: AtomicUsize::new(0),
                destroys: AtomicUsize::new(0),
                fail_init: true,
            })
        }
    }

    impl ViewHandle for RecordingView {
        fn initialize(&self) -> BoxFuture<'_, anyhow::Result<()>> {
            Box::pin(async move {
                if self.fail_init {
                    anyhow::bail!("{} refused to initialize", self.name);
                }
                self.inits.fetch_add(1, Ordering::SeqCst);
                self.log.lock().unwrap().push(format!("init {}", self.name));
                Ok(())
            })
        }

        fn destroy(&self) -> BoxFuture<'_, anyhow::Result<()>> {
            Box::pin(async move {
                self.destroys.fetch_add(1, Ordering::SeqCst);
                self.log.lock().unwrap().push(format!("destroy {}", self.name));
                Ok(())
            })
        }
    }

    struct Fixture {
        details: DetailsView,
        waterfall: Arc<RecordingView>,
        calltree: Arc<RecordingView>,
        flamegraph: Arc<RecordingView>,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Fixture {
        fn new() -> Self {
            let log = Arc::new(Mutex::new(Vec::new()));
            let waterfall = RecordingView::new("waterfall", log.clone());
            let calltree = RecordingView::new("calltree", log.clone());
            let flamegraph = RecordingView::new("flamegraph", log.clone());

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
                log,
            }
        }

        fn shared(&self, which: &str) -> SharedView {
            match which {
                "waterfall" => self.waterfall.clone() as SharedView,
                "calltree" => self.calltree.clone() as SharedView,
                _ => self.flamegraph.clone() as SharedView,
            }
        }
    }

    #[tokio::test]
    async fn initialize_selects_default_and_checks_one_button() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();

        assert_eq!(fx.details.selected_view_name(), Some("waterfall"));
        assert!(fx.details.is_view_selected(&fx.shared("waterfall")));
        assert_eq!(fx.details.toolbar().checked_count(), 1);
        let checked: Vec<_> = fx
            .details
            .toolbar()
            .buttons()
            .iter()
            .filter(|b| b.is_checked())
            .map(|b| b.view_attr().unwrap().to_string())
            .collect();
        assert_eq!(checked, vec!["waterfall".to_string()]);
    }

    #[tokio::test]
    async fn subviews_initialize_sequentially_in_registry_order() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();

        let log = fx.log.lock().unwrap().clone();
        assert_eq!(log, vec!["init waterfall", "init calltree", "init flamegraph"]);
    }

    #[tokio::test]
    async fn select_view_flips_all_queries() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();

        fx.details.select_view("calltree").unwrap();
        assert!(fx.details.is_view_selected(&fx.shared("calltree")));
        assert!(!fx.details.is_view_selected(&fx.shared("waterfall")));
        assert!(!fx.details.is_view_selected(&fx.shared("flamegraph")));
        assert_eq!(fx.details.selected_view_name(), Some("calltree"));
    }

    #[tokio::test]
    async fn reselecting_emits_again_without_dedup() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();

        let mut rx = fx.details.bus().subscribe();
        fx.details.select_view("flamegraph").unwrap();
        fx.details.select_view("flamegraph").unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            DetailsEvent::Selected("flamegraph".into())
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            DetailsEvent::Selected("flamegraph".into())
        );
        assert_eq!(fx.details.selected_view_name(), Some("flamegraph"));
    }

    #[tokio::test]
    async fn unknown_view_fails_without_touching_state() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();

        let err = fx.details.select_view("nonexistent").unwrap_err();
        assert!(matches!(err, DetailsError::UnknownView(name) if name == "nonexistent"));
        // Still on the default; no event was published for the failure.
        assert_eq!(fx.details.selected_view_name(), Some("waterfall"));
    }

    #[tokio::test]
    async fn when_view_selected_resolves_immediately_if_already_selected() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();

        // No event needs to fire for this to resolve.
        fx.details
            .when_view_selected(&fx.shared("waterfall"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn when_view_selected_skips_nonmatching_events() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();
        fx.details.select_view("calltree").unwrap();

        let mut wait = Box::pin(fx.details.when_view_selected(&fx.shared("waterfall")));
        assert!((&mut wait).now_or_never().is_none());

        // Two selections that still don't match: the wait stays
        // pending (the unbounded-wait contract).
        fx.details.select_view("flamegraph").unwrap();
        fx.details.select_view("calltree").unwrap();
        assert!((&mut wait).now_or_never().is_none());

        fx.details.select_view("waterfall").unwrap();
        assert!(matches!((&mut wait).now_or_never(), Some(Ok(()))));
    }

    #[tokio::test]
    async fn toggle_event_drives_selection() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();

        fx.details
            .on_view_toggle(&ToggleEvent::new("calltree"))
            .unwrap();
        assert_eq!(fx.details.selected_view_name(), Some("calltree"));
    }

    #[tokio::test]
    async fn toggle_events_are_dropped_after_destroy() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();
        fx.details.destroy().await.unwrap();

        fx.details
            .on_view_toggle(&ToggleEvent::new("calltree"))
            .unwrap();
        // The handler was detached; the selection did not move.
        assert_eq!(fx.details.selected_view_name(), Some("waterfall"));
    }

    #[tokio::test]
    async fn destroy_runs_in_registry_order_and_is_idempotent() {
        let mut fx = Fixture::new();
        fx.details.initialize().await.unwrap();
        fx.log.lock().unwrap().clear();

        fx.details.destroy().await.unwrap();
        let log = fx.log.lock().unwrap().clone();
        assert_eq!(
            log,
            vec!["destroy waterfall", "destroy calltree", "destroy flamegraph"]
        );

        // Second destroy (and destroy-before-initialize) is a no-op.
        fx.details.destroy().await.unwrap();
        assert_eq!(fx.waterfall.destroys.load(Ordering::SeqCst), 1);

        let mut fresh = Fixture::new();
        fresh.details.destroy().await.unwrap();
        assert_eq!(fresh.waterfall.destroys.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn first_init_failure_stops_the_sequence() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let waterfall = RecordingView::new("waterfall", log.clone());
        let calltree = RecordingView::failing("calltree", log.clone());
        let flamegraph = RecordingView::new("flamegraph", log.clone());

        let registry = ComponentRegistry::new()
            .with_view("waterfall", "waterfall-view", waterfall.clone() as SharedView)
            .with_view("calltree", "calltree-view", calltree.clone() as SharedView)
            .with_view(
                "flamegraph",
                "flamegraph-view",
                flamegraph.clone() as SharedView,
            );
        let mut details = DetailsView::new(registry, EventBus::new());

        let err = details.initialize().await.unwrap_err();
        assert!(err.to_string().contains("calltree refused to initialize"));
        // Waterfall came up, flamegraph was never reached, and no
        // rollback happened.
        assert_eq!(waterfall.inits.load(Ordering::SeqCst), 1);
        assert_eq!(flamegraph.inits.load(Ordering::SeqCst), 0);
        assert_eq!(waterfall.destroys.load(Ordering::SeqCst), 0);
        // The default was never selected.
        assert_eq!(details.selected_view_name(), None);
    }
}
