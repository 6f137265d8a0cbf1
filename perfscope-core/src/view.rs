//! Subview handles and the component registry.

use std::sync::Arc;

use futures::future::BoxFuture;

/// Capability exposed by each subview. The controller never looks
/// inside a subview; it only sequences these two calls.
///
/// Methods take `&self` so the host can keep its own handles to the
/// same object while the registry drives lifecycle; implementations
/// use interior mutability for whatever state setup builds.
pub trait ViewHandle: Send + Sync {
    /// Prepare the subview for display. Awaited to completion before
    /// the next registry entry starts initializing.
    fn initialize(&self) -> BoxFuture<'_, anyhow::Result<()>>;

    /// Tear the subview down.
    fn destroy(&self) -> BoxFuture<'_, anyhow::Result<()>>;
}

/// Shared reference to a subview. Selection queries compare identity
/// (`Arc::ptr_eq`), not contents.
pub type SharedView = Arc<dyn ViewHandle>;

/// Panel element id plus the subview shown in that panel.
#[derive(Clone)]
pub struct ViewDescriptor {
    pub panel_id: String,
    pub view: SharedView,
}

/// Ordered view-name → descriptor mapping. Built once at startup and
/// never mutated afterwards; iteration order is insertion order and
/// drives init/teardown sequencing.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    entries: Vec<(String, ViewDescriptor)>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subview under `name`, shown in the panel `panel_id`.
    pub fn with_view(
        mut self,
        name: impl Into<String>,
        panel_id: impl Into<String>,
        view: SharedView,
    ) -> Self {
        self.entries.push((
            name.into(),
            ViewDescriptor {
                panel_id: panel_id.into(),
                view,
            },
        ));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ViewDescriptor> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViewDescriptor)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Registered names, in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Names registered for a given view object (usually one).
    pub fn names_of(&self, view: &SharedView) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, d)| Arc::ptr_eq(&d.view, view))
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
