//! Panel-switching controller for a profiler details pane.
//!
//! Three sibling subviews (waterfall, call tree, flame graph) share a
//! panel deck that shows exactly one of them at a time. [`DetailsView`]
//! sequences their async init/teardown, routes toolbar toggles into
//! selection changes, and publishes every selection on a typed
//! broadcast bus.
//!
//! The toolkit surfaces are modeled here ([`PanelDeck`], [`Toolbar`]);
//! subviews stay opaque behind [`ViewHandle`].

pub mod bus;
pub mod deck;
pub mod details;
pub mod error;
pub mod view;

pub use bus::{DetailsEvent, EventBus};
pub use deck::{PanelDeck, ToggleEvent, Toolbar, ToolbarButton};
pub use details::{DetailsView, DEFAULT_SUBVIEW};
pub use error::DetailsError;
pub use view::{ComponentRegistry, SharedView, ViewDescriptor, ViewHandle};
