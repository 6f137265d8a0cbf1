//! The three details subviews.
//!
//! Each implements `ViewHandle` (async lifecycle driven by the
//! controller) plus a synchronous `render` the UI layer calls when the
//! subview's panel is the visible one. Derived display state is built
//! in `initialize` and dropped in `destroy`, behind a mutex so the
//! host can hold render handles while the registry drives lifecycle.

pub mod calltree;
pub mod flamegraph;
pub mod waterfall;

pub use calltree::CallTreePanel;
pub use flamegraph::FlameGraphPanel;
pub use waterfall::WaterfallPanel;
