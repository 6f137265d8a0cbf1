//! perfscope TUI — terminal host for the profiler details pane.
//!
//! Three subviews share the pane:
//! - Waterfall — timeline markers with positioned duration bars
//! - Call Tree — flattened frame table with self/total times
//! - Flame Graph — depth-stacked blocks sized by total time
//!
//! `perfscope-core` owns the switching logic; this crate supplies the
//! concrete panels, keyboard wiring, and rendering.

pub mod app;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::App;
pub use input::handle_key_event;
pub use theme::Theme;
