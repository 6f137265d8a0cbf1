//! Synthetic recording fed to the demo subviews.
//!
//! Shaped like a short page-load profile: layout/paint markers on the
//! timeline, a small JS call tree underneath.

use std::sync::Arc;

/// One timeline marker (waterfall row).
#[derive(Debug, Clone)]
pub struct Marker {
    pub name: &'static str,
    pub start_ms: f64,
    pub end_ms: f64,
}

impl Marker {
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

/// One call-tree frame, pre-flattened in depth-first order.
#[derive(Debug, Clone)]
pub struct FrameNode {
    pub name: &'static str,
    pub depth: usize,
    pub self_ms: f64,
    pub total_ms: f64,
}

/// A captured profile: fixed duration, markers, frames.
#[derive(Debug, Clone)]
pub struct Recording {
    pub duration_ms: f64,
    pub markers: Vec<Marker>,
    pub frames: Vec<FrameNode>,
}

/// A ~320ms synthetic page-load recording.
pub fn sample_recording() -> Arc<Recording> {
    let markers = vec![
        Marker { name: "DOMEvent (load)", start_ms: 2.0, end_ms: 6.5 },
        Marker { name: "Scripts", start_ms: 6.5, end_ms: 118.0 },
        Marker { name: "GC (nursery)", start_ms: 54.0, end_ms: 61.5 },
        Marker { name: "Styles", start_ms: 120.0, end_ms: 141.0 },
        Marker { name: "Reflow", start_ms: 142.0, end_ms: 198.5 },
        Marker { name: "Paint", start_ms: 200.0, end_ms: 236.0 },
        Marker { name: "Composite", start_ms: 236.0, end_ms: 244.5 },
        Marker { name: "DOMEvent (scroll)", start_ms: 250.0, end_ms: 252.0 },
        Marker { name: "Scripts", start_ms: 252.0, end_ms: 286.0 },
        Marker { name: "GC (full)", start_ms: 288.0, end_ms: 312.0 },
    ];

    let frames = vec![
        FrameNode { name: "(root)", depth: 0, self_ms: 4.0, total_ms: 320.0 },
        FrameNode { name: "onLoad", depth: 1, self_ms: 8.5, total_ms: 112.0 },
        FrameNode { name: "fetchData", depth: 2, self_ms: 21.0, total_ms: 46.5 },
        FrameNode { name: "parseJson", depth: 3, self_ms: 25.5, total_ms: 25.5 },
        FrameNode { name: "renderList", depth: 2, self_ms: 12.0, total_ms: 57.0 },
        FrameNode { name: "buildRow", depth: 3, self_ms: 31.0, total_ms: 45.0 },
        FrameNode { name: "formatCell", depth: 4, self_ms: 14.0, total_ms: 14.0 },
        FrameNode { name: "onScroll", depth: 1, self_ms: 6.0, total_ms: 34.0 },
        FrameNode { name: "updateViewport", depth: 2, self_ms: 28.0, total_ms: 28.0 },
        FrameNode { name: "requestAnimationFrame", depth: 1, self_ms: 3.5, total_ms: 19.0 },
        FrameNode { name: "drawOverlay", depth: 2, self_ms: 15.5, total_ms: 15.5 },
    ];

    Arc::new(Recording {
        duration_ms: 320.0,
        markers,
        frames,
    })
}
