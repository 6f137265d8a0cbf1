//! App state persistence — remembers the selected view across runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use perfscope_core::DEFAULT_SUBVIEW;

use crate::app::App;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub selected_view: String,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            selected_view: DEFAULT_SUBVIEW.to_string(),
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is
/// missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &App) -> PersistedState {
    PersistedState {
        selected_view: app
            .details
            .selected_view_name()
            .unwrap_or(DEFAULT_SUBVIEW)
            .to_string(),
    }
}

/// Apply persisted state: the saved view becomes the startup default.
/// Must run before `initialize`.
pub fn apply(app: &mut App, state: PersistedState) {
    app.details.set_default_view(state.selected_view);
}
