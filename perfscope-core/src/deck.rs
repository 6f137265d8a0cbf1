//! Models of the two toolkit surfaces the controller drives: the panel
//! deck (shows exactly one child at a time) and the view-toggle
//! toolbar.

use crate::error::DetailsError;

/// Container widget that shows exactly one child panel at a time.
#[derive(Debug, Clone, Default)]
pub struct PanelDeck {
    panels: Vec<String>,
    selected: Option<usize>,
}

impl PanelDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_panel(&mut self, id: impl Into<String>) {
        self.panels.push(id.into());
    }

    pub(crate) fn clear(&mut self) {
        self.panels.clear();
        self.selected = None;
    }

    /// Make the panel with `id` the visible one.
    pub(crate) fn select(&mut self, id: &str) -> Result<(), DetailsError> {
        let idx = self
            .panels
            .iter()
            .position(|p| p == id)
            .ok_or_else(|| DetailsError::UnknownPanel(id.to_string()))?;
        self.selected = Some(idx);
        Ok(())
    }

    /// Id of the currently visible panel, if any panel has been
    /// selected since the deck was populated.
    pub fn selected_panel(&self) -> Option<&str> {
        self.selected.map(|i| self.panels[i].as_str())
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

/// One toolbar control. `view` is the data-view attribute binding the
/// button to the subview it activates; buttons without it are ignored
/// by selection.
#[derive(Debug, Clone)]
pub struct ToolbarButton {
    label: String,
    view: Option<String>,
    checked: bool,
}

impl ToolbarButton {
    /// Button bound to a subview; the label defaults to the view-name.
    pub fn with_view(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            view: Some(name),
            checked: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn view_attr(&self) -> Option<&str> {
        self.view.as_deref()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

/// The row of view-toggle buttons above the details pane.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    buttons: Vec<ToolbarButton>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, button: ToolbarButton) {
        self.buttons.push(button);
    }

    pub(crate) fn clear(&mut self) {
        self.buttons.clear();
    }

    pub fn buttons(&self) -> &[ToolbarButton] {
        &self.buttons
    }

    pub(crate) fn buttons_mut(&mut self) -> impl Iterator<Item = &mut ToolbarButton> {
        self.buttons.iter_mut()
    }

    /// How many buttons are currently checked.
    pub fn checked_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.is_checked()).count()
    }
}

/// Toolbar button activation, carrying the button's data-view
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEvent {
    view: String,
}

impl ToggleEvent {
    pub fn new(view: impl Into<String>) -> Self {
        Self { view: view.into() }
    }

    pub fn view(&self) -> &str {
        &self.view
    }
}
