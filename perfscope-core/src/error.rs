use thiserror::Error;

/// Errors surfaced by the details-pane controller.
#[derive(Error, Debug)]
pub enum DetailsError {
    /// A view-name with no registry entry.
    #[error("unknown view '{0}'")]
    UnknownView(String),

    /// A panel id the deck does not contain.
    #[error("unknown panel '{0}'")]
    UnknownPanel(String),

    /// The selection bus shut down while a wait was pending.
    #[error("selection event bus closed")]
    EventBusClosed,
}
