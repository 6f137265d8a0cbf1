//! Selection invariants across arbitrary toggle sequences.
//!
//! Uses proptest to verify:
//! 1. Checked-state exclusivity — after any select_view, exactly one
//!    toolbar button is checked
//! 2. Query consistency — is_view_selected matches exactly the last
//!    selected entry
//! 3. Event fidelity — one Selected event per select_view call, in
//!    call order, with no deduplication

use std::sync::Arc;

use futures::future::BoxFuture;
use proptest::prelude::*;
use tokio::runtime::Builder;

use perfscope_core::{
    ComponentRegistry, DetailsEvent, DetailsView, EventBus, SharedView, ViewHandle,
};

const VIEW_NAMES: [&str; 3] = ["waterfall", "calltree", "flamegraph"];

struct StubView;

impl ViewHandle for StubView {
    fn initialize(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async { Ok(()) })
    }

    fn destroy(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async { Ok(()) })
    }
}

fn build_details() -> (DetailsView, Vec<SharedView>) {
    let views: Vec<SharedView> = VIEW_NAMES.iter().map(|_| Arc::new(StubView) as SharedView).collect();
    let mut registry = ComponentRegistry::new();
    for (name, view) in VIEW_NAMES.iter().zip(&views) {
        registry = registry.with_view(*name, format!("{name}-view"), view.clone());
    }
    (DetailsView::new(registry, EventBus::new()), views)
}

fn arb_selection_sequence() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..VIEW_NAMES.len(), 1..24)
}

proptest! {
    /// After every select_view in an arbitrary sequence, exactly one
    /// button is checked and it names the selected view.
    #[test]
    fn checked_state_stays_mutually_exclusive(seq in arb_selection_sequence()) {
        let rt = Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let (mut details, _views) = build_details();
            details.initialize().await.unwrap();

            for &i in &seq {
                details.select_view(VIEW_NAMES[i]).unwrap();
                prop_assert_eq!(details.toolbar().checked_count(), 1);
                let checked = details
                    .toolbar()
                    .buttons()
                    .iter()
                    .find(|b| b.is_checked())
                    .and_then(|b| b.view_attr());
                prop_assert_eq!(checked, Some(VIEW_NAMES[i]));
            }
            Ok(())
        })?;
    }

    /// is_view_selected is true for exactly the last-selected entry.
    #[test]
    fn queries_track_last_selection(seq in arb_selection_sequence()) {
        let rt = Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let (mut details, views) = build_details();
            details.initialize().await.unwrap();

            for &i in &seq {
                details.select_view(VIEW_NAMES[i]).unwrap();
                for (j, view) in views.iter().enumerate() {
                    prop_assert_eq!(details.is_view_selected(view), i == j);
                }
            }
            Ok(())
        })?;
    }

    /// Every select_view publishes one event, in call order.
    #[test]
    fn events_mirror_the_call_sequence(seq in arb_selection_sequence()) {
        let rt = Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let (mut details, _views) = build_details();
            details.initialize().await.unwrap();

            let mut rx = details.bus().subscribe();
            for &i in &seq {
                details.select_view(VIEW_NAMES[i]).unwrap();
            }
            for &i in &seq {
                let event = rx.try_recv().unwrap();
                prop_assert_eq!(event, DetailsEvent::Selected(VIEW_NAMES[i].to_string()));
            }
            prop_assert!(rx.try_recv().is_err());
            Ok(())
        })?;
    }
}
