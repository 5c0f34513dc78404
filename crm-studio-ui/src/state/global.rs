//! Global Application State
//!
//! Reactive state management using Leptos signals. The selection itself is
//! a plain `SelectionState` value; every input event replaces it with the
//! value returned by a pure transition, and the sidebar list and view model
//! are memos derived from it.

use leptos::*;

use crm_studio::kpi::{catalog, IntegrationDescriptor, KpiStore};
use crm_studio::state::SelectionState;
use crm_studio::view::{compose, ViewModel};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Search query + active integration
    pub selection: RwSignal<SelectionState>,
    /// Id of the active integration
    pub active_id: Memo<&'static str>,
    /// Sidebar entries matching the query
    pub visible: Memo<Vec<IntegrationDescriptor>>,
    /// View model for the active integration
    pub view: Memo<ViewModel>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let selection = create_rw_signal(SelectionState::default());
    let store = store_value(KpiStore::seeded());

    let active_id = create_memo(move |_| selection.with(|s| s.active_id()));
    let visible = create_memo(move |_| selection.with(|s| s.visible(catalog())));
    // Depends on the active id only, so typing in the search box does not recompose
    let view = create_memo(move |_| {
        let id = active_id.get();
        store.with_value(|store| compose(id, store))
    });

    provide_context(GlobalState {
        selection,
        active_id,
        visible,
        view,
    });
}

impl GlobalState {
    /// Current search text
    pub fn query(&self) -> String {
        self.selection.with(|s| s.query().to_string())
    }

    /// Descriptor of the active integration
    pub fn active(&self) -> Option<IntegrationDescriptor> {
        self.selection.with(|s| s.active(catalog()))
    }

    /// Replace the search text
    pub fn set_query(&self, query: String) {
        self.selection.update(|s| *s = s.set_query(query));
    }

    /// Activate an integration from the sidebar
    pub fn select_integration(&self, id: &str) {
        match self
            .selection
            .with_untracked(|s| s.select_integration(catalog(), id))
        {
            Ok(next) => self.selection.set(next),
            Err(e) => web_sys::console::error_1(&e.to_string().into()),
        }
    }
}
