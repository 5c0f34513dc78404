//! Selection state
//!
//! The dashboard's only mutable state is the sidebar search query and the
//! active integration. Both live in [`SelectionState`], an immutable value:
//! each transition takes the current state and returns the next one, so
//! the same sequence of events always yields the same state.
//!
//! ```text
//! SetQuery(q)  : (_, id)  → (q, id)
//! Select(id')  : (q, _)   → (q, id')      id' must be in the catalog
//! ```

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};
use crate::kpi::{catalog, IntegrationDescriptor, KpiStore};
use crate::view::{compose, filter_integrations, ViewModel};

/// A user input that changes the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Search text edited
    SetQuery(String),
    /// Integration clicked in the sidebar
    Select(String),
}

/// Current search query and active integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    query: String,
    active_id: &'static str,
}

impl SelectionState {
    /// Empty query, first catalog entry active
    pub fn initial(catalog: &[IntegrationDescriptor]) -> DashboardResult<Self> {
        let active_id = catalog::default_id(catalog).ok_or(DashboardError::EmptyCatalog)?;
        Ok(Self {
            query: String::new(),
            active_id,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_id(&self) -> &'static str {
        self.active_id
    }

    /// Replace the query; the active integration is kept
    pub fn set_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            active_id: self.active_id,
        }
    }

    /// Make `id` the active integration; the query is kept
    ///
    /// Fails with [`DashboardError::UnknownIntegration`] when `id` is not in
    /// `catalog`, leaving the caller's state untouched.
    pub fn select_integration(
        &self,
        catalog: &[IntegrationDescriptor],
        id: &str,
    ) -> DashboardResult<Self> {
        let descriptor = catalog::find(catalog, id)
            .ok_or_else(|| DashboardError::UnknownIntegration(id.to_string()))?;

        tracing::debug!(from = self.active_id, to = descriptor.id, "Integration selected");

        Ok(Self {
            query: self.query.clone(),
            active_id: descriptor.id,
        })
    }

    /// Apply one input event
    pub fn apply(
        &self,
        catalog: &[IntegrationDescriptor],
        event: SelectionEvent,
    ) -> DashboardResult<Self> {
        match event {
            SelectionEvent::SetQuery(query) => Ok(self.set_query(query)),
            SelectionEvent::Select(id) => self.select_integration(catalog, &id),
        }
    }

    /// Sidebar entries matching the current query
    pub fn visible(&self, catalog: &[IntegrationDescriptor]) -> Vec<IntegrationDescriptor> {
        filter_integrations(&self.query, catalog)
    }

    /// Descriptor of the active integration
    pub fn active(&self, catalog: &[IntegrationDescriptor]) -> Option<IntegrationDescriptor> {
        catalog::find(catalog, self.active_id)
    }

    /// View model for the active integration
    pub fn view(&self, store: &KpiStore) -> ViewModel {
        compose(self.active_id, store)
    }
}

impl Default for SelectionState {
    /// Initial state over the built-in catalog
    fn default() -> Self {
        Self {
            query: String::new(),
            active_id: catalog::INTEGRATIONS[0].id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::catalog::catalog;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::initial(catalog()).unwrap();
        assert_eq!(state.query(), "");
        assert_eq!(state.active_id(), "salesforce_cti");
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_initial_state_requires_entries() {
        assert!(matches!(
            SelectionState::initial(&[]),
            Err(DashboardError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_set_query_keeps_active_id() {
        let state = SelectionState::default()
            .select_integration(catalog(), "copper")
            .unwrap();
        let next = state.set_query("sales");

        assert_eq!(next.query(), "sales");
        assert_eq!(next.active_id(), "copper");
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_select_keeps_query() {
        let state = SelectionState::default().set_query("zoho");
        let next = state.select_integration(catalog(), "salesforce_sidebar").unwrap();

        assert_eq!(next.query(), "zoho");
        assert_eq!(next.active_id(), "salesforce_sidebar");
    }

    #[test]
    fn test_select_unknown_id_is_rejected() {
        let state = SelectionState::default();
        let err = state.select_integration(catalog(), "pipedrive").unwrap_err();

        assert!(matches!(err, DashboardError::UnknownIntegration(ref id) if id == "pipedrive"));
        assert_eq!(state.active_id(), "salesforce_cti");
    }

    #[test]
    fn test_apply_event_sequence() {
        let events = vec![
            SelectionEvent::SetQuery("sales".to_string()),
            SelectionEvent::Select("salesforce_sidebar".to_string()),
            SelectionEvent::SetQuery(String::new()),
        ];

        let state = events
            .into_iter()
            .try_fold(SelectionState::default(), |s, e| s.apply(catalog(), e))
            .unwrap();

        assert_eq!(state.query(), "");
        assert_eq!(state.active_id(), "salesforce_sidebar");
    }

    #[test]
    fn test_visible_and_view_follow_state() {
        let store = KpiStore::seeded();
        let state = SelectionState::default().set_query("sales");

        let visible: Vec<_> = state.visible(catalog()).iter().map(|i| i.id).collect();
        assert_eq!(visible, vec!["salesforce_cti", "salesforce_sidebar"]);
        assert!(!state.view(&store).is_empty());

        let state = state.select_integration(catalog(), "bullhorn").unwrap();
        assert!(state.view(&store).is_empty());
        assert_eq!(state.active(catalog()).map(|i| i.name), Some("Bullhorn"));
    }
}
