//! Sidebar search

use crate::kpi::IntegrationDescriptor;

/// Integrations whose name contains `query`, ignoring case
///
/// An empty query keeps every entry. Catalog order is preserved.
pub fn filter_integrations(
    query: &str,
    catalog: &[IntegrationDescriptor],
) -> Vec<IntegrationDescriptor> {
    catalog
        .iter()
        .filter(|i| i.matches(query))
        .copied()
        .collect()
}
