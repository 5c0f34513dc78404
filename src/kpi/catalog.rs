//! Integration catalog
//!
//! The fixed, ordered list of integrations shown in the sidebar.

use super::types::{Category, IntegrationDescriptor};

/// All integrations, in sidebar order
pub const INTEGRATIONS: [IntegrationDescriptor; 7] = [
    IntegrationDescriptor::new("salesforce_cti", "Salesforce CTI", Category::Crm),
    IntegrationDescriptor::new("salesforce_sidebar", "Salesforce Sidebar", Category::Crm),
    IntegrationDescriptor::new("hubspot", "HubSpot (All Variants)", Category::Crm),
    IntegrationDescriptor::new("zoho", "Zoho (All Variants)", Category::Crm),
    IntegrationDescriptor::new("dynamics", "MS Dynamics", Category::Crm),
    IntegrationDescriptor::new("copper", "Copper", Category::Crm),
    IntegrationDescriptor::new("bullhorn", "Bullhorn", Category::Crm),
];

/// Borrow the catalog as a slice
pub fn catalog() -> &'static [IntegrationDescriptor] {
    &INTEGRATIONS
}

/// Find a descriptor by id
pub fn find(catalog: &[IntegrationDescriptor], id: &str) -> Option<IntegrationDescriptor> {
    catalog.iter().find(|i| i.id == id).copied()
}

/// Id of the integration selected when a session starts
pub fn default_id(catalog: &[IntegrationDescriptor]) -> Option<&'static str> {
    catalog.first().map(|i| i.id)
}
