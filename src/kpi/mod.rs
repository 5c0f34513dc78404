//! CRM Studio KPI data
//!
//! This module holds the static data the dashboard is built from:
//!
//! - **types**: Record types (IntegrationDescriptor, KpiSummary, KpiRecord, ...)
//! - **catalog**: The ordered integration list shown in the sidebar
//! - **store**: Integration id → KPI record mapping, plus event families
//!
//! Everything here is constructed once and only read afterwards.
//!
//! # Example
//!
//! ```rust
//! use crm_studio::kpi::{KpiEntry, KpiStore};
//!
//! let store = KpiStore::seeded();
//! match store.lookup("salesforce_cti") {
//!     KpiEntry::Wired { summary, .. } => assert_eq!(summary.companies, 864.0),
//!     KpiEntry::Unwired => unreachable!(),
//! }
//! assert!(!store.lookup("copper").is_wired());
//! ```

pub mod catalog;
pub mod store;
pub mod types;

pub use catalog::{catalog, INTEGRATIONS};
pub use store::{KpiEntry, KpiStore, EVENT_FAMILIES};
pub use types::{
    Category, EventFamily, FunnelStep, Funnels, IntegrationDescriptor, KpiRecord, KpiSummary,
    ReliabilitySignal, SourceShare, TimeSeriesPoint,
};
