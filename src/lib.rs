//! # CRM Studio
//!
//! KPI dashboard for CRM integrations. A sidebar lists integrations;
//! selecting one shows summary stats, an events-over-time chart, a usage
//! funnel, reliability signals and the instrumented event families.
//!
//! ## Features
//!
//! - **Static KPI store**: Tableau-validated figures compiled into the crate
//! - **Explicit wiring state**: unwired integrations are a variant, not a null
//! - **Pure view composition**: selection + store → render-ready view model
//! - **Deterministic selection state**: immutable state, pure transitions
//!
//! ## Modules
//!
//! - [`kpi`]: Integration catalog, KPI records and the store
//! - [`view`]: Formatting, sidebar filter and view composition
//! - [`state`]: Search query + active integration state machine
//! - [`render`]: Plain-text and JSON rendering for the terminal
//! - `config` / `logging` (feature `cli`): settings and tracing setup for the binary
//!
//! ## Quick Start
//!
//! ```rust
//! use crm_studio::kpi::{catalog, KpiStore};
//! use crm_studio::state::SelectionState;
//!
//! let store = KpiStore::seeded();
//! let state = SelectionState::initial(catalog())?.set_query("sales");
//!
//! assert_eq!(state.visible(catalog()).len(), 2);
//!
//! let view = state.view(&store);
//! assert_eq!(view.dashboard().map(|d| d.summary.mau.as_str()), Some("14.3K"));
//! # Ok::<(), crm_studio::DashboardError>(())
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod kpi;
#[cfg(feature = "cli")]
pub mod logging;
pub mod render;
pub mod state;
pub mod view;

// Re-export top-level types for convenience
pub use error::{DashboardError, DashboardResult};

pub use kpi::{
    catalog, Category, EventFamily, FunnelStep, IntegrationDescriptor, KpiEntry, KpiRecord,
    KpiStore, KpiSummary, ReliabilitySignal, SourceShare, TimeSeriesPoint, EVENT_FAMILIES,
    INTEGRATIONS,
};

pub use state::{SelectionEvent, SelectionState};

pub use view::{
    compose, filter_integrations, format_metric, DashboardView, Stat, SummaryView, ViewModel,
};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig, OutputFormat};
