//! View layer
//!
//! Pure derivations from selection + KPI data to what the dashboard shows:
//!
//! - **format**: Number formatting (`14.3K`, `$64.8M`, `75%`, `—`)
//! - **filter**: Sidebar search over the integration catalog
//! - **compose**: Builds the [`ViewModel`] for the active integration
//!
//! # Data Flow
//!
//! ```text
//! query ──→ filter_integrations ──→ sidebar list
//! active id ──→ KpiStore::lookup ──→ compose ──→ ViewModel ──→ charts / cards / table
//! ```

pub mod compose;
pub mod filter;
pub mod format;

pub use compose::{
    compose, fallback_series, DashboardView, SourceShareView, Stat, SummaryView, ViewModel,
};
pub use filter::filter_integrations;
pub use format::{format_count_or_dash, format_currency, format_metric, format_percent, PLACEHOLDER};
