//! Core data types for the CRM Studio KPI layer
//!
//! This module defines the records the dashboard is built from:
//! - `IntegrationDescriptor`: One entry in the sidebar catalog
//! - `KpiSummary`: Headline numbers for a wired integration
//! - `FunnelStep`, `ReliabilitySignal`, `TimeSeriesPoint`: Chart rows
//! - `KpiRecord`: Everything known about one integration
//! - `EventFamily`: A row of the event-family reference table

use serde::{Deserialize, Serialize};

/// Grouping label for an integration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Customer relationship management systems
    #[serde(rename = "CRM")]
    Crm,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Crm => write!(f, "CRM"),
        }
    }
}

/// A single integration listed in the sidebar
///
/// Descriptors are compiled into the binary and never change at runtime.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct IntegrationDescriptor {
    /// Stable key used to look up KPI data
    pub id: &'static str,
    /// Display label
    pub name: &'static str,
    /// Grouping label
    pub category: Category,
}

impl IntegrationDescriptor {
    pub const fn new(id: &'static str, name: &'static str, category: Category) -> Self {
        Self { id, name, category }
    }

    /// Case-insensitive substring match against the display name
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Share of traffic coming from one source surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceShare {
    pub key: String,
    /// Fraction in `0.0..=1.0`
    pub pct: f64,
}

impl SourceShare {
    pub fn new(key: impl Into<String>, pct: f64) -> Self {
        Self {
            key: key.into(),
            pct,
        }
    }
}

/// Headline KPIs for one integration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    /// Events over the trailing twelve months
    #[serde(rename = "events12m")]
    pub events_12m: f64,
    /// Events over the trailing ninety days
    #[serde(rename = "events90d")]
    pub events_90d: f64,
    /// Companies with the integration enabled
    pub companies: f64,
    /// Monthly active users
    pub mau: f64,
    /// Weekly active users, when measured
    #[serde(default)]
    pub wau: Option<f64>,
    /// Fraction of enabled users active in the last 30 days
    #[serde(default, rename = "active30Rate")]
    pub active_30_rate: Option<f64>,
    /// Average calls per user active in the last 30 days
    #[serde(rename = "avgCallsPerActive30")]
    pub avg_calls_per_active_30: f64,
    /// Annual recurring revenue of the enabled companies
    #[serde(default)]
    pub arr: Option<f64>,
    #[serde(default)]
    pub source_split: Vec<SourceShare>,
}

/// One stage of the monthly usage funnel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunnelStep {
    pub step: String,
    /// Percentage of top-of-funnel, `0..=100`
    pub value: f64,
}

impl FunnelStep {
    pub fn new(step: impl Into<String>, value: f64) -> Self {
        Self {
            step: step.into(),
            value,
        }
    }
}

/// A reliability rate, expressed as a percentage of sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReliabilitySignal {
    pub key: String,
    pub value: f64,
}

impl ReliabilitySignal {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Event volume for one period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint {
    /// Period label, e.g. `"Sep 24"`
    #[serde(rename = "m")]
    pub period: String,
    pub events: f64,
}

impl TimeSeriesPoint {
    pub fn new(period: impl Into<String>, events: f64) -> Self {
        Self {
            period: period.into(),
            events,
        }
    }
}

/// Funnels keyed by cadence
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Funnels {
    #[serde(default)]
    pub monthly: Vec<FunnelStep>,
}

/// Everything the dashboard knows about one integration
///
/// A record without a summary is treated as unwired: its charts are
/// ignored even when they carry rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiRecord {
    #[serde(default)]
    pub summary: Option<KpiSummary>,
    #[serde(default)]
    pub funnels: Funnels,
    #[serde(default)]
    pub reliability: Vec<ReliabilitySignal>,
    #[serde(default)]
    pub time_series: Vec<TimeSeriesPoint>,
}

impl KpiRecord {
    /// Create a wired record from its summary
    pub fn new(summary: KpiSummary) -> Self {
        Self {
            summary: Some(summary),
            ..Self::default()
        }
    }

    /// Builder method: set the monthly funnel
    pub fn monthly_funnel(mut self, steps: Vec<FunnelStep>) -> Self {
        self.funnels.monthly = steps;
        self
    }

    /// Builder method: set the reliability signals
    pub fn reliability(mut self, signals: Vec<ReliabilitySignal>) -> Self {
        self.reliability = signals;
        self
    }

    /// Builder method: set the time series
    pub fn time_series(mut self, points: Vec<TimeSeriesPoint>) -> Self {
        self.time_series = points;
        self
    }

    pub fn is_wired(&self) -> bool {
        self.summary.is_some()
    }
}

/// One row of the event-family reference table
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EventFamily {
    pub family: &'static str,
    pub events: &'static [&'static str],
    pub metric: &'static str,
    pub note: &'static str,
}

impl EventFamily {
    /// Events joined for a single table cell
    pub fn events_label(&self) -> String {
        self.events.join(", ")
    }
}
