//! View composition
//!
//! Turns the KPI record for the active integration into render-ready
//! values: formatted stat cards, chart rows and the event-family table.
//! Unwired integrations produce [`ViewModel::Empty`].

use chrono::NaiveDate;
use serde::Serialize;

use super::format::{format_count_or_dash, format_currency, format_metric, format_percent};
use crate::kpi::{
    EventFamily, FunnelStep, KpiEntry, KpiStore, KpiSummary, ReliabilitySignal, TimeSeriesPoint,
    EVENT_FAMILIES,
};

/// Label of the synthetic twelve-month point
pub const FALLBACK_12M_LABEL: &str = "12m";
/// Label of the synthetic ninety-day point
pub const FALLBACK_90D_LABEL: &str = "90d";

/// Everything the dashboard body needs for one selection
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewModel {
    /// No data wired for this integration
    Empty,
    /// Summary and charts are available
    Ready(Box<DashboardView>),
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewModel::Empty)
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match self {
            ViewModel::Ready(view) => Some(view),
            ViewModel::Empty => None,
        }
    }
}

/// Render-ready data for a wired integration
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub summary: SummaryView,
    pub funnel: Vec<FunnelStep>,
    pub reliability: Vec<ReliabilitySignal>,
    pub time_series: Vec<TimeSeriesPoint>,
    /// True when `time_series` is the two-point 12m/90d substitute
    pub time_series_fallback: bool,
    /// Range covered by the time series, e.g. `"Sep 2024 – Oct 2025"`
    pub period: Option<String>,
    pub event_families: Vec<EventFamily>,
}

/// Formatted summary values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryView {
    pub events_12m: String,
    pub events_90d: String,
    pub companies: String,
    pub mau: String,
    pub wau: String,
    pub active_rate: String,
    pub avg_calls_per_active: String,
    pub arr: String,
    pub source_split: Vec<SourceShareView>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceShareView {
    pub key: String,
    pub share: String,
}

/// One stat card: title, formatted value and a short caption
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: String,
    pub caption: &'static str,
}

impl SummaryView {
    pub fn from_summary(summary: &KpiSummary) -> Self {
        Self {
            events_12m: format_metric(Some(summary.events_12m)),
            events_90d: format_metric(Some(summary.events_90d)),
            companies: format_metric(Some(summary.companies)),
            mau: format_metric(Some(summary.mau)),
            wau: format_count_or_dash(summary.wau),
            active_rate: format_percent(summary.active_30_rate),
            avg_calls_per_active: format_metric(Some(summary.avg_calls_per_active_30)),
            arr: format_currency(summary.arr),
            source_split: summary
                .source_split
                .iter()
                .map(|s| SourceShareView {
                    key: s.key.clone(),
                    share: format_percent(Some(s.pct)),
                })
                .collect(),
        }
    }

    /// The eight stat cards, in display order
    pub fn stats(&self) -> [Stat; 8] {
        let stat = |title, value: &String, caption| Stat {
            title,
            value: value.clone(),
            caption,
        };
        [
            stat("12-mo events", &self.events_12m, "Tableau"),
            stat("90-day events", &self.events_90d, "Tableau"),
            stat("Companies", &self.companies, "Enabled"),
            stat("MAU", &self.mau, "30-day active"),
            stat("WAU", &self.wau, "7-day active"),
            stat("Active rate (30d)", &self.active_rate, "Users active / month"),
            stat("Avg calls / active (30d)", &self.avg_calls_per_active, "Per user"),
            stat("ARR", &self.arr, "Annual"),
        ]
    }
}

/// Build the view model for `active_id`
pub fn compose(active_id: &str, store: &KpiStore) -> ViewModel {
    let (record, summary) = match store.lookup(active_id) {
        KpiEntry::Wired { record, summary } => (record, summary),
        KpiEntry::Unwired => {
            tracing::debug!(integration = active_id, "No KPI data wired");
            return ViewModel::Empty;
        }
    };

    let time_series_fallback = record.time_series.is_empty();
    let (time_series, period) = if time_series_fallback {
        // The 12m/90d pair spans no calendar months, so it carries no period badge
        (fallback_series(summary), None)
    } else {
        (record.time_series.clone(), period_label(&record.time_series))
    };

    tracing::debug!(
        integration = active_id,
        points = time_series.len(),
        fallback = time_series_fallback,
        "Composed dashboard view"
    );

    ViewModel::Ready(Box::new(DashboardView {
        summary: SummaryView::from_summary(summary),
        funnel: record.funnels.monthly.clone(),
        reliability: record.reliability.clone(),
        time_series,
        time_series_fallback,
        period,
        event_families: EVENT_FAMILIES.to_vec(),
    }))
}

/// Two-point series used when no monthly data exists
pub fn fallback_series(summary: &KpiSummary) -> Vec<TimeSeriesPoint> {
    vec![
        TimeSeriesPoint::new(FALLBACK_12M_LABEL, summary.events_12m),
        TimeSeriesPoint::new(FALLBACK_90D_LABEL, summary.events_90d),
    ]
}

/// `"Sep 2024 – Oct 2025"` from the first and last `Mon YY` labels
fn period_label(series: &[TimeSeriesPoint]) -> Option<String> {
    let first = parse_period(&series.first()?.period)?;
    let last = parse_period(&series.last()?.period)?;
    Some(format!("{} – {}", first.format("%b %Y"), last.format("%b %Y")))
}

fn parse_period(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01 {}", label.trim()), "%d %b %y").ok()
}
