//! Plain-text rendering of the dashboard
//!
//! Used by the `crm-studio` binary. Charts become horizontal bar rows scaled
//! to the largest value in each series.

use serde::Serialize;
use std::fmt::Write;

use crate::error::DashboardResult;
use crate::kpi::IntegrationDescriptor;
use crate::view::{format_metric, DashboardView, ViewModel};

/// Width of the longest bar, in cells
const BAR_WIDTH: usize = 40;

const SIDEBAR_FOOTER: &str = "Data: Tableau-validated. Amplitude pending.";
const EMPTY_TITLE: &str = "No data wired for this integration";
const EMPTY_HINT: &str = "Upload Summary/Monthly files to enable charts and KPIs.";

/// Sidebar listing with the active entry marked
pub fn render_sidebar(visible: &[IntegrationDescriptor], active_id: &str) -> String {
    let mut out = String::new();
    let heading = visible
        .first()
        .map(|i| format!("{} Integrations", i.category))
        .unwrap_or_else(|| "Integrations".to_string());
    let _ = writeln!(out, "{}", heading.to_uppercase());

    if visible.is_empty() {
        let _ = writeln!(out, "  (no integrations match)");
    }
    for integration in visible {
        let marker = if integration.id == active_id { '›' } else { ' ' };
        let _ = writeln!(out, "{} {:<24} {}", marker, integration.name, integration.id);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", SIDEBAR_FOOTER);
    out
}

/// Dashboard body for one integration
pub fn render_view(integration: &IntegrationDescriptor, view: &ViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", integration.name);
    let _ = writeln!(out, "{}", "=".repeat(integration.name.chars().count()));
    let _ = writeln!(out);

    match view {
        ViewModel::Empty => {
            let _ = writeln!(out, "{}", EMPTY_TITLE);
            let _ = writeln!(out, "{}", EMPTY_HINT);
        }
        ViewModel::Ready(dashboard) => render_dashboard(&mut out, dashboard),
    }
    out
}

fn render_dashboard(out: &mut String, view: &DashboardView) {
    for stat in view.summary.stats() {
        let _ = writeln!(out, "{:<26} {:>10}   {}", stat.title, stat.value, stat.caption);
    }
    if !view.summary.source_split.is_empty() {
        let split: Vec<_> = view
            .summary
            .source_split
            .iter()
            .map(|s| format!("{} {}", s.key, s.share))
            .collect();
        let _ = writeln!(out, "{:<26} {}", "Source split", split.join(" / "));
    }

    let period = view.period.as_deref().unwrap_or("12m vs 90d");
    section(out, "Events over time", period);
    let rows: Vec<_> = view
        .time_series
        .iter()
        .map(|p| (p.period.as_str(), p.events, format_metric(Some(p.events))))
        .collect();
    bars(out, &rows);

    section(out, "Funnel: load → match → note → task → external", "% of loads");
    let rows: Vec<_> = view
        .funnel
        .iter()
        .map(|s| (s.step.as_str(), s.value, format!("{}%", s.value)))
        .collect();
    bars(out, &rows);

    section(out, "Reliability signals", "% of sessions");
    let rows: Vec<_> = view
        .reliability
        .iter()
        .map(|s| (s.key.as_str(), s.value, format!("{}%", s.value)))
        .collect();
    bars(out, &rows);

    section(out, "Event families (sample)", "Sidebar schema; CTI once instrumented");
    for family in &view.event_families {
        let _ = writeln!(out, "{}  [{}]", family.family, family.metric);
        let _ = writeln!(out, "    events: {}", family.events_label());
        let _ = writeln!(out, "    note:   {}", family.note);
    }
}

fn section(out: &mut String, title: &str, badge: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}  ({})", title, badge);
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

/// One bar per row; an empty series prints an empty chart line
fn bars(out: &mut String, rows: &[(&str, f64, String)]) {
    if rows.is_empty() {
        let _ = writeln!(out, "  (no rows)");
        return;
    }

    let max = rows.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);
    let label_width = rows.iter().map(|(l, _, _)| l.chars().count()).max().unwrap_or(0);

    for (label, value, shown) in rows {
        let _ = writeln!(
            out,
            "  {:<width$} {:<bar$} {}",
            label,
            bar(*value, max),
            shown,
            width = label_width,
            bar = BAR_WIDTH
        );
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 || value.is_nan() {
        return String::new();
    }
    let cells = ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "█".repeat(cells.min(BAR_WIDTH))
}

#[derive(Serialize)]
struct JsonDashboard<'a> {
    integration: &'a IntegrationDescriptor,
    view: &'a ViewModel,
}

/// The integration and its view model as pretty JSON
pub fn render_json(integration: &IntegrationDescriptor, view: &ViewModel) -> DashboardResult<String> {
    Ok(serde_json::to_string_pretty(&JsonDashboard { integration, view })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::{catalog, KpiStore};
    use crate::view::{compose, filter_integrations};

    fn descriptor(id: &str) -> IntegrationDescriptor {
        crate::kpi::catalog::find(catalog(), id).unwrap()
    }

    #[test]
    fn test_sidebar_marks_active_entry() {
        let visible = filter_integrations("sales", catalog());
        let text = render_sidebar(&visible, "salesforce_sidebar");

        assert!(text.starts_with("CRM INTEGRATIONS"));
        assert!(text.contains("  Salesforce CTI"));
        assert!(text.contains("› Salesforce Sidebar"));
        assert!(!text.contains("Copper"));
    }

    #[test]
    fn test_sidebar_without_matches() {
        let text = render_sidebar(&[], "salesforce_cti");
        assert!(text.contains("(no integrations match)"));
    }

    #[test]
    fn test_unwired_integration_shows_empty_card() {
        let store = KpiStore::seeded();
        let text = render_view(&descriptor("copper"), &compose("copper", &store));

        assert!(text.contains(EMPTY_TITLE));
        assert!(text.contains(EMPTY_HINT));
        assert!(!text.contains("MAU"));
    }

    #[test]
    fn test_wired_integration_shows_stats_and_charts() {
        let store = KpiStore::seeded();
        let text = render_view(&descriptor("salesforce_cti"), &compose("salesforce_cti", &store));

        assert!(text.contains("14.3K"));
        assert!(text.contains("$64.8M"));
        assert!(text.contains("Sep 2024 – Oct 2025"));
        assert!(text.contains("wrong match"));
        assert!(text.contains("Match quality"));
    }

    #[test]
    fn test_series_values_round_like_the_web_dashboard() {
        let store = KpiStore::seeded();
        let text = render_view(&descriptor("salesforce_cti"), &compose("salesforce_cti", &store));

        let sep_24 = text
            .lines()
            .find(|line| line.trim_start().starts_with("Sep 24"))
            .unwrap();
        assert!(sep_24.ends_with("1.4M"), "got {:?}", sep_24);
    }

    #[test]
    fn test_fallback_series_is_labelled() {
        let store = KpiStore::seeded();
        let text = render_view(
            &descriptor("salesforce_sidebar"),
            &compose("salesforce_sidebar", &store),
        );

        assert!(text.contains("(12m vs 90d)"));
        assert!(text.contains("1.8M"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(100.0, 100.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(50.0, 100.0).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0.1, 100.0).chars().count(), 1);
        assert_eq!(bar(0.0, 100.0), "");
        assert_eq!(bar(5.0, 0.0), "");
    }

    #[test]
    fn test_json_output() {
        let store = KpiStore::seeded();
        let json = render_json(&descriptor("copper"), &compose("copper", &store)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["integration"]["id"], "copper");
        assert_eq!(value["integration"]["category"], "CRM");
        assert_eq!(value["view"]["state"], "empty");
    }
}
