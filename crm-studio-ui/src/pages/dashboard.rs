//! Dashboard Page
//!
//! Main view for the active integration: stat cards, charts and the event
//! family table, or the empty-state card when no data is wired.

use leptos::*;

use crm_studio::view::{DashboardView, ViewModel};

use crate::components::{
    Badge, BadgeVariant, BarChart, Button, ButtonVariant, Card, CardContent, ChartPoint,
    EmptyState, EventFamilies, LineChart, StatCard,
};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let title = move || state.active().map(|i| i.name).unwrap_or_default();

    view! {
        <div class="p-6 overflow-auto">
            // Page header
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-semibold">{title}</h1>
                <Button variant=ButtonVariant::Outline class="gap-2">
                    <span role="img" aria-label="refresh">"🔄"</span>
                    " Refresh"
                </Button>
            </div>

            {move || match state.view.get() {
                ViewModel::Empty => view! { <EmptyState /> }.into_view(),
                ViewModel::Ready(dashboard) => view! { <DashboardBody dashboard=*dashboard /> }.into_view(),
            }}
        </div>
    }
}

/// Stats, charts and table for a wired integration
#[component]
fn DashboardBody(dashboard: DashboardView) -> impl IntoView {
    let time_series: Vec<ChartPoint> = dashboard.time_series.iter().map(ChartPoint::from).collect();
    let funnel: Vec<ChartPoint> = dashboard.funnel.iter().map(ChartPoint::from).collect();
    let reliability: Vec<ChartPoint> = dashboard.reliability.iter().map(ChartPoint::from).collect();
    // Fallback series has no month range
    let period = dashboard.period.unwrap_or_else(|| "12m vs 90d".to_string());
    let stats = dashboard.summary.stats();
    let event_families = dashboard.event_families;

    view! {
        // Summary row
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-6">
            {stats
                .into_iter()
                .map(|stat| view! { <StatCard stat=stat /> })
                .collect_view()}
        </div>

        // Events over time
        <Card class="mb-6">
            <CardContent class="p-4">
                <ChartHeader title="Events over time">
                    <Badge variant=BadgeVariant::Secondary>{period}</Badge>
                </ChartHeader>
                <LineChart points=time_series />
            </CardContent>
        </Card>

        // Funnel and reliability side by side
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6">
            <Card>
                <CardContent class="p-4">
                    <ChartHeader title="Funnel: load → match → note → task → external">
                        <Badge>"Sidebar/CTI"</Badge>
                    </ChartHeader>
                    <BarChart points=funnel legend="% of loads" />
                </CardContent>
            </Card>

            <Card>
                <CardContent class="p-4">
                    <ChartHeader title="Reliability signals">
                        <Badge variant=BadgeVariant::Secondary>"Rates"</Badge>
                    </ChartHeader>
                    <BarChart points=reliability />
                </CardContent>
            </Card>
        </div>

        // Event families
        <Card>
            <CardContent class="p-4">
                <ChartHeader title="Event families (sample)">
                    <Badge variant=BadgeVariant::Secondary>"Sidebar schema; CTI once instrumented"</Badge>
                </ChartHeader>
                <EventFamilies families=event_families />
            </CardContent>
        </Card>
    }
}

/// Card title with a badge on the right
#[component]
fn ChartHeader(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-3">
            <div class="font-medium">{title}</div>
            {children()}
        </div>
    }
}
