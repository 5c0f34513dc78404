//! Stat Card Component
//!
//! One summary KPI: title, formatted value and caption.

use leptos::*;

use crm_studio::view::Stat;

use super::ui::{Card, CardContent};

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <Card>
            <CardContent class="p-4">
                <div class="text-xs text-slate-500">{stat.title}</div>
                <div class="text-2xl font-semibold mt-1">{stat.value}</div>
                <div class="text-xs text-slate-500 mt-1">{stat.caption}</div>
            </CardContent>
        </Card>
    }
}
