//! Empty State Component
//!
//! Shown instead of stats and charts for integrations without wired data.

use leptos::*;

use super::ui::{Card, CardContent};

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <Card class="mb-6">
            <CardContent class="p-4 text-sm">
                <div class="font-medium mb-1">"No data wired for this integration"</div>
                <div class="text-slate-600">"Upload Summary/Monthly files to enable charts and KPIs."</div>
            </CardContent>
        </Card>
    }
}
