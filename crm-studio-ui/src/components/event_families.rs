//! Event Families Table

use leptos::*;

use crm_studio::kpi::EventFamily;

#[component]
pub fn EventFamilies(families: Vec<EventFamily>) -> impl IntoView {
    view! {
        <div class="overflow-auto">
            <table class="w-full text-sm">
                <thead class="text-left text-slate-500">
                    <tr>
                        <th class="py-2">"Family"</th>
                        <th>"Events"</th>
                        <th>"Metric"</th>
                        <th>"Note"</th>
                    </tr>
                </thead>
                <tbody>
                    {families
                        .into_iter()
                        .map(|row| view! {
                            <tr class="border-t">
                                <td class="py-2 font-medium">{row.family}</td>
                                <td class="py-2">{row.events_label()}</td>
                                <td class="py-2">{row.metric}</td>
                                <td class="py-2 text-slate-600">{row.note}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
