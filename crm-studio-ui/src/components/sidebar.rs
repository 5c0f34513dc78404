//! Sidebar Component
//!
//! Search box and the filtered integration list.

use leptos::*;

use crm_studio::kpi::IntegrationDescriptor;

use super::ui::Input;
use crate::state::global::GlobalState;

/// Integration sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let query = Signal::derive(move || state.query());

    view! {
        <div class="border-r bg-white p-4 flex flex-col gap-3">
            <div class="flex items-center gap-2">
                <span role="img" aria-label="search">"🔎"</span>
                <Input
                    placeholder="Search integrations"
                    value=query
                    on_input=move |q: String| state.set_query(q)
                />
            </div>
            <div class="text-xs uppercase tracking-wider text-slate-500 mt-2">"CRM Integrations"</div>
            <div class="flex-1 overflow-auto">
                <For
                    each=move || state.visible.get()
                    key=|integration| integration.id
                    children=move |integration| view! { <SidebarItem integration=integration /> }
                />
            </div>
            <div class="text-xs text-slate-500">"Data: Tableau‑validated. Amplitude pending."</div>
        </div>
    }
}

/// One selectable integration
#[component]
fn SidebarItem(integration: IntegrationDescriptor) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = integration.id;
    let is_active = create_memo(move |_| state.active_id.get() == id);

    view! {
        <button
            on:click=move |_| state.select_integration(id)
            class=move || item_class(is_active.get())
        >
            <span class="font-medium">{integration.name}</span>
            <span class="opacity-60">"›"</span>
        </button>
    }
}

fn item_class(active: bool) -> String {
    let base = "w-full text-left px-3 py-2 rounded-xl mb-1 flex items-center justify-between";
    if active {
        format!("{} bg-slate-900 text-white", base)
    } else {
        format!("{} hover:bg-slate-100", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_class_highlights_active() {
        assert!(item_class(true).contains("bg-slate-900"));
        assert!(!item_class(false).contains("bg-slate-900"));
    }
}
