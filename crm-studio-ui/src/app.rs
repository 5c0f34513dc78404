//! App Root Component
//!
//! Two-column layout: integration sidebar on the left, dashboard on the right.

use leptos::*;

use crate::components::Sidebar;
use crate::pages::Dashboard;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="h-screen w-full grid grid-cols-[300px_1fr] bg-slate-50 text-slate-900">
            <Sidebar />
            <Dashboard />
        </div>
    }
}
