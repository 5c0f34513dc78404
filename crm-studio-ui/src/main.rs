//! CRM Studio Dashboard
//!
//! KPI dashboard for CRM integrations built with Leptos (WASM).
//!
//! # Features
//!
//! - Searchable integration sidebar
//! - Summary stat cards, events-over-time, funnel and reliability charts
//! - Event family reference table
//! - Empty state for integrations without wired data
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All KPI data is compiled in from the `crm_studio` crate;
//! the app makes no network requests.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
