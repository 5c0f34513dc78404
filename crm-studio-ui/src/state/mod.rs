//! State Management
//!
//! Reactive wrapper around the dashboard's selection state.

pub mod global;

pub use global::{provide_global_state, GlobalState};
