//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod empty_state;
pub mod event_families;
pub mod sidebar;
pub mod stat_card;
pub mod ui;

pub use chart::{BarChart, ChartPoint, LineChart};
pub use empty_state::EmptyState;
pub use event_families::EventFamilies;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, Input};
