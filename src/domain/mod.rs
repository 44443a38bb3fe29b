//! View models and value types for the finance dashboard.

pub mod dashboard;
pub mod entities;

pub use dashboard::{DashboardModel, KpiCardModel, DEFAULT_DISPLAY_NAME, KPI_CAPTION};
pub use entities::{Accent, Icon};
