//! Shared UI crate for Habitboard: dashboard logic, data access, charts and pages.

pub mod charts;
pub mod core;
pub mod data;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod dashboard;
    pub use dashboard::{use_dashboard, Dashboard, DashboardRoot};

    pub mod goal_card;
    pub mod section;
}
