//! Platform-agnostic dashboard logic: calendar grids, streaks, series transforms.

pub mod calendar;
pub mod config;
pub mod format;
pub mod habits;
pub mod schedule;
pub mod series;
pub mod streak;

pub use calendar::{build_grid, build_grid_from_values, CalendarGrid, GridError};
pub use series::DailySeries;
pub use streak::{current_streak, ActivityPolicy};
