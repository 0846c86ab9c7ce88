//! Dashboard configuration: goals, tracking start dates and image locations.
//!
//! Every field has a default, so a `dashboard.json` only needs the keys it
//! wants to override.

use serde::{Deserialize, Serialize};
use time::{macros::date, Date, Duration};

use super::habits::Habit;

const MAX_IDEAL_DAY_HOURS: f64 = 24.0;
const DEFAULT_IDEAL_DAY: Duration = Duration::hours(12);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub owner_name: String,
    pub header_image_url: String,
    /// Progress photos are looked up as `{base}/{YYYY-MM-DD}.jpg`.
    pub progress_image_base_url: String,

    pub subscriber_goal: f64,
    pub monthly_revenue_goal_usd: f64,
    /// Ad revenue per 1,000 views.
    pub revenue_per_mille_usd: f64,

    pub upload_goal: u32,
    pub uploads_2018_start: Date,
    pub uploads_2019_start: Date,

    pub weight_goal_kg: f64,
    pub weight_old_end: Date,
    pub weight_new_start: Date,

    pub ideal_day_hours: f64,

    pub habits: Vec<HabitTarget>,
}

/// When tracking a habit began and how many consecutive days count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitTarget {
    pub habit: Habit,
    pub start: Date,
    pub goal_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            owner_name: "Sebastian Mantey".into(),
            header_image_url:
                "https://raw.githubusercontent.com/SebastianMantey/Personal_Dashboard/master/header%20image.png"
                    .into(),
            progress_image_base_url:
                "https://raw.githubusercontent.com/SebastianMantey/helper_repo/master/images".into(),
            subscriber_goal: 100_000.0,
            monthly_revenue_goal_usd: 2_000.0,
            revenue_per_mille_usd: 1.0,
            upload_goal: 100,
            uploads_2018_start: date!(2018 - 01 - 01),
            uploads_2019_start: date!(2018 - 12 - 31),
            weight_goal_kg: 85.0,
            weight_old_end: date!(2019 - 05 - 31),
            weight_new_start: date!(2019 - 07 - 04),
            ideal_day_hours: 12.0,
            habits: default_habit_targets(),
        }
    }
}

fn default_habit_targets() -> Vec<HabitTarget> {
    vec![
        HabitTarget {
            habit: Habit::SelfDiscipline,
            start: date!(2018 - 12 - 31),
            goal_days: 100,
        },
        HabitTarget {
            habit: Habit::ColdShower,
            start: date!(2018 - 11 - 04),
            goal_days: 100,
        },
        HabitTarget {
            habit: Habit::Omad,
            start: date!(2018 - 12 - 31),
            goal_days: 21,
        },
        HabitTarget {
            habit: Habit::LucidDreaming,
            start: date!(2018 - 12 - 31),
            goal_days: 30,
        },
        HabitTarget {
            habit: Habit::AbWorkout,
            start: date!(2018 - 11 - 04),
            goal_days: 100,
        },
    ]
}

impl DashboardConfig {
    /// Parse a `dashboard.json`. Values that parse but make no sense for a
    /// day, such as a negative or longer-than-24h ideal day, are rejected.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_slice(bytes)?;
        if !(config.ideal_day_hours > 0.0 && config.ideal_day_hours <= MAX_IDEAL_DAY_HOURS) {
            return Err(serde::de::Error::custom(format!(
                "ideal_day_hours must be in (0, {MAX_IDEAL_DAY_HOURS}], got {}",
                config.ideal_day_hours
            )));
        }
        Ok(config)
    }

    /// Target for `habit`; habits missing from the configured list fall back to the defaults.
    pub fn habit(&self, habit: Habit) -> HabitTarget {
        self.habits
            .iter()
            .chain(default_habit_targets().iter())
            .find(|target| target.habit == habit)
            .copied()
            .unwrap_or(HabitTarget {
                habit,
                start: self.uploads_2019_start,
                goal_days: 100,
            })
    }

    /// Monthly views needed to reach the revenue goal.
    pub fn monthly_views_goal(&self) -> f64 {
        if self.revenue_per_mille_usd > 0.0 {
            self.monthly_revenue_goal_usd / (self.revenue_per_mille_usd / 1000.0)
        } else {
            0.0
        }
    }

    /// Length of the ideal day; out-of-range hours fall back to the default 12h.
    pub fn ideal_day(&self) -> Duration {
        let hours = self.ideal_day_hours;
        if hours > 0.0 && hours <= MAX_IDEAL_DAY_HOURS {
            Duration::checked_seconds_f64(hours * 3600.0).unwrap_or(DEFAULT_IDEAL_DAY)
        } else {
            DEFAULT_IDEAL_DAY
        }
    }

    pub fn progress_image_url(&self, date: Date) -> String {
        format!(
            "{}/{}.jpg",
            self.progress_image_base_url.trim_end_matches('/'),
            super::format::format_date(date)
        )
    }
}
