use dioxus::prelude::*;
use tracing::warn;

use crate::charts::heatmap::habit_heatmap;
use crate::charts::{CalendarHeatmap, ChartError};
use crate::components::dashboard::use_dashboard;
use crate::core::habits::Habit;
use crate::t;

/// Goal, current streak and best streak side by side.
#[component]
pub fn GoalCard(goal_days: u32, current: usize, best: usize) -> Element {
    let class = if current >= goal_days as usize {
        "goal-card goal-card--reached"
    } else {
        "goal-card"
    };
    rsx! {
        dl { class,
            div { class: "goal-card__item",
                dt { {t!("goal-label")} }
                dd { {t!("days-count", count = goal_days)} }
            }
            div { class: "goal-card__item",
                dt { {t!("current-streak-label")} }
                dd { {t!("days-count", count = current)} }
            }
            div { class: "goal-card__item",
                dt { {t!("best-streak-label")} }
                dd { {t!("days-count", count = best)} }
            }
        }
    }
}

/// Heatmap of one habit from its tracking start, with its streak card.
#[component]
pub fn HabitPanel(habit: Habit, title: String) -> Element {
    let data = use_dashboard();
    let target = data.config.habit(habit);
    let series = data.habits.series(habit).since(target.start);
    let streaks = data.habits.streaks(habit, target.start);

    let chart = match habit_heatmap(&series, target.start, title) {
        Ok(spec) => rsx! { CalendarHeatmap { spec } },
        Err(err) => {
            warn!(habit = habit.column(), %err, "habit heatmap unavailable");
            rsx! { ChartError { message: err.to_string() } }
        }
    };

    rsx! {
        div { class: "habit-panel",
            {chart}
            GoalCard {
                goal_days: target.goal_days,
                current: streaks.current,
                best: streaks.best,
            }
        }
    }
}
