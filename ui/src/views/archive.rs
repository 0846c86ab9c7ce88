use dioxus::prelude::*;
use time::Date;

use crate::charts::kpi::{breathing, time_spent, weight};
use crate::charts::schedule::{daily_schedule, ideal_schedule};
use crate::charts::{LineChart, ScheduleChart};
use crate::components::dashboard::use_dashboard;
use crate::components::goal_card::HabitPanel;
use crate::components::section::{PageSection, SectionStatus};
use crate::core::habits::Habit;
use crate::i18n::use_language_marker;
use crate::t;

/// Finished experiments, each marked as a success or a failure.
#[component]
pub fn Archive() -> Element {
    let _lang = use_language_marker();
    let data = use_dashboard();
    let config = &data.config;

    let latest_day = data.time_log.latest_date();
    let mut schedule_day = use_signal(move || latest_day);
    let mut show_ideal = use_signal(|| false);

    let breathing_chart = breathing(&data.breathing);
    let old_weight_chart = weight(&data.weight.until(config.weight_old_end));
    let time_chart = time_spent(&data.time_log, config);
    let day = schedule_day();
    let cursor = if show_ideal() { None } else { day };
    let schedule = match (show_ideal(), day) {
        (false, Some(date)) => daily_schedule(&data.time_log, date),
        _ => ideal_schedule(&data.time_log),
    };

    rsx! {
        section { class: "page page-archive",
            h1 { class: "page__title", {t!("nav-archive")} }

            PageSection {
                title: t!("archive-wimhof-title"),
                status: SectionStatus::Success,
                intro: t!("archive-wimhof-intro"),
                LineChart { spec: breathing_chart, selected: None }
            }

            PageSection {
                title: t!("archive-cold-shower-title"),
                status: SectionStatus::Success,
                intro: t!("archive-cold-shower-intro"),
                HabitPanel {
                    habit: Habit::ColdShower,
                    title: t!("habit-tracker-title", habit = Habit::ColdShower.label()),
                }
            }

            PageSection {
                title: t!("archive-omad-title"),
                status: SectionStatus::Success,
                intro: t!("archive-omad-intro"),
                HabitPanel {
                    habit: Habit::Omad,
                    title: t!("habit-tracker-title", habit = Habit::Omad.label()),
                }
            }

            PageSection {
                title: t!("archive-lucid-title"),
                status: SectionStatus::Success,
                intro: t!("archive-lucid-intro"),
                HabitPanel {
                    habit: Habit::LucidDreaming,
                    title: t!("habit-tracker-title", habit = Habit::LucidDreaming.label()),
                }
            }

            PageSection {
                title: t!("archive-weight-title", goal = config.weight_goal_kg),
                status: SectionStatus::Failure,
                intro: t!("archive-weight-intro"),
                LineChart { spec: old_weight_chart, selected: None }
                HabitPanel {
                    habit: Habit::AbWorkout,
                    title: t!("habit-tracker-title", habit = Habit::AbWorkout.label()),
                }
            }

            PageSection {
                title: t!("archive-schedule-title"),
                status: SectionStatus::Failure,
                intro: t!("archive-schedule-intro"),
                LineChart {
                    spec: time_chart,
                    on_hover: move |date: Date| schedule_day.set(Some(date)),
                    selected: cursor,
                }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: show_ideal(),
                        onchange: move |_| show_ideal.set(!show_ideal()),
                    }
                    span { {t!("schedule-show-ideal")} }
                }
                ScheduleChart { spec: schedule }
            }
        }
    }
}
