use dioxus::prelude::*;

use crate::components::goal_card::HabitPanel;
use crate::components::section::PageSection;
use crate::core::habits::Habit;
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn Misc() -> Element {
    let _lang = use_language_marker();

    rsx! {
        section { class: "page page-misc",
            h1 { class: "page__title", {t!("nav-misc")} }

            PageSection {
                title: t!("misc-discipline-title"),
                intro: t!("misc-discipline-intro"),
                HabitPanel {
                    habit: Habit::SelfDiscipline,
                    title: t!("habit-tracker-title", habit = Habit::SelfDiscipline.label()),
                }
            }
        }
    }
}
