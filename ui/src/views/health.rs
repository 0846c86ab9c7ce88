use dioxus::prelude::*;
use time::Date;

use crate::charts::kpi::weight;
use crate::charts::LineChart;
use crate::components::dashboard::use_dashboard;
use crate::components::section::PageSection;
use crate::core::format::format_date;
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn Health() -> Element {
    let _lang = use_language_marker();
    let data = use_dashboard();
    let config = &data.config;

    let log = data.weight.since(config.weight_new_start);
    let latest = log.latest_weigh_in();
    // Hovering a weigh-in swaps the progress photo; starts on the newest one.
    let mut shown_day = use_signal(move || latest);

    let chart = weight(&log);
    let day = shown_day();
    let photo = day.map(|date| (config.progress_image_url(date), format_date(date)));

    rsx! {
        section { class: "page page-health",
            h1 { class: "page__title", {t!("nav-health")} }

            PageSection {
                title: t!("health-weight-title", goal = config.weight_goal_kg),
                intro: t!("health-weight-intro"),

                div { class: "weight-layout",
                    div { class: "weight-layout__chart",
                        LineChart {
                            spec: chart,
                            on_hover: move |date: Date| shown_day.set(Some(date)),
                            selected: day,
                        }
                    }
                    if let Some((url, label)) = photo {
                        figure { class: "weight-layout__photo",
                            img { src: "{url}", alt: t!("health-photo-alt", date = label.clone()) }
                            figcaption { "{label}" }
                        }
                    }
                }
            }
        }
    }
}
