use dioxus::prelude::*;
use tracing::warn;

use crate::charts::heatmap::upload_heatmap;
use crate::charts::kpi::{deep_work, youtube_kpi};
use crate::charts::{CalendarHeatmap, ChartError, LineChart, RollingWindow, UploadYear, YoutubeKpi};
use crate::components::dashboard::use_dashboard;
use crate::components::section::{PageSection, RadioGroup};
use crate::core::format::format_count;
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn Work() -> Element {
    let _lang = use_language_marker();
    let data = use_dashboard();
    let mut kpi = use_signal(YoutubeKpi::default);
    let mut year = use_signal(UploadYear::default);
    let mut window = use_signal(RollingWindow::default);

    let config = &data.config;
    let kpi_chart = youtube_kpi(&data.youtube, kpi(), config);
    let deep_work_chart = deep_work(&data.deep_work, window());

    let uploads_chart = match upload_heatmap(&data, year()) {
        Ok(spec) => rsx! { CalendarHeatmap { spec } },
        Err(err) => {
            warn!(year = year().value(), %err, "upload heatmap unavailable");
            rsx! { ChartError { message: err.to_string() } }
        }
    };
    let uploaded_in_year = year().series(&data).sum() as u32;
    let uploaded_total = data.total_uploads() as u32;

    let kpi_options = vec![
        (YoutubeKpi::Subscribers.value().to_string(), t!("kpi-subscribers")),
        (YoutubeKpi::Views.value().to_string(), t!("kpi-views")),
    ];
    let year_options = UploadYear::ALL
        .iter()
        .map(|y| (y.value().to_string(), y.value().to_string()))
        .collect::<Vec<_>>();
    let window_options = vec![
        ("7".to_string(), t!("rolling-week")),
        ("30".to_string(), t!("rolling-month")),
        ("90".to_string(), t!("rolling-quarter")),
    ];

    rsx! {
        section { class: "page page-work",
            h1 { class: "page__title", {t!("nav-work")} }

            PageSection {
                title: t!("work-youtube-title", goal = format_count(config.subscriber_goal)),
                intro: t!("work-youtube-intro"),

                h3 { class: "page-section__subtitle", {t!("lag-measures")} }
                RadioGroup {
                    name: "youtube-kpi",
                    options: kpi_options,
                    selected: kpi().value().to_string(),
                    on_select: move |value: String| {
                        if let Some(choice) = YoutubeKpi::from_value(&value) {
                            kpi.set(choice);
                        }
                    },
                }
                LineChart { spec: kpi_chart, selected: None }

                h3 { class: "page-section__subtitle", {t!("lead-measures")} }
                RadioGroup {
                    name: "upload-year",
                    options: year_options,
                    selected: year().value().to_string(),
                    on_select: move |value: String| {
                        if let Some(choice) = UploadYear::from_value(&value) {
                            year.set(choice);
                        }
                    },
                }
                div { class: "habit-panel",
                    {uploads_chart}
                    dl { class: "goal-card",
                        div { class: "goal-card__item",
                            dt { {t!("goal-label")} }
                            dd { {t!("videos-count", count = config.upload_goal)} }
                        }
                        div { class: "goal-card__item",
                            dt { {t!("uploads-total-label")} }
                            dd { {t!("videos-count", count = uploaded_total)} }
                        }
                        div { class: "goal-card__item",
                            dt { {t!("uploads-year-label", year = year().value())} }
                            dd { {t!("videos-count", count = uploaded_in_year)} }
                        }
                    }
                }

                RadioGroup {
                    name: "deep-work-window",
                    options: window_options,
                    selected: window().days().to_string(),
                    on_select: move |value: String| {
                        let days = value.parse::<usize>().ok();
                        if let Some(choice) = days.and_then(RollingWindow::from_days) {
                            window.set(choice);
                        }
                    },
                }
                LineChart { spec: deep_work_chart, selected: None }
            }
        }
    }
}
