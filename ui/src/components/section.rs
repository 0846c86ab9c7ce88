use dioxus::prelude::*;

use crate::t;

/// Outcome badge on archived goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionStatus {
    #[default]
    Active,
    Success,
    Failure,
}

impl SectionStatus {
    fn modifier(self) -> &'static str {
        match self {
            SectionStatus::Active => "page-section",
            SectionStatus::Success => "page-section page-section--success",
            SectionStatus::Failure => "page-section page-section--failure",
        }
    }
}

/// A titled block on a page: heading, optional intro paragraph, then charts.
#[component]
pub fn PageSection(
    title: String,
    #[props(default)] status: SectionStatus,
    intro: Option<String>,
    children: Element,
) -> Element {
    let badge = match status {
        SectionStatus::Active => None,
        SectionStatus::Success => Some(t!("status-success")),
        SectionStatus::Failure => Some(t!("status-failure")),
    };

    rsx! {
        section { class: status.modifier(),
            header { class: "page-section__header",
                h2 { class: "page-section__title", "{title}" }
                if let Some(badge) = badge {
                    span { class: "page-section__badge", "{badge}" }
                }
            }
            if let Some(intro) = intro {
                p { class: "page-section__intro", "{intro}" }
            }
            {children}
        }
    }
}

/// Radio buttons bound to a string value.
#[component]
pub fn RadioGroup(
    name: String,
    options: Vec<(String, String)>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "radio-group", role: "radiogroup",
            { options.into_iter().map(|(value, label)| {
                let checked = value == selected;
                let picked = value.clone();
                rsx! {
                    label { key: "{value}", class: "radio-group__option",
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{value}",
                            checked,
                            onchange: move |_| on_select.call(picked.clone()),
                        }
                        span { "{label}" }
                    }
                }
            })}
        }
    }
}
