use dioxus::prelude::*;
use tracing::debug;

use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _lang = use_language_marker();
    let path = format!("/{}", segments.join("/"));
    debug!(%path, "no page for route");

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path)} }
            Link { class: "page-not-found__back", to: "/work", {t!("not-found-back")} }
        }
    }
}
