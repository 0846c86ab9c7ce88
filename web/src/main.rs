use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, DashboardRoot};
use ui::views::{Archive, Health, Misc, NotFound, Work};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
        #[redirect("/", || Route::Work {})]
        #[route("/work")]
        Work {},
        #[route("/health")]
        Health {},
        #[route("/misc")]
        Misc {},
        #[route("/archive")]
        Archive {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_work(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Work {},
        "{label}"
    })
}
fn nav_health(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Health {},
        "{label}"
    })
}
fn nav_misc(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Misc {},
        "{label}"
    })
}
fn nav_archive(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Archive {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::logger::tracing::info!("starting habitboard (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        work: nav_work,
        health: nav_health,
        misc: nav_misc,
        archive: nav_archive,
    });

    rsx! {
        document::Title { "Habitboard" }
        document::Style { "{MAIN_CSS_INLINE}" }

        DashboardRoot { data_dir: None,
            Router::<Route> {}
        }
    }
}

/// Layout route: the shared navbar above the web `Route` outlet.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
