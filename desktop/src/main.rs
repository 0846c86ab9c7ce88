#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, DashboardRoot};
use ui::views::{Archive, Health, Misc, NotFound, Work};

/// Read CSVs from this directory instead of the copies bundled into the binary.
const DATA_DIR_ENV: &str = "HABITBOARD_DATA_DIR";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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
)); // Shared theme (ui/assets/theme/main.css), always inlined on desktop.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    let resource_dir = resolve_resource_dir();
    dioxus::logger::tracing::info!(resources = %resource_dir.display(), "starting habitboard (desktop)");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Habitboard v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_work(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Work {}, "{label}" })
}
fn nav_health(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Health {}, "{label}" })
}
fn nav_misc(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Misc {}, "{label}" })
}
fn nav_archive(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Archive {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the chosen language here; pages read it to re-render.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        work: nav_work,
        health: nav_health,
        misc: nav_misc,
        archive: nav_archive,
    });

    let data_dir = use_hook(|| std::env::var(DATA_DIR_ENV).ok());

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts on change.
        div {
            key: "{lang_code()}",
            DashboardRoot { data_dir,
                Router::<Route> { }
            }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Layout route: the shared navbar above the desktop `Route` outlet.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
