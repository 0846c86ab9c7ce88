use crate::components::dashboard::Dashboard;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors, one per page.
///
/// `ui` does not know the platform `Route` enum, so each platform crate
/// registers closures that build a `Link` around the localized label:
///
/// ```ignore
/// register_nav(NavBuilder {
///     work: |label| rsx!( Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Work {}, "{label}" } ),
///     // ...
/// });
/// ```
pub struct NavBuilder {
    pub work: fn(label: &str) -> Element,
    pub health: fn(label: &str) -> Element,
    pub misc: fn(label: &str) -> Element,
    pub archive: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = i18n::use_language_marker();
    debug!(lang = %lang_marker, "navbar render");

    let owner = try_use_context::<Dashboard>().map(|data| {
        (
            data.config.owner_name.clone(),
            data.config.header_image_url.clone(),
        )
    });

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let work = (b.work)(&t!("nav-work"));
        let health = (b.health)(&t!("nav-health"));
        let misc = (b.misc)(&t!("nav-misc"));
        let archive = (b.archive)(&t!("nav-archive"));

        rsx! {
            nav { class: "navbar__links",
                {work}
                {health}
                {misc}
                {archive}
            }
        }
    });

    let title = t!("app-title");
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    if let Some((_, image)) = owner.as_ref().filter(|(_, image)| !image.is_empty()) {
                        img { class: "navbar__brand-image", src: "{image}", alt: "" }
                    }
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "{title}" }
                    }
                    if let Some((name, _)) = owner.as_ref().filter(|(name, _)| !name.is_empty()) {
                        span { class: "navbar__brand-owner", "{name}" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
