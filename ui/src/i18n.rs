//! Localized UI strings for `habitboard-ui`.
//!
//! Fluent files live under `i18n/<lang-id>/habitboard-ui.ftl` and are embedded
//! with `rust-embed`; `en-US` is the fallback and the reference for keys.
//!
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-work");
//! let streak = t!("days-count", count = 12);
//! ```
//!
//! Chart axis titles and hover text are produced by the pure builders in
//! `charts` and are not localized.
use std::sync::Once;

use dioxus::prelude::{try_use_context, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Message lookup through [`LOADER`]: a key literal, optionally followed by `name = value` arguments.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fallback file path must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "habitboard-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Plain text only; no bidi isolation marks around interpolated values.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Current language code from the platform's global signal, if one is provided.
///
/// Reading it subscribes the calling component, so pages re-render with fresh
/// strings after the navbar switches language.
pub fn use_language_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "de-DE"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-work");
        assert_eq!(s, "Work");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        init();
        let _ = set_language("en-US");
        assert_eq!(fl!(&*LOADER, "days-count", count = 21), "21 Days");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-work");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-work");
        assert_eq!(before, after);
    }
}
