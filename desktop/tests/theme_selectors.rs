#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop binary inlines `ui/assets/theme/main.css`, so a renamed or dropped
class only shows up as unstyled markup at runtime. This test asserts that the
selectors the shared components emit are still present.

When renaming a selector, update the component markup and `REQUIRED_SELECTORS`
together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__title",
    ".page-error",
    ".page-not-found",
    // Sections
    ".page-section {",
    ".page-section--success",
    ".page-section--failure",
    ".page-section__badge",
    ".page-section__intro",
    // Controls
    ".radio-group",
    ".radio-group__option",
    ".toggle",
    // Charts
    ".chart {",
    ".chart__title",
    ".chart__canvas",
    ".chart__marker",
    ".chart__cursor",
    ".chart__legend-swatch",
    ".chart__placeholder",
    ".chart--error",
    ".heatmap__cell",
    ".schedule__bar",
    ".schedule__total",
    // Goal cards
    ".habit-panel",
    ".goal-card",
    ".goal-card--reached",
    ".goal-card__item",
    // Health page
    ".weight-layout",
    ".weight-layout__photo",
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__links",
    ".navbar__link {",
    ".navbar__link--active",
    ".navbar__brand-owner",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn navbar_styles_cover_active_link() {
    for sel in NAVBAR_SELECTORS {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css is missing `{sel}`");
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
