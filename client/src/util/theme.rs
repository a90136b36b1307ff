//! Light/dark theme initialization and toggle.
//!
//! The preference lives under `"theme"` as `"dark"` or `"light"` and is
//! shown as a `dark-mode`/`light-mode` class on `<body>` plus a `data-theme`
//! attribute on `<html>`. Only a stored `"dark"` restores dark mode; a
//! missing or unrecognized value means light, whatever the system
//! color-scheme says.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::KeyValueStore;

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Stored representation of a preference.
pub(crate) fn stored_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Interpret a stored value. Anything other than `"dark"` is light.
pub(crate) fn parse_stored(raw: Option<&str>) -> bool {
    raw == Some("dark")
}

/// Class placed on `<body>`.
pub(crate) fn body_class(dark: bool) -> &'static str {
    if dark { "dark-mode" } else { "light-mode" }
}

/// Read the theme preference saved by a previous session.
pub fn read_preference(store: &impl KeyValueStore) -> bool {
    parse_stored(store.get(THEME_KEY).as_deref())
}

/// Apply the theme to the document.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = doc.body() {
            body.set_class_name(body_class(dark));
        }
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute("data-theme", stored_value(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body_class(dark);
    }
}

/// Flip the theme, apply and persist it, and return the new value.
pub fn toggle(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    store.set(THEME_KEY, stored_value(next));
    next
}
