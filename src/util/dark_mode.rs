//! Reflect the active theme on the document root.
//!
//! Sets `data-theme` on `<html>` and toggles the `dark` class so stylesheet
//! rules for either convention apply. Requires a browser environment; native
//! builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

/// Class present on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Apply `theme` to the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
            let class_list = el.class_list();
            let _ = if theme.is_dark() {
                class_list.add_1(DARK_CLASS)
            } else {
                class_list.remove_1(DARK_CLASS)
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// CSS modifier for page containers, e.g. `user-list--dark`.
pub fn themed_class(base: &str, theme: Theme) -> String {
    format!("{base} {base}--{}", theme.as_str())
}
