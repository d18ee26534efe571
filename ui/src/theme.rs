//! Backend-name keyed styling and asset lookups.

/// CSS classes for one backend's panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Class for the panel surface.
    pub panel: &'static str,
    /// Class for the row action button.
    pub button: &'static str,
}

/// Look up the theme for a backend name.
///
/// Unrecognized names fall back to the neutral default, so a panel for a
/// backend nobody themed still renders.
pub fn theme_for(backend: &str) -> Theme {
    match backend {
        "rust" => Theme {
            panel: "panel--rust",
            button: "btn--rust",
        },
        _ => Theme {
            panel: "panel--default",
            button: "btn--default",
        },
    }
}

/// Path of a backend's logo under the static asset root: `{backend}logo.svg`.
pub fn logo_path(backend: &str) -> String {
    format!("/assets/{backend}logo.svg")
}
