//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

use api::ApiConfig;

mod theme;
pub use theme::{logo_path, theme_for, Theme};

mod user_card;
pub use user_card::UserCard;

mod user_panel;
pub use user_panel::UserPanel;

/// Get the [`ApiConfig`] the app shell provided through context.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>()
}
