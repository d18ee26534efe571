use dioxus::prelude::*;

use api::ApiConfig;
use ui::UserPanel;

/// Backends the shell exposes; each gets its own panel.
const BACKENDS: &[&str] = &["rust"];

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiConfig::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        main {
            class: "app",
            h1 { class: "app__title", "Userboard" }
            div {
                class: "app__panels",
                for backend in BACKENDS {
                    UserPanel { key: "{backend}", backend: backend.to_string() }
                }
            }
        }
    }
}
