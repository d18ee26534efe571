use dioxus::prelude::*;
use store::User;

/// Display helper for one user row. Read-only; actions live with the caller.
#[component]
pub fn UserCard(user: User) -> Element {
    rsx! {
        div {
            class: "user-card",
            span { class: "user-card__id", "#{user.id}" }
            div {
                class: "user-card__body",
                p { class: "user-card__name", "{user.name}" }
                p { class: "user-card__email", "{user.email}" }
            }
        }
    }
}
