use dioxus::prelude::*;

use api::UsersApi;
use store::{edit_outcome, reduce, CreateDraft, EditDraft, EditOutcome, ListEvent, User};

use crate::theme::{logo_path, theme_for};
use crate::{use_api_config, UserCard};

/// CRUD panel for the users collection of one named backend.
///
/// Fetches the collection when mounted and again whenever `backend`
/// changes, and re-renders local state after each confirmed mutation.
/// Failures go to the log and are otherwise swallowed; the list and the
/// form drafts only ever change on a confirmed success.
#[component]
pub fn UserPanel(backend: ReadOnlySignal<String>) -> Element {
    let config = use_api_config();
    let mut users = use_signal(Vec::<User>::new);
    let mut create_draft = use_signal(CreateDraft::default);
    let mut edit_draft = use_signal(EditDraft::default);

    // Load the collection on mount and on backend change. The response is
    // dropped if the backend name has moved on by the time it arrives.
    let fetch_config = config.clone();
    let _loader = use_resource(move || {
        let config = fetch_config.clone();
        async move {
            let issued_for = backend();
            match UsersApi::new(&config, issued_for.clone()).list().await {
                Ok(fetched) => {
                    if issued_for == backend() {
                        users.set(reduce(users(), ListEvent::Fetched(fetched)));
                    }
                }
                Err(e) => tracing::error!("fetching users for {issued_for}: {e}"),
            }
        }
    });

    let create_config = config.clone();
    let on_create = move |evt: FormEvent| {
        evt.prevent_default();
        let config = create_config.clone();
        async move {
            let fields = create_draft().fields();
            match UsersApi::new(&config, backend()).create(&fields).await {
                Ok(created) => {
                    users.set(reduce(users(), ListEvent::Created(created)));
                    create_draft.write().clear();
                }
                Err(e) => tracing::error!("creating user: {e}"),
            }
        }
    };

    let update_config = config.clone();
    let on_update = move |evt: FormEvent| {
        evt.prevent_default();
        let config = update_config.clone();
        async move {
            let draft = edit_draft();
            match UsersApi::new(&config, backend())
                .update(&draft.id, &draft.fields())
                .await
            {
                Ok(()) => {
                    match edit_outcome(&users(), &draft.id) {
                        EditOutcome::Applied => {}
                        EditOutcome::NoMatch => tracing::warn!(
                            "update for id {} confirmed, but no such user is loaded",
                            draft.id
                        ),
                        EditOutcome::InvalidId => tracing::warn!(
                            "update sent with non-numeric id {:?}; local list left as-is",
                            draft.id
                        ),
                    }
                    users.set(reduce(
                        users(),
                        ListEvent::Updated {
                            id: draft.id.clone(),
                            fields: draft.fields(),
                        },
                    ));
                    edit_draft.write().clear();
                }
                Err(e) => tracing::error!("updating user {}: {e}", draft.id),
            }
        }
    };

    let theme = theme_for(&backend());

    rsx! {
        div {
            class: "user-panel {theme.panel}",

            img {
                class: "user-panel__logo",
                src: logo_path(&backend()),
                alt: "{backend} logo",
                width: "80",
                height: "80",
            }

            // Add user form
            form {
                class: "user-form",
                onsubmit: on_create,
                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: "{create_draft().name}",
                    oninput: move |evt| create_draft.write().name = evt.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{create_draft().email}",
                    oninput: move |evt| create_draft.write().email = evt.value(),
                }
                button { r#type: "submit", class: "btn btn--create", "Add User" }
            }

            // Update user form
            form {
                class: "user-form",
                onsubmit: on_update,
                input {
                    r#type: "text",
                    placeholder: "User ID",
                    value: "{edit_draft().id}",
                    oninput: move |evt| edit_draft.write().id = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: "{edit_draft().name}",
                    oninput: move |evt| edit_draft.write().name = evt.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{edit_draft().email}",
                    oninput: move |evt| edit_draft.write().email = evt.value(),
                }
                button { r#type: "submit", class: "btn btn--update", "Update User" }
            }

            // Display users
            div {
                class: "user-rows",
                for user in users() {
                    div {
                        key: "{user.id}",
                        class: "user-row",
                        UserCard { user: user.clone() }
                        button {
                            class: "btn {theme.button}",
                            onclick: {
                                let config = config.clone();
                                let id = user.id;
                                move |_| {
                                    let config = config.clone();
                                    async move {
                                        match UsersApi::new(&config, backend()).delete(id).await {
                                            Ok(()) => {
                                                users.set(reduce(users(), ListEvent::Deleted(id)));
                                            }
                                            Err(e) => {
                                                tracing::error!("deleting user {id}: {e}");
                                            }
                                        }
                                    }
                                }
                            },
                            "Delete User"
                        }
                    }
                }
            }
        }
    }
}
