//! Sign-in / sign-up screen.

use api::Credentials;
use dioxus::prelude::*;
use store::SessionStore;
use ui::icons::{FaEnvelope, FaLock, FaUtensils};
use ui::{authenticate, use_api, use_session, AuthForm, Icon};

use super::follow;

#[component]
pub fn Auth() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(AuthForm::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Already signed in: go straight to the generator
    use_hook(|| {
        if let Some(redirect) = AuthForm::redirect_on_mount(&session.get()) {
            follow(nav, &session, redirect);
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials::new(email().trim(), password());
        let Some(mode) = form.write().begin_submit(&credentials) else {
            return;
        };
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            let result = authenticate(&api, &session, mode, &credentials).await;
            if let Some(redirect) = form.write().finish_submit(result) {
                follow(nav, &session, redirect);
            }
        });
    };

    let state = form();
    let mode = state.mode;
    let submitting = state.is_submitting();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-header",
                    span {
                        class: "auth-logo",
                        Icon { icon: FaUtensils, width: 32, height: 32 }
                    }
                    h1 { "{mode.heading()}" }
                    p { class: "muted", "{mode.subtitle()}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    label { r#for: "email", "Email address" }
                    div {
                        class: "input-with-icon",
                        Icon { icon: FaEnvelope, width: 16, height: 16 }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            disabled: submitting,
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    label { r#for: "password", "Password" }
                    div {
                        class: "input-with-icon",
                        Icon { icon: FaLock, width: 16, height: 16 }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{password}",
                            disabled: submitting,
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    if let Some(err) = state.error() {
                        p { class: "form-error", "{err}" }
                    }
                    if let Some(message) = state.message() {
                        p { class: "form-message", "{message}" }
                    }

                    button {
                        class: "primary full",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            "Processing..."
                        } else {
                            "{mode.submit_label()}"
                        }
                    }
                }

                p {
                    class: "auth-toggle",
                    "{mode.toggle_prompt()}"
                    button {
                        class: "link",
                        r#type: "button",
                        onclick: move |_| form.write().toggle_mode(),
                        "{mode.toggle_label()}"
                    }
                }
            }
        }
    }
}
