//! Recipe generator screen.

use api::RecipeApi;
use dioxus::prelude::*;
use store::SessionStore;
use ui::icons::FaCarrot;
use ui::{require_session, use_api, use_session, GeneratorState, Icon, RecipeCard, RecipeSkeleton};

use super::follow;

#[component]
pub fn RecipeGenerator() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut state = use_signal(GeneratorState::default);
    let mut ingredients = use_signal(String::new);

    use_hook(|| {
        if let Some(redirect) = require_session(&session.get()) {
            follow(nav, &session, redirect);
        }
    });

    let generate = {
        let api = api.clone();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(list) = state.write().begin_generate(&ingredients()) else {
                return;
            };
            tracing::debug!("Generating recipe from {} ingredients", list.len());
            let api = api.clone();
            let session = session.clone();
            spawn(async move {
                let token = session.token().unwrap_or_default();
                let result = api.generate_recipe(&list, &token).await;
                if let Some(redirect) = state.write().finish_generate(result) {
                    follow(nav, &session, redirect);
                }
            });
        }
    };

    let save = move |_: ()| {
        let Some(recipe) = state.write().begin_save() else {
            return;
        };
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            let token = session.token().unwrap_or_default();
            let result = api.save_recipe(&recipe, &token).await;
            if let Some(redirect) = state.write().finish_save(result) {
                follow(nav, &session, redirect);
            }
        });
    };

    let current = state();
    let generating = current.is_generating();

    rsx! {
        div {
            class: "page",
            section {
                class: "generator-panel",
                h1 {
                    Icon { icon: FaCarrot, width: 24, height: 24 }
                    "What's in your kitchen?"
                }
                p { class: "muted", "List your ingredients, separated by commas." }
                form {
                    class: "generator-form",
                    onsubmit: generate,
                    input {
                        r#type: "text",
                        placeholder: "e.g. chicken, rice, garlic",
                        value: "{ingredients}",
                        disabled: generating,
                        oninput: move |evt| ingredients.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: generating || ingredients().trim().is_empty(),
                        if generating {
                            "Generating..."
                        } else {
                            "Generate Recipe"
                        }
                    }
                }
                if let Some(err) = current.error() {
                    p { class: "form-error", "{err}" }
                }
            }

            if generating {
                RecipeSkeleton {}
            }
            if let Some(recipe) = current.recipe() {
                RecipeCard {
                    recipe: recipe.clone(),
                    save: current.save_status().cloned().unwrap_or_default(),
                    on_save: save,
                }
            }
        }
    }
}
