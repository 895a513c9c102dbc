//! Saved recipes screen.

use api::{RecipeApi, RecipeId};
use dioxus::prelude::*;
use store::SessionStore;
use ui::icons::{FaBookmark, FaInbox, FaSpinner};
use ui::views::ConfirmDialog;
use ui::{require_session, use_api, use_session, Icon, SavedRecipeCard, SavedView};

use super::follow;

#[component]
pub fn SavedRecipes() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut state = use_signal(ui::SavedRecipes::new);

    use_hook(|| {
        if let Some(redirect) = require_session(&session.get()) {
            follow(nav, &session, redirect);
        }
    });

    // Load once on mount
    let _loader = use_resource({
        let api = api.clone();
        let session = session.clone();
        move || {
            let api = api.clone();
            let session = session.clone();
            async move {
                let Some(token) = session.token() else {
                    return;
                };
                let result = api.list_recipes(&token).await;
                if let Some(redirect) = state.write().finish_load(result) {
                    follow(nav, &session, redirect);
                }
            }
        }
    });

    let confirm_delete = move |_: ()| {
        let Some(id) = state.write().confirm_delete() else {
            return;
        };
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            let token = session.token().unwrap_or_default();
            let result = api.delete_recipe(&id, &token).await;
            if let Some(redirect) = state.write().finish_delete(&id, result) {
                follow(nav, &session, redirect);
            }
        });
    };

    let current = state();

    rsx! {
        div {
            class: "page",
            h1 {
                class: "page-title",
                Icon { icon: FaBookmark, width: 22, height: 22 }
                "Saved Recipes"
            }

            if let Some(notice) = current.notice() {
                div {
                    class: "notice",
                    span { "{notice}" }
                    button {
                        class: "link",
                        onclick: move |_| state.write().dismiss_notice(),
                        "Dismiss"
                    }
                }
            }

            {match current.view() {
                SavedView::Loading => rsx! {
                    div {
                        class: "loading",
                        span { class: "spin", Icon { icon: FaSpinner, width: 28, height: 28 } }
                        "Loading recipes..."
                    }
                },
                SavedView::Error(err) => rsx! {
                    p { class: "form-error", "{err}" }
                },
                SavedView::Empty => rsx! {
                    div {
                        class: "empty-state",
                        Icon { icon: FaInbox, width: 40, height: 40 }
                        p { class: "empty-title", "No recipes saved yet." }
                        p { class: "muted", "Generate a recipe to save it for later!" }
                    }
                },
                SavedView::List(recipes) => rsx! {
                    for recipe in recipes.iter() {
                        SavedRecipeCard {
                            key: "{recipe.id}",
                            recipe: recipe.clone(),
                            deleting: current.is_deleting(&recipe.id),
                            on_delete: move |id: RecipeId| state.write().request_delete(id),
                        }
                    }
                },
            }}

            if current.pending_delete().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this recipe?",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| state.write().cancel_delete(),
                }
            }
        }
    }
}
