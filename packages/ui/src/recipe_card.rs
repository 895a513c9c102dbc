use api::{GeneratedRecipe, Recipe, RecipeId};
use dioxus::prelude::*;

use crate::generator::SaveStatus;
use crate::icons::{FaBolt, FaBookmark, FaChevronDown, FaTrashCan};
use crate::markdown::Markdown;
use crate::Icon;

const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

#[component]
fn NutritionSection(nutrition: String) -> Element {
    rsx! {
        div {
            class: "recipe-nutrition",
            h3 {
                Icon { icon: FaBolt, width: 18, height: 18 }
                "Nutritional Info"
            }
            Markdown { source: nutrition, class: "markdown-compact" }
        }
    }
}

/// A freshly generated recipe with its save button.
#[component]
pub fn RecipeCard(recipe: GeneratedRecipe, save: SaveStatus, on_save: EventHandler<()>) -> Element {
    let title = recipe.title().to_string();
    let saved = save == SaveStatus::Saved;
    let disabled = !matches!(save, SaveStatus::Unsaved | SaveStatus::Failed(_));
    let label = match save {
        SaveStatus::Saved => "Saved!",
        SaveStatus::Saving => "Saving...",
        _ => "Save Recipe",
    };

    rsx! {
        document::Stylesheet { href: CARDS_CSS }
        div {
            class: "recipe-card",
            if let Some(url) = recipe.image_url() {
                img { class: "recipe-image", src: "{url}", alt: "{title}" }
            }
            div {
                class: "recipe-body",
                button {
                    class: if saved { "recipe-save saved" } else { "recipe-save" },
                    disabled: disabled,
                    onclick: move |_| on_save.call(()),
                    Icon { icon: FaBookmark, width: 14, height: 14 }
                    "{label}"
                }
                if let SaveStatus::Failed(err) = &save {
                    p { class: "inline-error", "{err}" }
                }
                Markdown { source: recipe.content.clone() }
                if let Some(nutrition) = recipe.nutrition() {
                    NutritionSection { nutrition: nutrition.to_string() }
                }
            }
        }
    }
}

/// Placeholder shown while a recipe is being generated.
#[component]
pub fn RecipeSkeleton() -> Element {
    rsx! {
        document::Stylesheet { href: CARDS_CSS }
        div {
            class: "recipe-card skeleton",
            div { class: "skeleton-image" }
            div {
                class: "recipe-body",
                div { class: "skeleton-line w-3-4 tall" }
                div { class: "skeleton-line w-1-3" }
                div { class: "skeleton-line" }
                div { class: "skeleton-line w-5-6" }
            }
        }
    }
}

/// A saved recipe, collapsed to its title until clicked.
#[component]
pub fn SavedRecipeCard(
    recipe: Recipe,
    #[props(default)] deleting: bool,
    on_delete: EventHandler<RecipeId>,
) -> Element {
    let mut open = use_signal(|| false);
    let title = recipe.title().to_string();
    let id = recipe.id.clone();

    rsx! {
        document::Stylesheet { href: CARDS_CSS }
        div {
            class: "recipe-card",
            if let Some(url) = recipe.image_url() {
                img { class: "recipe-image short", src: "{url}", alt: "{title}" }
            }
            div {
                class: "saved-header",
                onclick: move |_| open.toggle(),
                h2 { "{title}" }
                div {
                    class: "saved-header-actions",
                    button {
                        class: "saved-delete",
                        "aria-label": "Delete recipe",
                        disabled: deleting,
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_delete.call(id.clone());
                        },
                        Icon { icon: FaTrashCan, width: 16, height: 16 }
                    }
                    span {
                        class: if open() { "chevron open" } else { "chevron" },
                        Icon { icon: FaChevronDown, width: 18, height: 18 }
                    }
                }
            }
            if open() {
                div {
                    class: "saved-body",
                    Markdown { source: recipe.content.clone() }
                    if let Some(nutrition) = recipe.nutrition() {
                        NutritionSection { nutrition: nutrition.to_string() }
                    }
                }
            }
        }
    }
}
