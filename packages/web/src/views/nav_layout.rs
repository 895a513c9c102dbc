use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Shell for the signed-in screens: navigation bar above the routed page.
#[component]
pub fn NavLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_home: move |_| {
                nav.push(Route::RecipeGenerator {});
            },
            on_saved: move |_| {
                nav.push(Route::SavedRecipes {});
            },
            on_logout: move |_| {
                nav.replace(Route::Auth {});
            },
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths land on the auth screen, which forwards signed-in users on.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}, redirecting", segments.join("/"));
    nav.replace(Route::Auth {});
    rsx! {}
}
