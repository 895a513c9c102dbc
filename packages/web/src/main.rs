use dioxus::prelude::*;

use api::ApiClient;
use ui::SessionProvider;
use views::{Auth, NavLayout, NotFound, RecipeGenerator, SavedRecipes};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Auth {},
    #[layout(NavLayout)]
        #[route("/recipe-generator")]
        RecipeGenerator {},
        #[route("/saved-recipes")]
        SavedRecipes {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = config::load_config();
        tracing::info!("Using recipe backend at {}", config.base_url());
        ApiClient::from_config(&config)
    });

    rsx! {
        // Global app resources
        document::Title { "AI Recipe Generator" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
