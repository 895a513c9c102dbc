//! This crate contains all shared UI for the workspace: the per-screen state
//! machines and the components the web app assembles into screens.

use store::Session;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod session;
pub use session::{make_session_store, use_api, use_session, SessionContext, SessionProvider};

pub mod auth;
pub use auth::{authenticate, AuthForm, AuthMode, AuthOutcome, AuthStatus};

pub mod generator;
pub use generator::{parse_ingredients, GeneratorState, SaveStatus};

pub mod saved;
pub use saved::{SavedRecipes, SavedView};

mod navbar;
pub use navbar::{Navbar, NavbarState};

pub mod markdown;
pub use markdown::{render_markdown, Markdown};

mod recipe_card;
pub use recipe_card::{RecipeCard, RecipeSkeleton, SavedRecipeCard};

#[cfg(test)]
mod testing;

/// Screen a state transition asks the app to move to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// The sign-in / sign-up screen. Protected screens send users here when the
    /// token is missing or rejected.
    Auth,
    Generator,
}

/// Guard for protected screens, checked once on mount.
pub fn require_session(session: &Session) -> Option<Redirect> {
    (!session.is_authenticated()).then_some(Redirect::Auth)
}
