use dioxus::router::Navigator;
use ui::{Redirect, SessionContext};

use crate::Route;

mod auth;
pub use auth::Auth;

mod recipe_generator;
pub use recipe_generator::RecipeGenerator;

mod saved_recipes;
pub use saved_recipes::SavedRecipes;

mod nav_layout;
pub use nav_layout::{NavLayout, NotFound};

/// Carry out a redirect requested by a screen's state machine.
///
/// Going back to the auth screen always drops the session, so a rejected token
/// is not offered again.
pub(crate) fn follow(nav: Navigator, session: &SessionContext, redirect: Redirect) {
    match redirect {
        Redirect::Auth => {
            session.sign_out();
            nav.replace(Route::Auth {});
        }
        Redirect::Generator => {
            nav.replace(Route::RecipeGenerator {});
        }
    }
}
