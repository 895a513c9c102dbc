use dioxus::prelude::*;
use store::{Session, SessionStore};

use crate::icons::{FaBookmark, FaRightFromBracket, FaUtensils};
use crate::session::use_session;
use crate::Icon;

/// What the navigation bar shows, captured once when it mounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub email: Option<String>,
}

impl NavbarState {
    pub fn from_session(session: &Session) -> Self {
        Self {
            email: session.email.clone(),
        }
    }

    /// Saved-recipes link and logout are only offered to a known user.
    pub fn shows_private_links(&self) -> bool {
        self.email.is_some()
    }
}

#[component]
pub fn Navbar(
    on_home: EventHandler<()>,
    on_saved: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let session = use_session();
    // Read once; later session changes elsewhere are not tracked.
    let mut state = use_signal(|| NavbarState::from_session(&session.get()));

    let handle_logout = move |_| {
        session.sign_out();
        state.set(NavbarState::default());
        on_logout.call(());
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                button {
                    class: "navbar-brand",
                    onclick: move |_| on_home.call(()),
                    Icon { icon: FaUtensils, width: 28, height: 28 }
                    span { "AI Recipe Generator" }
                }
                div {
                    class: "navbar-actions",
                    if state().shows_private_links() {
                        button {
                            class: "navbar-link",
                            onclick: move |_| on_saved.call(()),
                            Icon { icon: FaBookmark, width: 14, height: 14 }
                            "Saved"
                        }
                        button {
                            class: "navbar-link navbar-logout",
                            onclick: handle_logout,
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
