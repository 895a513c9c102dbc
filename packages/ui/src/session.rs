//! Session and API handles shared through Dioxus context.

use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;
use store::{Session, SessionStore};

/// The injected session store every screen reads from.
///
/// Wraps whichever [`SessionStore`] the platform provides so views never reach
/// for browser storage directly.
#[derive(Clone)]
pub struct SessionContext(Rc<dyn SessionStore>);

impl SessionContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.0.get().token
    }

    /// Forget the signed-in user.
    pub fn sign_out(&self) {
        tracing::info!("Clearing session");
        self.0.clear();
    }
}

impl SessionStore for SessionContext {
    fn get(&self) -> Session {
        self.0.get()
    }

    fn set(&self, token: &str, email: &str) {
        self.0.set(token, email)
    }

    fn clear(&self) {
        self.0.clear()
    }
}

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `localStorage`
/// - **Native**: in-memory, lost on exit
pub fn make_session_store() -> impl SessionStore + 'static {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Get the API client provided by the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that makes the session store available to every screen.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| SessionContext::new(make_session_store()));

    rsx! {
        {children}
    }
}
