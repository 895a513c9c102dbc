//! # `localStorage` session store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the token and email in the browser's `localStorage` under
//! [`TOKEN_KEY`] and [`EMAIL_KEY`], so a session survives reloads until the user
//! logs out.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (privacy modes, sandboxed iframes) or reject
//! writes (quota). Reads degrade to "no session"; failed writes are logged and
//! otherwise ignored so the UI never crashes on storage problems.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::session::{Session, SessionStore, EMAIL_KEY, TOKEN_KEY};

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn read(storage: &Storage, key: &str) -> Option<String> {
        storage.get_item(key).ok().flatten()
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Session {
        let Some(storage) = Self::storage() else {
            return Session::default();
        };
        Session::from_raw(
            Self::read(&storage, TOKEN_KEY),
            Self::read(&storage, EMAIL_KEY),
        )
    }

    fn set(&self, token: &str, email: &str) {
        let Some(storage) = Self::storage() else {
            tracing::error!("localStorage unavailable; session not persisted");
            return;
        };
        for (key, value) in [(TOKEN_KEY, token), (EMAIL_KEY, email)] {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write {key}: {}", describe(&e));
            }
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        for key in [TOKEN_KEY, EMAIL_KEY] {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove {key}: {}", describe(&e));
            }
        }
    }
}
