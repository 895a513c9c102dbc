//! # Client session — the signed-in user's token and email
//!
//! A [`Session`] is the pair of values the browser keeps between reloads once a
//! user has signed in: the opaque bearer token handed out by the backend and the
//! email address the user signed in with. Both live under fixed storage keys
//! ([`TOKEN_KEY`], [`EMAIL_KEY`]) so every screen sees the same values.
//!
//! ## [`SessionStore`] trait
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`get`](SessionStore::get) | Current session; fields are `None` when never set or cleared. |
//! | [`set`](SessionStore::set) | Persists token and email together. |
//! | [`clear`](SessionStore::clear) | Removes both values. |
//!
//! No validation of the token format is performed. Empty stored values read back
//! as absent, so only a non-empty token makes a session authenticated.
//!
//! Implementations live in sibling modules ([`crate::MemoryStore`] for native
//! targets and tests, `LocalStorageStore` for the browser).

use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "recipe_token";

/// Storage key holding the signed-in user's email.
pub const EMAIL_KEY: &str = "user_email";

/// Token and email of the signed-in user, as read from storage.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl Session {
    /// Build a session from raw stored values, treating empty strings as absent.
    pub fn from_raw(token: Option<String>, email: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            email: email.filter(|e| !e.is_empty()),
        }
    }

    /// Whether a bearer token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .finish()
    }
}

/// Read/write access to the persisted session.
pub trait SessionStore {
    fn get(&self) -> Session;
    fn set(&self, token: &str, email: &str);
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn get(&self) -> Session {
        (**self).get()
    }

    fn set(&self, token: &str, email: &str) {
        (**self).set(token, email)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
