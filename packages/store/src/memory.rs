use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::session::{Session, SessionStore, EMAIL_KEY, TOKEN_KEY};

/// In-memory SessionStore for testing and native fallback.
///
/// Clones share the same entries, mirroring how every tab of a browser profile
/// sees one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Session {
        let entries = self.lock();
        Session::from_raw(
            entries.get(TOKEN_KEY).cloned(),
            entries.get(EMAIL_KEY).cloned(),
        )
    }

    fn set(&self, token: &str, email: &str) {
        let mut entries = self.lock();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(EMAIL_KEY.to_string(), email.to_string());
    }

    fn clear(&self) {
        let mut entries = self.lock();
        entries.remove(TOKEN_KEY);
        entries.remove(EMAIL_KEY);
    }
}
