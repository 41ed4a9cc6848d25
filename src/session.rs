use anyhow::Result;

use crate::store::{LocalStore, KEY_ACCESS, KEY_USERNAME};

/// Persisted login state: the bearer token plus the username it was issued
/// for. This is the single owner of the `access`/`username` keys; everything
/// that sends authenticated requests reads the token through here.
pub struct SessionStore {
    store: LocalStore,
}

impl SessionStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Stored token, empty string when logged out.
    pub fn token(&self) -> String {
        self.store.get(KEY_ACCESS).unwrap_or_default().to_string()
    }

    /// Stored username, empty string when absent.
    pub fn username(&self) -> String {
        self.store
            .get(KEY_USERNAME)
            .unwrap_or_default()
            .to_string()
    }

    pub fn is_logged_in(&self) -> bool {
        !self.token().is_empty()
    }

    /// Persists each field only when non-empty; an empty field leaves the
    /// stored value untouched.
    pub fn save(&mut self, access: &str, username: &str) -> Result<()> {
        if !access.is_empty() {
            self.store.set(KEY_ACCESS, access)?;
        }
        if !username.is_empty() {
            self.store.set(KEY_USERNAME, username)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(KEY_ACCESS)?;
        self.store.remove(KEY_USERNAME)
    }
}
