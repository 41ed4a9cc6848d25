use anyhow::Result;
use clap::ValueEnum;

use crate::store::{LocalStore, KEY_DARK};

/// Color theme, persisted as "1"/"0" under the `dark` key and reapplied on
/// every run from the stored value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn load(store: &LocalStore) -> Self {
        match store.get(KEY_DARK) {
            Some("1") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn persist(self, store: &mut LocalStore) -> Result<()> {
        store.set(KEY_DARK, if self == Theme::Dark { "1" } else { "0" })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
