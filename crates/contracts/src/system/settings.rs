//! Persisted user settings: the remembered identifier and the UI language.
//!
//! Lifecycle: [`PersistedSettings::load`] runs once at start-up; the remembered
//! identifier is written at most once per successful remember-flagged login and
//! the language on every switch. The storage itself is abstracted so the
//! browser's `localStorage` and test doubles share this code.

use crate::shared::i18n::Language;

pub const REMEMBERED_USER_KEY: &str = "rememberedUser";
pub const LANGUAGE_KEY: &str = "language";

/// String key/value storage the settings are persisted to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistedSettings {
    pub remembered_user: Option<String>,
    pub language: Language,
}

impl PersistedSettings {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            remembered_user: store.get(REMEMBERED_USER_KEY).filter(|v| !v.is_empty()),
            language: store
                .get(LANGUAGE_KEY)
                .map(|code| Language::from_code(&code))
                .unwrap_or_default(),
        }
    }

    /// Store the identifier exactly as the user typed it (not normalized).
    pub fn remember_user(&mut self, store: &impl KeyValueStore, identifier: &str) {
        store.set(REMEMBERED_USER_KEY, identifier);
        self.remembered_user = Some(identifier.to_string());
    }

    pub fn set_language(&mut self, store: &impl KeyValueStore, language: Language) {
        store.set(LANGUAGE_KEY, language.as_str());
        self.language = language;
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store for tests.
    #[derive(Default)]
    pub struct MemoryStore(pub RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_load_defaults() {
        let store = MemoryStore::default();
        let settings = PersistedSettings::load(&store);
        assert_eq!(settings, PersistedSettings::default());
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_load_existing() {
        let store = MemoryStore::default();
        store.set(REMEMBERED_USER_KEY, "NC23550");
        store.set(LANGUAGE_KEY, "pt");
        let settings = PersistedSettings::load(&store);
        assert_eq!(settings.remembered_user.as_deref(), Some("NC23550"));
        assert_eq!(settings.language, Language::Pt);
    }

    #[test]
    fn test_writes_go_to_store() {
        let store = MemoryStore::default();
        let mut settings = PersistedSettings::load(&store);

        settings.remember_user(&store, "user123");
        settings.set_language(&store, Language::Pt);

        assert_eq!(store.get(REMEMBERED_USER_KEY).as_deref(), Some("user123"));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("pt"));
        assert_eq!(PersistedSettings::load(&store), settings);
    }
}
