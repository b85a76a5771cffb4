//! Translation context.
//!
//! The active language lives in the persisted session settings; [`I18n::t`]
//! reads it reactively, so every label re-renders on a switch.

pub mod language_switcher;

use contracts::shared::i18n::{translate, Language, MessageKey};

use crate::system::auth::context::{use_session, SessionContext};

#[derive(Clone, Copy)]
pub struct I18n {
    session: SessionContext,
}

impl I18n {
    pub fn language(&self) -> Language {
        self.session.language()
    }

    /// Translate a message in the current language.
    pub fn t(&self, key: MessageKey) -> &'static str {
        translate(self.language(), key)
    }

    /// Switch and persist the language; applies immediately.
    pub fn set_language(&self, language: Language) {
        log::info!("language switched to {}", language.as_str());
        self.session.set_language(language);
    }
}

pub fn use_i18n() -> I18n {
    I18n {
        session: use_session(),
    }
}
