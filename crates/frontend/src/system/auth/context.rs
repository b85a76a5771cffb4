use contracts::shared::i18n::Language;
use contracts::system::auth::LoginUser;
use contracts::system::settings::PersistedSettings;
use leptos::prelude::*;

use super::storage::LocalStorage;

/// Session-wide state: persisted settings and the logged-in user.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub settings: RwSignal<PersistedSettings>,
    pub user: RwSignal<Option<LoginUser>>,
}

impl SessionContext {
    pub fn language(&self) -> Language {
        self.settings.with(|s| s.language)
    }

    pub fn set_language(&self, language: Language) {
        self.settings
            .update(|s| s.set_language(&LocalStorage, language));
        apply_document_language(language);
    }

    pub fn remember_user(&self, identifier: &str) {
        self.settings
            .update(|s| s.remember_user(&LocalStorage, identifier));
    }

    /// Identifier shown in the page header.
    pub fn header_identifier(&self) -> Option<String> {
        let from_user = self
            .user
            .with(|u| u.as_ref().and_then(|u| u.display_name().map(str::to_string)));
        from_user.or_else(|| self.settings.with(|s| s.remembered_user.clone()))
    }
}

fn apply_document_language(language: Language) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", language.as_str());
    }
}

/// Loads the persisted settings once and provides the session context.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let settings = PersistedSettings::load(&LocalStorage);
    log::debug!("settings loaded, language: {}", settings.language.as_str());
    apply_document_language(settings.language);

    provide_context(SessionContext {
        settings: RwSignal::new(settings),
        user: RwSignal::new(None),
    });

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
