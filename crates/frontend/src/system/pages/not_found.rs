use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::i18n::use_i18n;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="not-found-page">
            <h1>{move || i18n.t(MessageKey::NotFoundTitle)}</h1>
            <h2>{move || i18n.t(MessageKey::NotFoundMessage)}</h2>
            <A href="/login">{move || i18n.t(MessageKey::BackToLogin)}</A>
        </div>
    }
}
