use contracts::shared::i18n::{Language, MessageKey};
use leptos::ev;
use leptos::prelude::*;

use super::use_i18n;

/// Language dropdown (flag button + list of languages).
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    let dropdown_open = RwSignal::new(false);

    // Close dropdown when clicking outside
    let handle = window_event_listener(ev::click, move |_| {
        if dropdown_open.get_untracked() {
            dropdown_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let select_language = move |language: Language| {
        i18n.set_language(language);
        dropdown_open.set(false);
    };

    view! {
        <div class="language-switcher">
            <button
                type="button"
                class="button button--ghost language-switcher__toggle"
                aria-label=move || i18n.t(MessageKey::SelectLanguage)
                aria-haspopup="listbox"
                aria-expanded=move || dropdown_open.get().to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    dropdown_open.update(|open| *open = !*open);
                }
            >
                <span aria-hidden="true">{move || i18n.language().flag()}</span>
                <span class="language-switcher__code">
                    {move || i18n.language().as_str().to_uppercase()}
                </span>
            </button>

            <Show when=move || dropdown_open.get()>
                <ul
                    class="language-switcher__menu"
                    role="listbox"
                    on:click=move |ev| ev.stop_propagation()
                >
                    {Language::all().into_iter().map(|language| {
                        let is_active = move || i18n.language() == language;
                        view! {
                            <li
                                role="option"
                                aria-selected=move || is_active().to_string()
                                class=move || if is_active() {
                                    "language-switcher__item language-switcher__item--active"
                                } else {
                                    "language-switcher__item"
                                }
                                on:click=move |_| select_language(language)
                            >
                                <span aria-hidden="true">{language.flag()}</span>
                                " "
                                {move || i18n.t(language.label_key())}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
