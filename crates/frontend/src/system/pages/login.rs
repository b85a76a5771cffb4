use contracts::shared::i18n::MessageKey;
use contracts::system::credentials::CredentialError;
use contracts::system::login_form::{BannerKind, LoginForm, LoginPhase};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::i18n::language_switcher::LanguageSwitcher;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::network::is_online;
use crate::system::auth::{api, context::use_session};

/// Delay between the success banner and the switch to the purchase-order page.
const REDIRECT_DELAY_MS: u32 = 1_500;

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();
    let navigate = use_navigate();

    let remembered = session.settings.with_untracked(|s| s.remembered_user.clone());
    let form = RwSignal::new(LoginForm::new(remembered));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = form.try_update(|f| f.begin_submit(is_online())).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = api::login(&request).await;
            if let Err(e) = &outcome {
                log::error!("login failed: {}", e);
            }
            let user = outcome.as_ref().ok().cloned();
            let remember = form
                .try_update(|f| f.complete(outcome.map(|_| ())))
                .flatten();

            if let Some(identifier) = remember {
                session.remember_user(&identifier);
            }
            if let Some(user) = user {
                session.user.set(Some(user));
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                navigate("/purchase-orders", Default::default());
            }
        });
    };

    let field_error = move |select: fn(&LoginForm) -> Option<CredentialError>| {
        move || form.with(|f| select(f).map(|e| i18n.t(e.message_key())))
    };
    let username_error = field_error(|f| f.username_error);
    let password_error = field_error(|f| f.password_error);

    let submitting = move || form.with(|f| f.phase == LoginPhase::Submitting);

    view! {
        <div class="login-page">
            <header class="login-page__header">
                <LanguageSwitcher />
            </header>

            <div class="login-page__content">
                <section class="login-page__welcome">
                    <h1>{move || i18n.t(MessageKey::WelcomeTitle)}</h1>
                    <p>{move || i18n.t(MessageKey::WelcomeSubtitle)}</p>
                </section>

                <div class="login-box">
                    <h2>{move || i18n.t(MessageKey::LoginTitle)}</h2>
                    <p class="login-box__subtitle">{move || i18n.t(MessageKey::LoginSubtitle)}</p>

                    {move || form.with(|f| f.banner).map(|banner| {
                        let class = match banner.kind {
                            BannerKind::Success => "alert alert--success",
                            BannerKind::Error => "alert alert--error",
                        };
                        let glyph = match banner.kind {
                            BannerKind::Success => icon("check"),
                            BannerKind::Error => icon("alert"),
                        };
                        view! {
                            <div class=class role="alert">
                                {glyph}
                                <span>{i18n.t(banner.key)}</span>
                            </div>
                        }
                    })}

                    <form on:submit=on_submit novalidate=true>
                        <div class="form-group">
                            <label for="username">{move || i18n.t(MessageKey::UsernameLabel)}</label>
                            <input
                                type="text"
                                id="username"
                                name="username"
                                autocomplete="username"
                                placeholder=move || i18n.t(MessageKey::UsernamePlaceholder)
                                prop:value=move || form.with(|f| f.username.clone())
                                on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                                on:blur=move |_| form.update(|f| f.blur_username())
                                aria-invalid=move || username_error().is_some().to_string()
                                aria-describedby=move || username_error().map(|_| "username-error")
                                disabled=submitting
                            />
                            {move || username_error().map(|msg| view! {
                                <p id="username-error" class="form-error">{msg}</p>
                            })}
                        </div>

                        <div class="form-group">
                            <label for="password">{move || i18n.t(MessageKey::PasswordLabel)}</label>
                            <div class="password-field">
                                <input
                                    type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                                    id="password"
                                    name="password"
                                    autocomplete="current-password"
                                    placeholder=move || i18n.t(MessageKey::PasswordPlaceholder)
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                                    on:blur=move |_| form.update(|f| f.blur_password())
                                    aria-invalid=move || password_error().is_some().to_string()
                                    aria-describedby=move || password_error().map(|_| "password-error")
                                    disabled=submitting
                                />
                                <button
                                    type="button"
                                    class="password-field__toggle"
                                    aria-label=move || if form.with(|f| f.show_password) {
                                        i18n.t(MessageKey::HidePassword)
                                    } else {
                                        i18n.t(MessageKey::ShowPassword)
                                    }
                                    on:click=move |_| form.update(|f| f.toggle_password_visibility())
                                >
                                    {move || if form.with(|f| f.show_password) { icon("eye-off") } else { icon("eye") }}
                                </button>
                            </div>
                            {move || password_error().map(|msg| view! {
                                <p id="password-error" class="form-error">{msg}</p>
                            })}
                        </div>

                        <div class="form-row">
                            <label class="form__checkbox-wrapper" for="remember">
                                <input
                                    type="checkbox"
                                    id="remember"
                                    class="form__checkbox"
                                    prop:checked=move || form.with(|f| f.remember)
                                    on:change=move |ev| form.update(|f| f.set_remember(event_target_checked(&ev)))
                                />
                                <span>{move || i18n.t(MessageKey::RememberMe)}</span>
                            </label>
                            <a href="#" class="link" on:click=|ev| ev.prevent_default()>
                                {move || i18n.t(MessageKey::ForgotPassword)}
                            </a>
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || !form.with(|f| f.can_submit())
                        >
                            {move || if submitting() {
                                i18n.t(MessageKey::LoggingIn)
                            } else {
                                i18n.t(MessageKey::LogIn)
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
