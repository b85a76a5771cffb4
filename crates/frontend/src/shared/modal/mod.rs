use contracts::shared::i18n::MessageKey;
use leptos::ev;
use leptos::prelude::*;

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

/// Dialog over a dimmed overlay. Escape, the close button and a click on the
/// overlay all call `on_close`.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Line under the title
    #[prop(optional, into)]
    description: Option<Signal<String>>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Footer buttons (Save, Cancel, etc.)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();

    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{move || title.get()}</h2>
                        {description.map(|d| view! { <p class="modal-description">{move || d.get()}</p> })}
                    </div>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        aria-label=move || i18n.t(MessageKey::Close)
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|f| view! { <div class="modal-footer">{f()}</div> })}
            </div>
        </div>
    }
}
