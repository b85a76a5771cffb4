use leptos::prelude::*;

/// Native select with a label.
///
/// While `disabled`, the `placeholder` (e.g. "Loading cities...") is shown as
/// the only option; with no options the placeholder stands in as well.
#[component]
pub fn Select(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options: (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    placeholder: Signal<Option<String>>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {move || label.get()}
            </label>
            <select
                id=id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {move || {
                    let opts = options.get();
                    match placeholder.get() {
                        Some(text) if disabled.get() || opts.is_empty() => {
                            view! { <option value="" selected=true>{text}</option> }.into_any()
                        }
                        _ => opts
                            .into_iter()
                            .map(|(val, text)| {
                                let selected = value.get_untracked() == val;
                                view! { <option value=val selected=selected>{text}</option> }
                            })
                            .collect_view()
                            .into_any(),
                    }
                }}
            </select>
        </div>
    }
}
