use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` string signal.
/// An empty string means no date.
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            class="form__input"
            type="date"
            prop:value=move || value.get()
            prop:disabled=move || disabled.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
