use leptos::prelude::*;
use thaw::Spinner;

/// Title row of a list page with its action buttons on the right
#[component]
pub fn PageHeader(
    title: &'static str,
    /// Shows a spinner next to the title while the slice is loading
    #[prop(into, optional)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{title}</h1>
                <Show when=move || loading.get()>
                    <span class="page-header__spinner"><Spinner /></span>
                </Show>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

/// Error text of the current slice, if any
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{text}</span>
                </div>
            }
        })
    }
}
