use crate::shared::icons::icon;
use contracts::shared::paging::PageWindow;
use leptos::prelude::*;

/// Previous/next controls for offset pagination.
///
/// There is no total count, so "next" is offered only while the loaded page
/// is full.
#[component]
pub fn PaginationControls(
    #[prop(into)] window: Signal<PageWindow>,
    /// Number of items on the page currently shown
    #[prop(into)]
    loaded: Signal<usize>,
    #[prop(into)] disabled: Signal<bool>,
    on_change: Callback<PageWindow>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(window.get_untracked().prev())
                disabled=move || disabled.get() || !window.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("Page {}", window.get().page_number())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(window.get_untracked().next())
                disabled=move || disabled.get() || !window.get().has_next(loaded.get())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
