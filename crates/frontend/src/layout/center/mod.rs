use crate::dashboards::AdminSummaryDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

/// Renders the page selected in the sidebar
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <main data-zone="center" class="app-main">
            {move || match ctx.active.get() {
                Page::Dashboard => view! { <AdminSummaryDashboard /> }.into_any(),
                Page::Products => view! { <ProductList /> }.into_any(),
                Page::Categories => view! { <CategoryList /> }.into_any(),
            }}
        </main>
    }
}
