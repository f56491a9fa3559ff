//! Top bar: sidebar toggle, search box, theme toggle and the admin badge.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::store::use_admin_store;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use thaw::Input;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let theme = use_admin_store().theme;

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <div class="top-header__search">
                    <Input value=ctx.search placeholder="Search..." />
                </div>
            </div>

            <div class="top-header__actions">
                <ThemeToggle ctx=theme />
                <div class="top-header__user">
                    <span>"Admin"</span>
                    <img class="top-header__avatar" src="https://i.pravatar.cc/40" alt="profile" />
                </div>
            </div>
        </header>
    }
}
