pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------+
/// |  Sidebar  |  TopHeader             |
/// |           +------------------------+
/// |  (Left)   |  active page (Center)  |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>
            <div class="app-body">
                <TopHeader />
                <center::Center />
            </div>
        </div>
    }
}
