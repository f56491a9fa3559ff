use crate::domain::a001_category::ui::details::{CategoryDetails, CategoryDetailsViewModel};
use crate::layout::global_context::{matches_search, AppGlobalContext};
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::dom::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::store::use_admin_store;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let store = use_admin_store().categories;
    let toasts = use_toasts();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let search = use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found")
        .search;

    let fetch = move || {
        spawn_local(async move {
            if let Err(e) = store.fetch().await {
                toasts.error(e);
            }
        });
    };

    let open_details = move |initial: Option<Category>| {
        let vm = CategoryDetailsViewModel::new(initial.as_ref());
        let editing = vm.is_edit_mode();
        modal_stack.push_guarded(
            Some("category-details-modal"),
            move || !vm.saving.get_untracked(),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_: Category| {
                        handle.close();
                        toasts.success(if editing {
                            "Category updated successfully"
                        } else {
                            "Category added successfully"
                        });
                        fetch();
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <CategoryDetails vm=vm on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let delete = move |id: CategoryId| {
        if !confirm("Are you sure you want to delete this category?") {
            return;
        }
        spawn_local(async move {
            match store.delete(id).await {
                Ok(()) => toasts.success("Category deleted successfully"),
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    let rows = move || {
        let query = search.get();
        store
            .resource
            .items()
            .into_iter()
            .filter(|cat| matches_search(&cat.name, &query))
            .map(|cat| {
                let id = cat.id;
                let for_edit = cat.clone();
                view! {
                    <tr class="table__row">
                        <td class="table__cell">{id.value()}</td>
                        <td class="table__cell table__cell--strong">{cat.name.clone()}</td>
                        <td class="table__cell">
                            {if cat.description.is_empty() { "-".to_string() } else { cat.description.clone() }}
                        </td>
                        <td class="table__cell">{format_datetime(cat.created_at.as_ref())}</td>
                        <td class="table__cell">{format_datetime(cat.updated_at.as_ref())}</td>
                        <td class="table__cell table__cell--actions">
                            <button
                                class="button button--small button--secondary"
                                on:click=move |_| open_details(Some(for_edit.clone()))
                            >
                                {icon("edit")}
                                "Edit"
                            </button>
                            <button
                                class="button button--small button--danger"
                                on:click=move |_| delete(id)
                                title="Delete"
                            >
                                {icon("delete")}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader title="Categories" loading=Signal::derive(move || store.resource.is_loading())>
                <button class="button button--primary" on:click=move |_| open_details(None)>
                    {icon("plus")}
                    "Add Category"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner message=Signal::derive(move || store.resource.error()) />

            <Show
                when=move || !store.resource.is_empty()
                fallback=move || view! {
                    <Show when=move || !store.resource.is_loading()>
                        <p class="empty-state">"No categories found."</p>
                    </Show>
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"ID"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Description"</th>
                                <th class="table__header-cell">"Created At"</th>
                                <th class="table__header-cell">"Updated At"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
