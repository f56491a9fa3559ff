use crate::domain::a002_product::ui::details::{ProductDetails, ProductDetailsViewModel};
use crate::domain::a002_product::ui::reviews::ProductReviews;
use crate::layout::global_context::{matches_search, AppGlobalContext};
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_app_config;
use crate::shared::dom::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use crate::shared::store::{use_admin_store, SnapshotState};
use crate::shared::toast::use_toasts;
use crate::usecases::u501_sentiment_analysis::api::analyze_reviews;
use crate::usecases::use_service_clients;
use contracts::domain::a002_product::aggregate::{Product, ProductId};
use contracts::shared::paging::PageWindow;
use contracts::usecases::u501_sentiment_analysis::ReviewSentiments;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let admin = use_admin_store();
    let store = admin.products;
    let categories = admin.categories;
    let services = use_service_clients();
    let toasts = use_toasts();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let search = use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found")
        .search;
    let page_size = use_app_config().with_value(|c| c.ui.page_size);

    let window = RwSignal::new(PageWindow::first(page_size));
    let sentiments = RwSignal::new(ReviewSentiments::new());
    // one batch per opened reviews dialog; only the newest may publish
    let batch = RwSignal::new(SnapshotState::<()>::default());
    let batch_pending = Signal::derive(move || batch.with(|b| b.status().is_loading()));

    let fetch = move || {
        let current = window.get_untracked();
        spawn_local(async move {
            if let Err(e) = store.fetch(current).await {
                toasts.error(e);
            }
        });
    };

    // refetch whenever the page window moves
    Effect::new(move |_| {
        window.track();
        fetch();
    });

    // names for products the backend returned without a joined category
    spawn_local(async move {
        if let Err(e) = categories.fetch().await {
            log::warn!("categories for the product table: {}", e);
        }
    });

    let category_label = move |product: &Product| -> String {
        if !product.category_name.is_empty() {
            return product.category_name.clone();
        }
        product
            .category_id
            .and_then(|id| categories.resource.find(id))
            .map(|c| c.name)
            .unwrap_or_else(|| "-".to_string())
    };

    let open_details = move |initial: Option<Product>| {
        let vm = ProductDetailsViewModel::new(initial.as_ref());
        let editing = vm.is_edit_mode();
        modal_stack.push_guarded(
            Some("product-details-modal"),
            move || !vm.saving.get_untracked(),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_: Product| {
                        handle.close();
                        toasts.success(if editing {
                            "Product updated successfully"
                        } else {
                            "Product added successfully"
                        });
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <ProductDetails vm=vm on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let show_reviews = move |product: Product| {
        sentiments.set(ReviewSentiments::new());
        let Some(token) = batch.try_update(|b| b.begin()) else {
            return;
        };
        let reviews = product.reviews.clone();
        spawn_local(async move {
            let client = services.sentiment.get_value();
            let outcome = analyze_reviews(&client, &reviews).await;
            if !batch.with_untracked(|b| b.is_latest(token)) {
                log::debug!("sentiment batch {} superseded", token);
                return;
            }
            match outcome {
                Ok(results) => {
                    batch.update(|b| {
                        b.loaded(token, ());
                    });
                    sentiments.set(results);
                }
                Err(e) => {
                    batch.update(|b| b.failed(token, e.message.clone()));
                    toasts.error(format!("Failed to analyze all reviews: {}", e.message));
                }
            }
        });

        modal_stack.push(Some("product-reviews-modal"), move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! {
                <ProductReviews
                    product_name=product.name.clone()
                    reviews=product.reviews.clone()
                    sentiments=sentiments
                    batch_pending=batch_pending
                    on_close=on_close
                />
            }
            .into_any()
        });
    };

    let delete = move |id: ProductId| {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        spawn_local(async move {
            match store.delete(id).await {
                Ok(()) => toasts.success("Product deleted successfully"),
                Err(e) => toasts.error(e),
            }
        });
    };

    let rows = move || {
        let query = search.get();
        store
            .resource
            .items()
            .into_iter()
            .filter(|prod| matches_search(&prod.name, &query))
            .map(|prod| {
                let id = prod.id;
                let category = category_label(&prod);
                let review_count = prod.reviews.len();
                let for_edit = prod.clone();
                let for_reviews = prod.clone();
                view! {
                    <tr class="table__row">
                        <td class="table__cell">
                            <img class="product-thumb" src=prod.image_url.clone() alt=prod.name.clone() />
                        </td>
                        <td class="table__cell table__cell--strong">{prod.name.clone()}</td>
                        <td class="table__cell">{format_money(prod.price)}</td>
                        <td class="table__cell">{category}</td>
                        <td class="table__cell">{prod.stock}</td>
                        <td class="table__cell">
                            {icon("star")}
                            {format!(" {:.1} ({})", prod.average_rating, prod.rating_count)}
                        </td>
                        <td class="table__cell">
                            {if review_count > 0 {
                                view! {
                                    <button
                                        class="button button--link"
                                        on:click=move |_| show_reviews(for_reviews.clone())
                                    >
                                        {format!("Show Reviews ({})", review_count)}
                                    </button>
                                }
                                .into_any()
                            } else {
                                view! { <span class="text-muted">"No reviews"</span> }.into_any()
                            }}
                        </td>
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
            <PageHeader title="Products" loading=Signal::derive(move || store.resource.is_loading())>
                <button class="button button--primary" on:click=move |_| open_details(None)>
                    {icon("plus")}
                    "Add Product"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner message=Signal::derive(move || store.resource.error()) />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Stock"</th>
                            <th class="table__header-cell">"Rating"</th>
                            <th class="table__header-cell">"Reviews"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || !store.resource.is_empty() || window.get().has_prev()>
                <PaginationControls
                    window=window
                    loaded=Signal::derive(move || store.resource.len())
                    disabled=Signal::derive(move || store.resource.is_loading())
                    on_change=Callback::new(move |next: PageWindow| window.set(next))
                />
            </Show>
        </div>
    }
}
