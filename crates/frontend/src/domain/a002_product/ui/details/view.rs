use super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::store::use_admin_store;
use crate::usecases::use_service_clients;
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Input, Select, Textarea};

#[component]
pub fn ProductDetails(
    vm: ProductDetailsViewModel,
    on_saved: Callback<Product>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let admin = use_admin_store();
    let products = admin.products;
    let categories = admin.categories;
    let services = use_service_clients();

    // the select must offer categories created since the last visit
    spawn_local(async move {
        if let Err(e) = categories.fetch().await {
            vm.error.set(Some(format!("Could not load categories: {}", e)));
        }
    });

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { "Edit Product" } else { "Add Product" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label>"Name"</label>
                    <Input value=vm.name placeholder="Product name" />
                </div>

                <div class="form-group">
                    <div class="form-group__label-row">
                        <label>"Description"</label>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.generate_command(services.description)
                            disabled=move || vm.is_busy() || vm.name.get().trim().is_empty()
                        >
                            {icon("sparkles")}
                            {move || if vm.generating.get() { "Generating..." } else { "Generate" }}
                        </Button>
                    </div>
                    <Textarea value=vm.description placeholder="Description" />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Price"</label>
                        <Input value=vm.price placeholder="0.00" />
                    </div>
                    <div class="form-group">
                        <label>"Stock"</label>
                        <Input value=vm.stock placeholder="0" />
                    </div>
                </div>

                <div class="form-group">
                    <label>"Image URL"</label>
                    <Input value=vm.image_url placeholder="https://..." />
                </div>

                <div class="form-group">
                    <label>"Category"</label>
                    <Select value=vm.category_id>
                        <option value="">"Select category"</option>
                        {move || {
                            categories
                                .resource
                                .items()
                                .into_iter()
                                .map(|cat| {
                                    let value = cat.id.value().to_string();
                                    let selected = vm.category_id.get_untracked() == value;
                                    view! { <option value=value selected=selected>{cat.name}</option> }
                                })
                                .collect_view()
                        }}
                    </Select>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(products, on_saved)
                    disabled=move || vm.is_busy() || !vm.is_valid()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else if vm.is_edit_mode() { "Update" } else { "Add" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=move || vm.saving.get()
                >
                    {icon("cancel")}
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
