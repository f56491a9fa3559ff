use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::store::use_admin_store;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Textarea};

#[component]
pub fn CategoryDetails(
    vm: CategoryDetailsViewModel,
    on_saved: Callback<Category>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_admin_store().categories;

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { "Edit Category" } else { "Add Category" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label>"Name"</label>
                    <Input value=vm.name placeholder="Category name" />
                </div>
                <div class="form-group">
                    <label>"Description"</label>
                    <Textarea value=vm.description placeholder="Optional description" />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(store, on_saved)
                    disabled=Signal::derive(move || vm.saving.get() || !vm.is_valid())
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else if vm.is_edit_mode() { "Update" } else { "Add" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {icon("cancel")}
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
