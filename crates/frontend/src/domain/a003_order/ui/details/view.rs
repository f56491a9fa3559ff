use super::view_model::OrderDetailsViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::store::use_admin_store;
use contracts::domain::a003_order::aggregate::{Order, PaymentStatus};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Select};

#[component]
pub fn OrderDetails(
    vm: OrderDetailsViewModel,
    order: Order,
    on_saved: Callback<Order>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let orders = use_admin_store().orders;
    let customer = order.customer_name.clone().unwrap_or_else(|| "-".to_string());

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>{format!("Order #{}", order.id.value())}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-summary">
                <div>"Customer: " <strong>{customer}</strong></div>
                <div>"Amount: " <strong>{format_money(order.total_price)}</strong></div>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label>"Payment Status"</label>
                    <Select value=vm.payment_status>
                        {PaymentStatus::all()
                            .into_iter()
                            .map(|status| {
                                let selected = vm.payment_status.get_untracked() == status.as_str();
                                view! {
                                    <option value=status.as_str() selected=selected>
                                        {status.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </Select>
                </div>

                <div class="form-group">
                    <label>"Expected Delivery Date"</label>
                    <DateInput value=vm.expected_delivery_date disabled=vm.saving />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(orders, on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
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
