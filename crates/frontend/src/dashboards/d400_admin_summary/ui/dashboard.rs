use crate::domain::a003_order::ui::details::{OrderDetails, OrderDetailsViewModel};
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use crate::shared::store::use_admin_store;
use crate::shared::toast::use_toasts;
use contracts::dashboards::d400_admin_summary::DashboardSummary;
use contracts::domain::a003_order::aggregate::{Order, PaymentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "status-badge status-badge--pending",
        PaymentStatus::Paid => "status-badge status-badge--paid",
        PaymentStatus::Shipped => "status-badge status-badge--shipped",
        PaymentStatus::Delivered => "status-badge status-badge--delivered",
    }
}

/// Totals plus the latest orders; clicking an order opens its status dialog
#[component]
pub fn AdminSummaryDashboard() -> impl IntoView {
    let admin = use_admin_store();
    let dashboard = admin.dashboard;
    let orders = admin.orders;
    let toasts = use_toasts();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            if let Err(e) = dashboard.fetch(orders).await {
                toasts.error(e);
            }
        });
    };

    fetch();

    let figure = move |pick: fn(&DashboardSummary) -> f64| {
        Signal::derive(move || dashboard.summary().as_ref().map(pick))
    };

    let open_order = move |order: Order| {
        let vm = OrderDetailsViewModel::new(&order);
        modal_stack.push_guarded(
            Some("order-details-modal"),
            move || !vm.saving.get_untracked(),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_: Order| {
                        handle.close();
                        toasts.success("Order updated successfully");
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! {
                    <OrderDetails
                        vm=vm
                        order=order.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    // read from the orders slice so saved changes show without a reload
    let rows = move || {
        orders
            .resource
            .items()
            .into_iter()
            .map(|order| {
                let status = order.payment_status;
                let customer = order.customer_name.clone().unwrap_or_else(|| "-".to_string());
                let amount = format_money(order.total_price);
                let id = order.id.value();
                view! {
                    <tr class="table__row table__row--clickable" on:click=move |_| open_order(order.clone())>
                        <td class="table__cell">{format!("#{}", id)}</td>
                        <td class="table__cell">{customer}</td>
                        <td class="table__cell">{amount}</td>
                        <td class="table__cell">
                            <span class=status_class(status)>{status.display_name()}</span>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard" loading=Signal::derive(move || dashboard.is_loading())>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner message=Signal::derive(move || dashboard.error()) />

            <div class="stat-grid">
                <StatCard
                    label="Total Sales Money"
                    icon_name="sales"
                    accent="sales"
                    value=figure(|s| s.total_sales)
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Total Orders"
                    icon_name="orders"
                    accent="orders"
                    value=figure(|s| s.total_orders as f64)
                    format=ValueFormat::Count
                />
                <StatCard
                    label="Total Customers"
                    icon_name="customers"
                    accent="customers"
                    value=figure(|s| s.total_customers as f64)
                    format=ValueFormat::Count
                />
                <StatCard
                    label="Total Products"
                    icon_name="products"
                    accent="products"
                    value=figure(|s| s.total_products as f64)
                    format=ValueFormat::Count
                />
            </div>

            <div class="dashboard__section">
                <h2 class="dashboard__section-title">"Recent Orders"</h2>
                <Show
                    when=move || !orders.resource.is_empty()
                    fallback=move || view! {
                        <Show when=move || !dashboard.is_loading()>
                            <p class="empty-state">"No recent orders."</p>
                        </Show>
                    }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Order ID"</th>
                                    <th class="table__header-cell">"Customer"</th>
                                    <th class="table__header-cell">"Amount"</th>
                                    <th class="table__header-cell">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_its_own_badge() {
        let classes: Vec<_> = PaymentStatus::all().into_iter().map(status_class).collect();
        assert_eq!(classes.len(), 4);
        for (i, class) in classes.iter().enumerate() {
            assert!(class.starts_with("status-badge "));
            assert!(!classes[i + 1..].contains(class));
        }
    }
}
