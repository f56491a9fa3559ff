use crate::domain::a003_order::store::OrderStore;
use contracts::domain::a003_order::aggregate::{Order, OrderForm, OrderId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the order status dialog
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub id: OrderId,
    pub payment_status: RwSignal<String>,
    pub expected_delivery_date: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl OrderDetailsViewModel {
    pub fn new(order: &Order) -> Self {
        let form = OrderForm::from_order(order);
        Self {
            id: order.id,
            payment_status: RwSignal::new(form.payment_status),
            expected_delivery_date: RwSignal::new(form.expected_delivery_date),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    fn form(&self) -> OrderForm {
        OrderForm {
            payment_status: self.payment_status.get_untracked(),
            expected_delivery_date: self.expected_delivery_date.get_untracked(),
        }
    }

    pub fn save_command(&self, store: OrderStore, on_saved: Callback<Order>) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form();
        if let Err(e) = form.to_dto() {
            self.error.set(Some(e));
            return;
        }

        self.saving.set(true);
        self.error.set(None);
        let vm = *self;
        spawn_local(async move {
            let result = store.update(vm.id, form).await;
            vm.saving.set(false);
            match result {
                Ok(order) => on_saved.run(order),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}

