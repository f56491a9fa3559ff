use super::api;
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::store::ResourceStore;
use contracts::domain::a003_order::aggregate::{Order, OrderForm, OrderId};
use leptos::prelude::*;

/// Orders slice. There is no list endpoint; the dashboard seeds it with the
/// recent orders it receives.
#[derive(Clone, Copy)]
pub struct OrderStore {
    pub resource: ResourceStore<Order>,
    client: StoredValue<ApiClient>,
}

impl OrderStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: ResourceStore::new("orders"),
            client: StoredValue::new(client),
        }
    }

    pub fn seed(&self, orders: Vec<Order>) {
        self.resource.seed(orders);
    }

    /// Send the new status and delivery date. When the server answers with
    /// a bare message the loaded copy is patched with the submitted fields.
    pub async fn update(self, id: OrderId, form: OrderForm) -> Result<Order, String> {
        let dto = form.to_dto()?;
        let client = self.client.get_value();
        let local = self.resource.find_untracked(id);
        self.resource
            .update(async move {
                let response = api::update_order(&client, id, &dto).await?;
                match response.into_order() {
                    Some(order) => Ok(order),
                    None => local
                        .map(|mut order| {
                            order.apply_update(&dto);
                            order
                        })
                        .ok_or_else(|| {
                            ApiError::Decode(format!("order {} missing from response", id.value()))
                        }),
                }
            })
            .await
    }
}
