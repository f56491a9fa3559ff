use super::api;
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::store::ResourceStore;
use contracts::domain::a002_product::aggregate::{Product, ProductForm, ProductId};
use contracts::shared::paging::PageWindow;
use leptos::prelude::*;

/// Products slice: holds only the page that was fetched last
#[derive(Clone, Copy)]
pub struct ProductStore {
    pub resource: ResourceStore<Product>,
    client: StoredValue<ApiClient>,
}

impl ProductStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: ResourceStore::new("products"),
            client: StoredValue::new(client),
        }
    }

    pub async fn fetch(self, window: PageWindow) -> Result<(), String> {
        let client = self.client.get_value();
        self.resource
            .fetch(api::fetch_products(&client, window))
            .await
    }

    pub async fn save(self, form: ProductForm) -> Result<Product, String> {
        let dto = form.to_dto()?;
        let client = self.client.get_value();
        match form.id {
            Some(id) => {
                let listed = self.resource.find_untracked(id);
                self.resource
                    .update(async move {
                        let mut product = api::update_product(&client, id, &dto).await?;
                        if let Some(listed) = listed {
                            product.inherit_joined(&listed);
                        }
                        Ok::<_, ApiError>(product)
                    })
                    .await
            }
            None => self.resource.create(api::create_product(&client, &dto)).await,
        }
    }

    pub async fn delete(self, id: ProductId) -> Result<(), String> {
        let client = self.client.get_value();
        self.resource
            .delete(id, api::delete_product(&client, id))
            .await
    }
}
