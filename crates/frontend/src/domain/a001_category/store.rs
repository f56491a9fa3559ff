use super::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::store::ResourceStore;
use contracts::domain::a001_category::aggregate::{Category, CategoryForm, CategoryId};
use leptos::prelude::*;

/// Categories slice of the admin store
#[derive(Clone, Copy)]
pub struct CategoryStore {
    pub resource: ResourceStore<Category>,
    client: StoredValue<ApiClient>,
    list_path: StoredValue<String>,
}

impl CategoryStore {
    pub fn new(client: ApiClient, list_path: String) -> Self {
        Self {
            resource: ResourceStore::new("categories"),
            client: StoredValue::new(client),
            list_path: StoredValue::new(list_path),
        }
    }

    pub async fn fetch(self) -> Result<(), String> {
        let client = self.client.get_value();
        let path = self.list_path.get_value();
        self.resource
            .fetch(api::fetch_categories(&client, &path))
            .await
    }

    /// Create or update depending on whether the draft carries an id
    pub async fn save(self, form: CategoryForm) -> Result<Category, String> {
        let client = self.client.get_value();
        match form.id {
            Some(id) => {
                let dto = form.to_update_dto()?;
                self.resource
                    .update(api::update_category(&client, id, &dto))
                    .await
            }
            None => {
                let dto = form.to_create_dto()?;
                self.resource
                    .create(api::create_category(&client, &dto))
                    .await
            }
        }
    }

    pub async fn delete(self, id: CategoryId) -> Result<(), String> {
        let client = self.client.get_value();
        self.resource
            .delete(id, api::delete_category(&client, id))
            .await
    }
}
