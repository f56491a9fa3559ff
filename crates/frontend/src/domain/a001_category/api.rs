use crate::shared::api_utils::{ApiClient, ApiError};
use contracts::domain::a001_category::aggregate::{
    Category, CategoryId, CreateCategoryDto, UpdateCategoryDto,
};
use contracts::domain::common::AggregateId;

/// The list lives under the admin prefix; writes go to `/categories`.
pub async fn fetch_categories(client: &ApiClient, list_path: &str) -> Result<Vec<Category>, ApiError> {
    client.get_json(list_path).await
}

pub async fn create_category(client: &ApiClient, dto: &CreateCategoryDto) -> Result<Category, ApiError> {
    client.post_json("/categories", dto).await
}

pub async fn update_category(
    client: &ApiClient,
    id: CategoryId,
    dto: &UpdateCategoryDto,
) -> Result<Category, ApiError> {
    client
        .put_json(&format!("/categories/{}", id.as_string()), dto)
        .await
}

pub async fn delete_category(client: &ApiClient, id: CategoryId) -> Result<(), ApiError> {
    client.delete(&format!("/categories/{}", id.as_string())).await
}
