use crate::shared::api_utils::{ApiClient, ApiError};
use contracts::domain::a002_product::aggregate::{parse_product_list, Product, ProductDto, ProductId};
use contracts::domain::common::AggregateId;
use contracts::shared::paging::PageWindow;

/// `GET /products?limit=&offset=`
pub async fn fetch_products(client: &ApiClient, window: PageWindow) -> Result<Vec<Product>, ApiError> {
    let query = serde_qs::to_string(&window).map_err(|e| ApiError::Encode(e.to_string()))?;
    let raw: serde_json::Value = client.get_json(&format!("/products?{}", query)).await?;
    parse_product_list(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn create_product(client: &ApiClient, dto: &ProductDto) -> Result<Product, ApiError> {
    client.post_json("/products", dto).await
}

pub async fn update_product(client: &ApiClient, id: ProductId, dto: &ProductDto) -> Result<Product, ApiError> {
    client
        .put_json(&format!("/products/{}", id.as_string()), dto)
        .await
}

pub async fn delete_product(client: &ApiClient, id: ProductId) -> Result<(), ApiError> {
    client.delete(&format!("/products/{}", id.as_string())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_query_string() {
        let query = serde_qs::to_string(&PageWindow::first(10).next()).unwrap();
        assert_eq!(query, "limit=10&offset=10");
    }
}
