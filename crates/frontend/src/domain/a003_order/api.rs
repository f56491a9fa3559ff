use crate::shared::api_utils::{ApiClient, ApiError};
use contracts::domain::a003_order::aggregate::{OrderId, UpdateOrderDto, UpdateOrderResponse};
use contracts::domain::common::AggregateId;

pub async fn update_order(
    client: &ApiClient,
    id: OrderId,
    dto: &UpdateOrderDto,
) -> Result<UpdateOrderResponse, ApiError> {
    client
        .put_json(&format!("/admin/orders/{}", id.as_string()), dto)
        .await
}
