use crate::shared::api_utils::{ApiClient, ApiError};
use contracts::dashboards::d400_admin_summary::DashboardSummary;

/// Headline totals and the latest orders
pub async fn fetch_summary(client: &ApiClient) -> Result<DashboardSummary, ApiError> {
    client.get_json("/admin").await
}
