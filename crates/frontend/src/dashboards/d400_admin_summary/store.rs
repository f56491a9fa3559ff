use super::api;
use crate::domain::a003_order::store::OrderStore;
use crate::shared::api_utils::ApiClient;
use crate::shared::store::{RequestStatus, SnapshotState};
use contracts::dashboards::d400_admin_summary::DashboardSummary;
use leptos::prelude::*;

/// Dashboard slice. A successful load also seeds the orders slice so the
/// order dialog edits the same records the table shows.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    state: RwSignal<SnapshotState<DashboardSummary>>,
    client: StoredValue<ApiClient>,
}

impl DashboardStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: RwSignal::new(SnapshotState::default()),
            client: StoredValue::new(client),
        }
    }

    pub fn summary(&self) -> Option<DashboardSummary> {
        self.state.with(|s| s.data.clone())
    }

    pub fn status(&self) -> RequestStatus {
        self.state.with(|s| s.status().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.status().is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.status().error().map(str::to_string))
    }

    pub async fn fetch(self, orders: OrderStore) -> Result<(), String> {
        let token = self.state.try_update(|s| s.begin()).unwrap_or_default();
        log::debug!("[dashboard] fetch dispatched ({})", token);
        let client = self.client.get_value();
        match api::fetch_summary(&client).await {
            Ok(summary) => {
                let recent = summary.recent_orders.clone();
                let applied = self
                    .state
                    .try_update(|s| s.loaded(token, summary))
                    .unwrap_or(false);
                if applied {
                    orders.seed(recent);
                } else {
                    log::debug!("[dashboard] fetch {} is stale, dropped", token);
                }
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("[dashboard] fetch {} failed: {}", token, message);
                self.state.update(|s| s.failed(token, message.clone()));
                Err(message)
            }
        }
    }
}
