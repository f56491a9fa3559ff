use crate::dashboards::d400_admin_summary::store::DashboardStore;
use crate::domain::a001_category::store::CategoryStore;
use crate::domain::a002_product::store::ProductStore;
use crate::domain::a003_order::store::OrderStore;
use crate::shared::config::AppConfig;
use crate::shared::theme::ThemeContext;
use leptos::prelude::*;

/// Root state container. Each slice owns its data and request status;
/// pages reach them through [`use_admin_store`].
#[derive(Clone, Copy)]
pub struct AdminStore {
    pub theme: ThemeContext,
    pub dashboard: DashboardStore,
    pub orders: OrderStore,
    pub products: ProductStore,
    pub categories: CategoryStore,
}

impl AdminStore {
    pub fn new(config: &AppConfig) -> Self {
        let client = config.api_client();
        log::info!("admin API at {}", client.base_url());
        Self {
            theme: ThemeContext::restore(),
            dashboard: DashboardStore::new(client.clone()),
            orders: OrderStore::new(client.clone()),
            products: ProductStore::new(client.clone()),
            categories: CategoryStore::new(client, config.api.categories_path.clone()),
        }
    }
}

pub fn use_admin_store() -> AdminStore {
    use_context::<AdminStore>().expect("AdminStore not found. Provide it in App.")
}
