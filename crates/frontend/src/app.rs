use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::store::AdminStore;
use crate::shared::toast::{ToastHost, ToastService};
use crate::usecases::ServiceClients;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme as ThawTheme};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = AdminStore::new(&config);
    provide_context(store);
    provide_context(ServiceClients::new(&config));
    provide_context(ToastService::new(config.ui.toast_timeout_ms));
    provide_context(ModalStackService::new());

    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    provide_context(StoredValue::new(config));

    // thaw widgets follow the admin theme
    let thaw_theme = RwSignal::new(ThawTheme::light());
    Effect::new(move |_| {
        thaw_theme.set(if store.theme.is_dark() {
            ThawTheme::dark()
        } else {
            ThawTheme::light()
        });
    });

    view! {
        <ConfigProvider theme=thaw_theme>
            <Shell />
            <ModalHost />
            <ToastHost />
        </ConfigProvider>
    }
}
