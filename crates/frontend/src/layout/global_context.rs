use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    Categories,
}

impl Page {
    pub fn all() -> [Page; 3] {
        [Page::Dashboard, Page::Products, Page::Categories]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::Categories => "categories",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Products => "Products",
            Page::Categories => "Categories",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::Categories => "categories",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }
}

/// `?page=products` -> Products; anything unknown falls back to the dashboard
pub fn page_from_query(search: &str) -> Page {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("page")
        .and_then(|key| Page::from_key(key))
        .unwrap_or_default()
}

pub fn page_query(page: Page) -> String {
    let query = serde_qs::to_string(&HashMap::from([("page", page.key())])).unwrap_or_default();
    format!("?{}", query)
}

/// Case-insensitive substring match used by the header search box
pub fn matches_search(text: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    pub search: RwSignal<String>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
            left_open: RwSignal::new(true),
            search: RwSignal::new(String::new()),
        }
    }

    /// Pick the page from the address bar and keep `?page=` in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(page_from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = page_query(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate to {}", page.key());
        self.search.set(String::new());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_read_from_query() {
        assert_eq!(page_from_query("?page=products"), Page::Products);
        assert_eq!(page_from_query("page=categories&x=1"), Page::Categories);
        assert_eq!(page_from_query(""), Page::Dashboard);
        assert_eq!(page_from_query("?page=orders"), Page::Dashboard);
    }

    #[test]
    fn test_query_round_trips_every_page() {
        for page in Page::all() {
            assert_eq!(page_from_query(&page_query(page)), page);
        }
        assert_eq!(page_query(Page::Categories), "?page=categories");
    }

    #[test]
    fn test_search_matching() {
        assert!(matches_search("Wireless Mouse", "mouse"));
        assert!(matches_search("Wireless Mouse", "  "));
        assert!(!matches_search("Desk Lamp", "mouse"));
    }
}
