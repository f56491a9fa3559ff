use crate::domain::a002_product::store::ProductStore;
use crate::shared::api_utils::ApiClient;
use crate::usecases::u502_generate_description::api::generate_description;
use contracts::domain::a002_product::aggregate::{Product, ProductForm, ProductId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the product draft. Numeric fields stay text until save.
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    id: Option<ProductId>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub generating: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(initial: Option<&Product>) -> Self {
        let form = initial.map(ProductForm::from_product).unwrap_or_default();
        Self {
            id: form.id,
            name: RwSignal::new(form.name),
            description: RwSignal::new(form.description),
            price: RwSignal::new(form.price),
            stock: RwSignal::new(form.stock),
            image_url: RwSignal::new(form.image_url),
            category_id: RwSignal::new(form.category_id),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            generating: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Required fields are filled; number checks happen on save
    pub fn is_valid(&self) -> bool {
        !self.name.get().trim().is_empty()
            && !self.price.get().trim().is_empty()
            && !self.category_id.get().trim().is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.saving.get() || self.generating.get()
    }

    fn form(&self) -> ProductForm {
        ProductForm {
            id: self.id,
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
            image_url: self.image_url.get_untracked(),
            category_id: self.category_id.get_untracked(),
        }
    }

    pub fn save_command(&self, store: ProductStore, on_saved: Callback<Product>) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form();
        if let Err(e) = form.to_dto() {
            self.error.set(Some(e));
            return;
        }

        self.saving.set(true);
        self.error.set(None);
        let vm = *self;
        spawn_local(async move {
            let result = store.save(form).await;
            vm.saving.set(false);
            match result {
                Ok(product) => on_saved.run(product),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }

    /// Fill the description from the product name
    pub fn generate_command(&self, client: StoredValue<ApiClient>) {
        if self.generating.get_untracked() {
            return;
        }
        let title = self.name.get_untracked();
        self.generating.set(true);
        self.error.set(None);
        let vm = *self;
        spawn_local(async move {
            let client = client.get_value();
            let result = generate_description(&client, &title).await;
            vm.generating.set(false);
            match result {
                Ok(text) => vm.description.set(text),
                Err(e) => {
                    log::warn!("description generation failed: {}", e);
                    vm.error.set(Some(e.message));
                }
            }
        });
    }
}
