use crate::domain::a001_category::store::CategoryStore;
use contracts::domain::a001_category::aggregate::{Category, CategoryForm, CategoryId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the category draft
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    id: Option<CategoryId>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    /// Pre-filled from `initial`, or empty for a new category
    pub fn new(initial: Option<&Category>) -> Self {
        let form = initial
            .map(CategoryForm::from_category)
            .unwrap_or_default();
        Self {
            id: form.id,
            name: RwSignal::new(form.name),
            description: RwSignal::new(form.description),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_valid(&self) -> bool {
        !self.name.get().trim().is_empty()
    }

    fn form(&self) -> CategoryForm {
        CategoryForm {
            id: self.id,
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    /// Validate, save through the store and hand the saved category to
    /// `on_saved`. On failure the error stays in the dialog.
    pub fn save_command(&self, store: CategoryStore, on_saved: Callback<Category>) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form();
        if let Err(e) = form.validate() {
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
                Ok(category) => on_saved.run(category),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}
