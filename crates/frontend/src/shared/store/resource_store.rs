use super::resource_state::{RequestStatus, RequestToken, ResourceState};
use crate::shared::api_utils::ApiError;
use contracts::domain::common::{AggregateId, Entity};
use leptos::prelude::*;
use std::future::Future;

/// Reactive wrapper around a [`ResourceState`].
///
/// Operations take the HTTP future, dispatch a token before awaiting it and
/// resolve the slice afterwards. The returned error string is what pages show
/// in toasts and modals.
pub struct ResourceStore<T: Send + Sync + 'static> {
    state: RwSignal<ResourceState<T>>,
    name: &'static str,
}

impl<T: Send + Sync + 'static> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceStore<T> {}

impl<T> ResourceStore<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            state: RwSignal::new(ResourceState::default()),
            name,
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn len(&self) -> usize {
        self.state.with(|s| s.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
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

    pub fn find(&self, id: T::Id) -> Option<T> {
        self.state.with(|s| s.find(id).cloned())
    }

    pub fn find_untracked(&self, id: T::Id) -> Option<T> {
        self.state.with_untracked(|s| s.find(id).cloned())
    }

    /// Replace the collection with data obtained elsewhere (e.g. the
    /// dashboard's recent orders).
    pub fn seed(&self, items: Vec<T>) {
        self.state.update(|s| {
            let token = s.begin_fetch();
            s.fetched(token, items);
        });
    }

    fn dispatch(&self, fetch: bool, op: &str) -> RequestToken {
        let token = self
            .state
            .try_update(|s| if fetch { s.begin_fetch() } else { s.begin() })
            .unwrap_or_default();
        log::debug!("[{}] {} dispatched ({})", self.name, op, token);
        token
    }

    fn fail(&self, token: RequestToken, op: &str, error: ApiError) -> String {
        let message = error.to_string();
        log::warn!("[{}] {} {} failed: {}", self.name, op, token, message);
        self.state.update(|s| s.failed(token, message.clone()));
        message
    }

    pub async fn fetch<F>(self, request: F) -> Result<(), String>
    where
        F: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let token = self.dispatch(true, "fetch");
        match request.await {
            Ok(items) => {
                let count = items.len();
                let applied = self
                    .state
                    .try_update(|s| s.fetched(token, items))
                    .unwrap_or(false);
                if applied {
                    log::debug!("[{}] fetch {} loaded {} items", self.name, token, count);
                } else {
                    log::debug!("[{}] fetch {} is stale, dropped", self.name, token);
                }
                Ok(())
            }
            Err(e) => Err(self.fail(token, "fetch", e)),
        }
    }

    pub async fn create<F>(self, request: F) -> Result<T, String>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let token = self.dispatch(false, "create");
        match request.await {
            Ok(item) => {
                log::info!(
                    "[{}] created {}",
                    self.name,
                    item.entity_id().as_string()
                );
                self.state.update(|s| s.created(token, item.clone()));
                Ok(item)
            }
            Err(e) => Err(self.fail(token, "create", e)),
        }
    }

    pub async fn update<F>(self, request: F) -> Result<T, String>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let token = self.dispatch(false, "update");
        match request.await {
            Ok(item) => {
                let id = item.entity_id().as_string();
                let found = self
                    .state
                    .try_update(|s| s.updated(token, item.clone()))
                    .unwrap_or(false);
                if found {
                    log::info!("[{}] updated {}", self.name, id);
                } else {
                    log::debug!("[{}] updated {} is not on the current page", self.name, id);
                }
                Ok(item)
            }
            Err(e) => Err(self.fail(token, "update", e)),
        }
    }

    /// Removes the id that was requested, whatever the server answered.
    /// An id already gone after a newer fetch counts as removed.
    pub async fn delete<F>(self, id: T::Id, request: F) -> Result<(), String>
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        let token = self.dispatch(false, "delete");
        match request.await {
            Ok(()) => {
                let removed = self
                    .state
                    .try_update(|s| s.deleted(token, id))
                    .unwrap_or(false);
                if removed {
                    log::info!("[{}] deleted {}", self.name, id.as_string());
                    Ok(())
                } else {
                    log::warn!("[{}] deleted {} was not loaded", self.name, id.as_string());
                    Err(format!("Item {} not found", id.as_string()))
                }
            }
            Err(e) => Err(self.fail(token, "delete", e)),
        }
    }
}
