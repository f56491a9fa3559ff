//! Request bookkeeping for one store slice.
//!
//! Every dispatch takes a [`RequestToken`]. Responses come back in any order:
//! a fetch whose token is older than the newest dispatched fetch is dropped,
//! and the status only follows the newest dispatched request. Mutation
//! results always merge, since the server has already applied them.

use contracts::domain::common::{AggregateId, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Errored(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic token source plus the status it guards
#[derive(Debug, Clone, PartialEq, Default)]
struct Sequencer {
    status: RequestStatus,
    issued: RequestToken,
}

impl Sequencer {
    fn issue(&mut self) -> RequestToken {
        self.issued = RequestToken(self.issued.0 + 1);
        self.status = RequestStatus::Loading;
        self.issued
    }

    fn is_latest(&self, token: RequestToken) -> bool {
        token == self.issued
    }

    fn settle(&mut self, token: RequestToken, status: RequestStatus) {
        if self.is_latest(token) {
            self.status = status;
        }
    }
}

// ============================================================================
// Collection slice
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    seq: Sequencer,
    latest_fetch: RequestToken,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seq: Sequencer::default(),
            latest_fetch: RequestToken::default(),
        }
    }
}

impl<T: Entity> ResourceState<T> {
    pub fn status(&self) -> &RequestStatus {
        &self.seq.status
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    /// Dispatch a list fetch
    pub fn begin_fetch(&mut self) -> RequestToken {
        let token = self.seq.issue();
        self.latest_fetch = token;
        token
    }

    /// Dispatch a create/update/delete
    pub fn begin(&mut self) -> RequestToken {
        self.seq.issue()
    }

    /// Replace the collection with a fetched page.
    ///
    /// Returns `false` when the response is stale and was dropped.
    pub fn fetched(&mut self, token: RequestToken, items: Vec<T>) -> bool {
        if token < self.latest_fetch {
            return false;
        }
        self.items = items;
        self.seq.settle(token, RequestStatus::Loaded);
        true
    }

    /// Append the created item. An item with the same id (already brought in
    /// by a concurrent fetch) is replaced instead.
    pub fn created(&mut self, token: RequestToken, item: T) {
        let id = item.entity_id();
        match self.items.iter_mut().find(|existing| existing.entity_id() == id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        self.seq.settle(token, RequestStatus::Loaded);
    }

    /// Replace the entry with the same id. Returns `false` if there is none;
    /// the collection is left as it was.
    pub fn updated(&mut self, token: RequestToken, item: T) -> bool {
        let id = item.entity_id();
        let found = match self.items.iter_mut().find(|existing| existing.entity_id() == id) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        };
        self.seq.settle(token, RequestStatus::Loaded);
        found
    }

    /// Remove the entry with the requested id.
    ///
    /// A missing id is fine when a fetch dispatched after the delete has
    /// already replaced the collection. Otherwise the collection is left
    /// untouched and the slice errors.
    pub fn deleted(&mut self, token: RequestToken, id: T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.entity_id() != id);
        if self.items.len() < before || token < self.latest_fetch {
            self.seq.settle(token, RequestStatus::Loaded);
            true
        } else {
            self.seq.settle(
                token,
                RequestStatus::Errored(format!("Item {} not found", id.as_string())),
            );
            false
        }
    }

    pub fn failed(&mut self, token: RequestToken, message: String) {
        self.seq.settle(token, RequestStatus::Errored(message));
    }
}

// ============================================================================
// Single-value slice
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotState<T> {
    pub data: Option<T>,
    seq: Sequencer,
}

impl<T> Default for SnapshotState<T> {
    fn default() -> Self {
        Self {
            data: None,
            seq: Sequencer::default(),
        }
    }
}

impl<T> SnapshotState<T> {
    pub fn status(&self) -> &RequestStatus {
        &self.seq.status
    }

    pub fn begin(&mut self) -> RequestToken {
        self.seq.issue()
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.seq.is_latest(token)
    }

    /// Returns `false` when a newer request has been dispatched meanwhile.
    pub fn loaded(&mut self, token: RequestToken, data: T) -> bool {
        if !self.seq.is_latest(token) {
            return false;
        }
        self.data = Some(data);
        self.seq.settle(token, RequestStatus::Loaded);
        true
    }

    pub fn failed(&mut self, token: RequestToken, message: String) {
        self.seq.settle(token, RequestStatus::Errored(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{Category, CategoryId};

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn loaded_with(ids: &[i64]) -> ResourceState<Category> {
        let mut state = ResourceState::default();
        let token = state.begin_fetch();
        state.fetched(token, ids.iter().map(|id| category(*id, "c")).collect());
        state
    }

    fn ids(state: &ResourceState<Category>) -> Vec<i64> {
        state.items.iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn test_dispatch_clears_previous_error() {
        let mut state = loaded_with(&[1]);
        let token = state.begin();
        state.failed(token, "Server Error".into());
        assert_eq!(state.status().error(), Some("Server Error"));

        state.begin_fetch();
        assert!(state.status().is_loading());
        assert_eq!(state.status().error(), None);
    }

    #[test]
    fn test_fetch_replaces_collection() {
        let mut state = loaded_with(&[1, 2, 3]);
        let token = state.begin_fetch();
        assert!(state.fetched(token, vec![category(4, "d")]));
        assert_eq!(ids(&state), vec![4]);
        assert_eq!(state.status(), &RequestStatus::Loaded);
    }

    #[test]
    fn test_create_appends_exactly_one() {
        let mut state = loaded_with(&[1, 2]);
        let token = state.begin();
        state.created(token, category(3, "new"));
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.items[2].name, "new");
    }

    #[test]
    fn test_update_replaces_only_matching_entry() {
        let mut state = loaded_with(&[1, 2, 3]);
        let token = state.begin();
        assert!(state.updated(token, category(2, "renamed")));
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.items[1].name, "renamed");
        assert_eq!(state.items[0].name, "c");
        assert_eq!(state.items[2].name, "c");
    }

    #[test]
    fn test_update_of_unknown_id_changes_nothing() {
        let mut state = loaded_with(&[1]);
        let before = state.items.clone();
        let token = state.begin();
        assert!(!state.updated(token, category(9, "ghost")));
        assert_eq!(state.items, before);
    }

    #[test]
    fn test_delete_present_then_missing() {
        let mut state = loaded_with(&[3, 5, 7]);

        let token = state.begin();
        assert!(state.deleted(token, CategoryId(5)));
        assert_eq!(ids(&state), vec![3, 7]);
        assert_eq!(state.status(), &RequestStatus::Loaded);

        let token = state.begin();
        assert!(!state.deleted(token, CategoryId(5)));
        assert_eq!(ids(&state), vec![3, 7]);
        assert_eq!(state.status().error(), Some("Item 5 not found"));
    }

    #[test]
    fn test_delete_confirmed_after_newer_fetch() {
        let mut state = loaded_with(&[3, 5]);
        let delete = state.begin();
        let fetch = state.begin_fetch();
        assert!(state.fetched(fetch, vec![category(3, "c3")]));

        assert!(state.deleted(delete, CategoryId(5)));
        assert_eq!(ids(&state), vec![3]);
        assert_eq!(state.status(), &RequestStatus::Loaded);
    }

    #[test]
    fn test_failure_keeps_collection() {
        let mut state = loaded_with(&[1, 2]);
        let before = state.items.clone();
        let token = state.begin_fetch();
        state.failed(token, "Network error".into());
        assert_eq!(state.items, before);
        assert_eq!(state.status().error(), Some("Network error"));
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut state = ResourceState::<Category>::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.fetched(second, vec![category(2, "page 2")]));
        assert!(!state.fetched(first, vec![category(1, "page 1")]));
        assert_eq!(ids(&state), vec![2]);
        assert_eq!(state.status(), &RequestStatus::Loaded);
    }

    #[test]
    fn test_older_response_does_not_override_newer_status() {
        let mut state = loaded_with(&[1]);
        let create = state.begin();
        let fetch = state.begin_fetch();

        state.failed(create, "Duplicate".into());
        assert!(state.status().is_loading());

        state.fetched(fetch, vec![category(1, "c")]);
        assert_eq!(state.status(), &RequestStatus::Loaded);
    }

    #[test]
    fn test_mutation_merges_even_when_not_latest() {
        let mut state = loaded_with(&[1]);
        let create = state.begin();
        let _fetch = state.begin_fetch();
        state.created(create, category(2, "late"));
        assert_eq!(ids(&state), vec![1, 2]);
        assert!(state.status().is_loading());
    }

    #[test]
    fn test_create_after_fetch_does_not_duplicate() {
        let mut state = loaded_with(&[]);
        let create = state.begin();
        let fetch = state.begin_fetch();
        state.fetched(fetch, vec![category(1, "from list")]);
        state.created(create, category(1, "from create"));
        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.items[0].name, "from create");
    }

    #[test]
    fn test_snapshot_ignores_superseded_response() {
        let mut state = SnapshotState::<u32>::default();
        let first = state.begin();
        let second = state.begin();
        assert!(!state.loaded(first, 1));
        assert!(state.data.is_none());
        assert!(state.loaded(second, 2));
        assert_eq!(state.data, Some(2));

        let third = state.begin();
        state.failed(third, "down".into());
        assert_eq!(state.data, Some(2));
        assert_eq!(state.status().error(), Some("down"));
    }

    #[test]
    fn test_older_batch_cannot_finish_newer_one() {
        let mut state = SnapshotState::<Vec<u32>>::default();
        let first = state.begin();
        let second = state.begin();
        assert!(!state.is_latest(first));
        assert!(state.is_latest(second));

        assert!(!state.loaded(first, vec![1]));
        state.failed(first, "timeout".into());
        assert!(state.status().is_loading());
        assert!(state.data.is_none());

        assert!(state.loaded(second, vec![2]));
        assert_eq!(state.data, Some(vec![2]));
        assert_eq!(state.status(), &RequestStatus::Loaded);
    }
}
