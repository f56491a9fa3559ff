pub mod admin_store;
pub mod resource_state;
pub mod resource_store;

pub use admin_store::{use_admin_store, AdminStore};
pub use resource_state::{RequestStatus, RequestToken, ResourceState, SnapshotState};
pub use resource_store::ResourceStore;
