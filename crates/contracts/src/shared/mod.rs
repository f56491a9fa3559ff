pub mod paging;
pub mod serde_utils;
