//! Wire contracts shared by the admin console.
//!
//! Everything here is plain data plus pure helpers: entity DTOs mirrored from
//! the shop backend, request/response bodies for the external services and the
//! small amount of logic that has to agree with those shapes (validation,
//! paging arithmetic, sentiment correlation). No I/O lives in this crate.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
