//! Common types and traits for all entities

pub mod aggregate_id;
pub mod entity;

// Re-exports
pub use aggregate_id::AggregateId;
pub use entity::Entity;
