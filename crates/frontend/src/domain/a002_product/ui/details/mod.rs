//! Product details modal
//!
//! - view_model.rs: draft signals, save and generate commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
