//! Category details modal
//!
//! - view_model.rs: draft signals, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
