mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
