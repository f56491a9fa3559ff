pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dom;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
pub mod store;
pub mod theme;
pub mod toast;
