pub mod api;
pub mod components;
pub mod page;
pub mod search_options;
pub mod state;
