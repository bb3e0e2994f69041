//! Video search frontend: the backend API client, the search page and its pagination state.

pub mod config;
pub mod env_variable_utils;
pub mod error;
pub mod logging;
pub mod models;
pub mod router;
pub mod search;
pub mod utils;

pub use search::api::{ApiClient, RequestOptions};
