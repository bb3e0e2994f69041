use crate::env_variable_utils::{get_api_base_url, get_app_name, is_debug_mode};
use lazy_static::lazy_static;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_APP_NAME: &str = "YouTube Search";

lazy_static! {
    pub static ref API_BASE_URL: String = get_api_base_url();
    pub static ref APP_NAME: String = get_app_name();
    pub static ref DEBUG_MODE: bool = is_debug_mode();
}
