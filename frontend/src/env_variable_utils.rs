use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_APP_NAME};
use web_sys::window;

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_api_base_url() -> String {
    let url = get_env_var("API_BASE_URL")
        .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    normalize_base_url(&url)
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}

/// Strips trailing slashes so endpoint paths can be appended directly.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
