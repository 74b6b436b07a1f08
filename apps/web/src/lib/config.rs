//! Build-time configuration for the API host, session storage, and logging with
//! an optional runtime override. The runtime config is read from
//! `window.FLAWLESS_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

use admin_session::DEFAULT_STORAGE_KEY;

const DEFAULT_API_BASE_URL: &str = "https://flawless-a2exc2hwcge8bbfz.canadacentral-01.azurewebsites.net";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_storage_key: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("FLAWLESS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let session_storage_key =
            option_env!("FLAWLESS_SESSION_KEY").unwrap_or(DEFAULT_STORAGE_KEY);
        let log_level = option_env!("FLAWLESS_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            session_storage_key: session_storage_key.to_string(),
            log_level: log_level.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    session_storage_key: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.session_storage_key {
        config.session_storage_key = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("FLAWLESS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        session_storage_key: read_runtime_value(&object, "session_storage_key"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            session_storage_key: "default_session".to_string(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.flawless.vn "),
            Some("https://api.flawless.vn".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            session_storage_key: normalize_runtime_value("  "),
            log_level: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.session_storage_key, "default_session");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            session_storage_key: normalize_runtime_value("override_session"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.session_storage_key, "override_session");
        assert_eq!(config.log_level, "debug");
    }
}
