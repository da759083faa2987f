//! Build-time configuration for the API host, the Stripe publishable key and
//! the user list page size, with an optional runtime override read from
//! `window.ROSTER_CONFIG` so static deployments can point at another backend
//! without rebuilding. Every value here ends up in the browser; the Stripe key
//! must be the publishable one.

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub stripe_publishable_key: String,
    pub page_size: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("ROSTER_API_BASE_URL").unwrap_or("");
        let stripe_publishable_key = option_env!("ROSTER_STRIPE_KEY").unwrap_or("");
        let page_size = option_env!("ROSTER_PAGE_SIZE")
            .and_then(parse_page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let mut config = Self {
            api_base_url: api_base_url.trim().to_string(),
            stripe_publishable_key: stripe_publishable_key.trim().to_string(),
            page_size,
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
    stripe_publishable_key: Option<String>,
    page_size: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.stripe_publishable_key {
        config.stripe_publishable_key = value;
    }
    if let Some(value) = runtime.page_size {
        config.page_size = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ROSTER_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        stripe_publishable_key: read_runtime_value(&object, "stripe_publishable_key"),
        page_size: read_runtime_page_size(&object),
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

/// Accepts the page size either as a JS number or as a numeric string.
#[cfg(target_arch = "wasm32")]
fn read_runtime_page_size(object: &js_sys::Object) -> Option<u32> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str("page_size")).ok()?;
    if let Some(number) = value.as_f64() {
        return parse_page_size(&number.to_string());
    }
    value.as_string().as_deref().and_then(parse_page_size)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a positive page size; zero and garbage yield `None`.
fn parse_page_size(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|size| *size > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_PAGE_SIZE, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value, parse_page_size,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            stripe_publishable_key: "pk_test_default".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.roster.dev "),
            Some("https://api.roster.dev".to_string())
        );
    }

    #[test]
    fn parse_page_size_rejects_zero_and_garbage() {
        assert_eq!(parse_page_size("25"), Some(25));
        assert_eq!(parse_page_size(" 5 "), Some(5));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("-3"), None);
        assert_eq!(parse_page_size("ten"), None);
        assert_eq!(parse_page_size(""), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            stripe_publishable_key: normalize_runtime_value("  "),
            page_size: parse_page_size("0"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.stripe_publishable_key, "pk_test_default");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://proxy.override"),
            stripe_publishable_key: normalize_runtime_value("pk_live_override"),
            page_size: parse_page_size("50"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://proxy.override");
        assert_eq!(config.stripe_publishable_key, "pk_live_override");
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn load_without_runtime_uses_default_page_size() {
        let config = AppConfig::load();
        assert!(config.page_size > 0);
    }
}
