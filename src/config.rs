use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::models::Locator;

const DEFAULT_API_BASE: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

const META_API_BASE: &str = "e-learning:api-base";
const META_REQUEST_TIMEOUT: &str = "e-learning:request-timeout-ms";
const WINDOW_CONFIG_KEY: &str = "__E_LEARNING_CONFIG__";

/// Application-wide settings, shared with components through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix joined to every locator; empty means same-origin
    pub api_base: String,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

/// Optional settings from one configuration source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub request_timeout_ms: Option<u32>,
}

impl AppConfig {
    /// Load from the hosting page: defaults, then `<meta>` tags, then
    /// `window.__E_LEARNING_CONFIG__`. Rejected values are logged and skipped.
    pub fn load() -> Self {
        let mut config = Self::default();

        config.apply_logged(&overrides_from_meta(), "meta tags");
        if let Some(overrides) = overrides_from_window() {
            config.apply_logged(&overrides, WINDOW_CONFIG_KEY);
        }

        log::info!(
            "Using API base {:?} with {} ms request timeout",
            config.api_base,
            config.request_timeout_ms
        );
        config
    }

    /// Apply every valid override; the first invalid one is reported and the
    /// corresponding setting keeps its prior value.
    pub fn apply(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        let mut first_error = None;

        if let Some(base) = &overrides.api_base {
            match validate_api_base(base) {
                Ok(base) => self.api_base = base,
                Err(e) => first_error = first_error.or(Some(e)),
            }
        }

        if let Some(timeout_ms) = overrides.request_timeout_ms {
            if timeout_ms == 0 {
                first_error = first_error.or(Some(ConfigError::ZeroTimeout));
            } else {
                self.request_timeout_ms = timeout_ms;
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Absolute URL for a locator
    pub fn resolve(&self, locator: &Locator) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), locator)
    }

    fn apply_logged(&mut self, overrides: &ConfigOverrides, source: &str) {
        if let Err(e) = self.apply(overrides) {
            log::warn!("Ignoring invalid configuration from {source}: {e}");
        }
    }
}

fn validate_api_base(base: &str) -> Result<String, ConfigError> {
    let base = base.trim();
    if base.is_empty() || base.starts_with("http://") || base.starts_with("https://") {
        Ok(base.to_string())
    } else {
        Err(ConfigError::InvalidApiBase(base.to_string()))
    }
}

fn parse_timeout(raw: &str) -> Result<u32, ConfigError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))
}

fn overrides_from_meta() -> ConfigOverrides {
    let request_timeout_ms =
        meta_content(META_REQUEST_TIMEOUT).and_then(|raw| match parse_timeout(&raw) {
            Ok(timeout_ms) => Some(timeout_ms),
            Err(e) => {
                log::warn!("Ignoring invalid configuration from meta tags: {e}");
                None
            }
        });

    ConfigOverrides {
        api_base: meta_content(META_API_BASE),
        request_timeout_ms,
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    element.get_attribute("content")
}

fn overrides_from_window() -> Option<ConfigOverrides> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    match serde_wasm_bindgen::from_value::<ConfigOverrides>(value) {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            log::warn!("Failed to parse window.{WINDOW_CONFIG_KEY}: {e}");
            None
        }
    }
}
