use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Global read at startup: `window.__KOKONUT_HERO = { badge, title1, title2, dark }`.
pub const CONFIG_GLOBAL: &str = "__KOKONUT_HERO";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub badge: Option<String>,
    pub title1: Option<String>,
    pub title2: Option<String>,
    pub dark: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`window.{0}` is not an object")]
    NotAnObject(&'static str),
    #[error("`window.{0}` could not be serialized")]
    Serialize(&'static str),
    #[error("invalid runtime config: {0}")]
    Parse(#[from] serde_json::Error),
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
fn read_globals() -> Result<Option<RuntimeConfig>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into())
        .map_err(|_| ConfigError::NotAnObject(CONFIG_GLOBAL))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    if !value.is_object() {
        return Err(ConfigError::NotAnObject(CONFIG_GLOBAL));
    }
    let json = js_sys::JSON::stringify(&value).map_err(|_| ConfigError::Serialize(CONFIG_GLOBAL))?;
    parse_runtime_config(&String::from(json)).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_globals() -> Result<Option<RuntimeConfig>, ConfigError> {
    Ok(None)
}

/// Loads the runtime config once. A failed load leaves the defaults in place.
pub fn init() -> anyhow::Result<&'static RuntimeConfig> {
    use anyhow::Context;

    if let Some(config) = RUNTIME_CONFIG.get() {
        return Ok(config);
    }
    let loaded = read_globals();
    let config = RUNTIME_CONFIG.get_or_init(|| match &loaded {
        Ok(found) => found.clone().unwrap_or_default(),
        Err(_) => RuntimeConfig::default(),
    });
    loaded.with_context(|| format!("reading runtime config from window.{CONFIG_GLOBAL}"))?;
    Ok(config)
}

pub fn runtime_config() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}
