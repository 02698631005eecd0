use crate::error::ConfigError;
use log::Level;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(parse_level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_level(raw: &str) -> Option<Level> {
    raw.trim().parse().ok()
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Result<Option<String>, ConfigError> {
    // Optional global object: window.__USERINFO_CONFIG = { log_level: "debug" }
    let Some(w) = web_sys::window() else {
        return Ok(None);
    };
    let any = js_sys::Reflect::get(&w, &"__USERINFO_CONFIG".into())
        .map_err(|err| ConfigError::Unreadable(format!("{:?}", err)))?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&any)
        .map_err(|err| ConfigError::Unreadable(format!("{:?}", err)))?;
    Ok(Some(String::from(json)))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Result<Option<String>, ConfigError> {
    Ok(None)
}

pub fn load() -> Result<RuntimeConfig, ConfigError> {
    match snapshot_from_globals()? {
        Some(raw) => RuntimeConfig::from_json(&raw),
        None => Ok(RuntimeConfig::default()),
    }
}

/// Loads and caches the config. On failure the defaults are cached and the
/// error is handed back so the caller can report it once logging is up.
pub fn init() -> Result<&'static RuntimeConfig, ConfigError> {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return Ok(cached);
    }
    match load() {
        Ok(cfg) => Ok(RUNTIME_CONFIG.get_or_init(|| cfg)),
        Err(err) => {
            let _ = RUNTIME_CONFIG.set(RuntimeConfig::default());
            Err(err)
        }
    }
}

pub fn runtime_config() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(RuntimeConfig::default)
}
