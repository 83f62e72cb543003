use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| log::Level::from_str(value).ok())
        .unwrap_or(log::Level::Info)
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};

    fn read_global(name: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
        })
    }

    // window.__HRPORTAL_ENV (env.js) wins over window.__HRPORTAL_CONFIG
    pub fn snapshot_from_globals() -> RuntimeConfig {
        let api_base_url = read_global("__HRPORTAL_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__HRPORTAL_CONFIG", &["api_base_url", "API_BASE_URL"]));
        let log_level = read_global("__HRPORTAL_ENV", &["LOG_LEVEL", "log_level"])
            .or_else(|| read_global("__HRPORTAL_CONFIG", &["log_level", "LOG_LEVEL"]));
        RuntimeConfig {
            api_base_url,
            log_level,
        }
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        if let Some(url) = &cfg.api_base_url {
            let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &url.as_str().into());
        }
        if let Some(level) = &cfg.log_level {
            let _ = js_sys::Reflect::set(&obj, &"log_level".into(), &level.as_str().into());
        }
        let _ = js_sys::Reflect::set(&window, &"__HRPORTAL_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let origin = web_sys::window()
            .ok_or_else(|| anyhow!("no global window"))?
            .location()
            .origin()
            .map_err(|_| anyhow!("location origin unavailable"))?;
        let response = reqwest::get(format!("{}/config.json", origin))
            .await
            .context("config.json request failed")?;
        anyhow::ensure!(
            response.status().is_success(),
            "config.json returned {}",
            response.status()
        );
        response
            .json::<RuntimeConfig>()
            .await
            .context("config.json is not valid")
    }
}

/// Configuration that is available synchronously at start-up, before
/// `config.json` has been fetched.
#[cfg(target_arch = "wasm32")]
pub fn initial_config() -> RuntimeConfig {
    browser::snapshot_from_globals()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn initial_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = initial_config().api_base_url {
        return cache_base_url(&existing);
    }
    #[cfg(target_arch = "wasm32")]
    {
        match browser::fetch_runtime_config().await {
            Ok(cfg) => {
                browser::write_window_config(&cfg);
                if let Some(level) = cfg.log_level.as_deref() {
                    log::set_max_level(parse_log_level(Some(level)).to_level_filter());
                }
                if let Some(url) = cfg.api_base_url {
                    return cache_base_url(&url);
                }
            }
            Err(err) => log::warn!("Runtime config unavailable, using defaults: {:#}", err),
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL: {}", base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_log_level_accepts_known_levels_case_insensitively() {
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some("WARN")), log::Level::Warn);
        assert_eq!(parse_log_level(Some(" error ")), log::Level::Error);
    }

    #[test]
    fn parse_log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("")), log::Level::Info);
        assert_eq!(parse_log_level(Some("verbose")), log::Level::Info);
    }

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://hr.example.com/api/"),
            Some("https://hr.example.com/api".to_string())
        );
        assert_eq!(normalize_base_url("   "), None);
    }

    #[test]
    fn runtime_config_deserializes_partial_documents() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "https://hr.example.com/api" }"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://hr.example.com/api"));
        assert!(cfg.log_level.is_none());
    }
}
