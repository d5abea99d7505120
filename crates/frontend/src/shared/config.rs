//! Frontend configuration
//!
//! The backend origin is resolved once per page load, in priority order:
//! 1. `localStorage["resume_chat.api_base"]` (runtime override, handy for demos)
//! 2. `RESUME_CHAT_API_BASE` captured at build time
//! 3. [`DEFAULT_API_BASE`]

use once_cell::sync::OnceCell;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Ключ localStorage для переопределения адреса бэкенда
pub const API_BASE_STORAGE_KEY: &str = "resume_chat.api_base";

const BUILD_API_BASE: Option<&str> = option_env!("RESUME_CHAT_API_BASE");

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin without trailing slash, e.g. `http://127.0.0.1:8000`
    pub api_base: String,
}

impl AppConfig {
    pub fn resolve(stored: Option<&str>, build: Option<&str>) -> Self {
        let api_base = stored
            .and_then(normalize_base)
            .or_else(|| build.and_then(normalize_base))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { api_base }
    }

    /// Reads the browser override and the build-time value.
    pub fn load() -> Self {
        let stored = load_stored_api_base();
        let config = Self::resolve(stored.as_deref(), BUILD_API_BASE);
        log::info!("API base: {}", config.api_base);
        config
    }
}

/// Process-wide configuration, loaded on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

fn load_stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(API_BASE_STORAGE_KEY).ok()?
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
