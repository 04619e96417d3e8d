use crate::overlay::OverlayConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runtime configuration injected by the host page as `window.ENV`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct EnvConfig {
    /// Backend base URL; `None` skips the health check.
    pub api_base_url: Option<String>,
    /// `tracing` filter directive, e.g. `debug` or `playground_app::overlay=trace`.
    pub log_level: Option<String>,
    pub inline_editor: OverlayConfig,
}

impl EnvConfig {
    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        // `window.ENV` is plain data; go through JSON rather than field-by-field Reflect.
        let env = window
            .get("ENV")
            .filter(|env| env.is_object())
            .and_then(|env| js_sys::JSON::stringify(&env).ok())
            .and_then(|s| s.as_string())
            .and_then(|s| serde_json::from_str::<Value>(&s).ok())
            .unwrap_or(Value::Null);

        let mut config = Self::from_json(&env);
        if config.api_base_url.is_none() {
            // Build-time define used by the webpack host.
            config.api_base_url = window
                .get("__API_BASE_URL__")
                .and_then(|v| v.as_string())
                .filter(|s| !s.trim().is_empty());
        }
        config
    }

    /// We accept both `API_BASE_URL` and `api_base_url` (and likewise for the
    /// editor block); the upper-case form wins.
    pub fn from_json(env: &Value) -> Self {
        let field = |upper: &str, lower: &str| env.get(upper).or_else(|| env.get(lower)).cloned();

        let api_base_url = field("API_BASE_URL", "api_base_url")
            .and_then(|v| v.as_str().map(|s| s.trim().trim_end_matches('/').to_string()))
            .filter(|s| !s.is_empty());

        let log_level = field("LOG_LEVEL", "log_level")
            .and_then(|v| v.as_str().map(str::to_string))
            .filter(|s| !s.trim().is_empty());

        let inline_editor = match field("INLINE_EDITOR", "inline_editor") {
            Some(v) => serde_json::from_value(v).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid INLINE_EDITOR config; using defaults");
                OverlayConfig::default()
            }),
            None => OverlayConfig::default(),
        };

        Self {
            api_base_url,
            log_level,
            inline_editor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_env_uses_defaults() {
        assert_eq!(EnvConfig::from_json(&Value::Null), EnvConfig::default());
        assert_eq!(EnvConfig::from_json(&json!({})).api_base_url, None);
    }

    #[test]
    fn test_api_base_url_aliases() {
        let upper = EnvConfig::from_json(&json!({ "API_BASE_URL": "http://localhost:8080/" }));
        assert_eq!(upper.api_base_url.as_deref(), Some("http://localhost:8080"));

        let lower = EnvConfig::from_json(&json!({ "api_base_url": "https://api.example.com" }));
        assert_eq!(lower.api_base_url.as_deref(), Some("https://api.example.com"));

        let both = EnvConfig::from_json(&json!({
            "API_BASE_URL": "https://a.example.com",
            "api_base_url": "https://b.example.com",
        }));
        assert_eq!(both.api_base_url.as_deref(), Some("https://a.example.com"));
    }

    #[test]
    fn test_blank_api_base_url_is_none() {
        let env = EnvConfig::from_json(&json!({ "API_BASE_URL": "  " }));
        assert_eq!(env.api_base_url, None);
    }

    #[test]
    fn test_log_level() {
        let env = EnvConfig::from_json(&json!({ "LOG_LEVEL": "debug" }));
        assert_eq!(env.log_level.as_deref(), Some("debug"));
        assert_eq!(EnvConfig::from_json(&json!({ "log_level": "" })).log_level, None);
    }

    #[test]
    fn test_inline_editor_overrides() {
        let env = EnvConfig::from_json(&json!({
            "INLINE_EDITOR": { "hide_delay_ms": 300, "character_limit": 120 }
        }));
        assert_eq!(env.inline_editor.hide_delay_ms, 300);
        assert_eq!(env.inline_editor.character_limit, 120);
        assert_eq!(env.inline_editor.hover_grace_ms, 250);
    }

    #[test]
    fn test_invalid_inline_editor_falls_back() {
        let env = EnvConfig::from_json(&json!({ "INLINE_EDITOR": { "hide_delay_ms": "soon" } }));
        assert_eq!(env.inline_editor, OverlayConfig::default());
    }
}
