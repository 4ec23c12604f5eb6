//! Site configuration.
//!
//! Defaults are compiled in from `site.json`. A page may override any field
//! by defining `window.TEKSTRA_CONFIG` before the wasm bundle loads; the
//! override is merged key by key on top of the embedded file.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::JsValue;

use crate::error::AppError;

/// Embedded defaults shipped with the bundle
const EMBEDDED_CONFIG: &str = include_str!("../site.json");

/// Global the host page can define to override settings
const OVERRIDE_GLOBAL: &str = "TEKSTRA_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    pub typing_speed_ms: u32,
    pub cursor_blink_ms: u32,
    pub contact_submit_delay_ms: u32,
    pub page_loader_duration_ms: u32,
    pub scroll_button_threshold_px: f64,
    pub navbar_compact_threshold_px: f64,
    pub hero_rotation_ms: u32,
    pub achievements_per_page: usize,
    pub ambient_particle_count: usize,
    pub matrix_frame_ms: u32,
    pub cursor_trail_length: usize,
    pub cursor_effect: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            typing_speed_ms: 50,
            cursor_blink_ms: 500,
            contact_submit_delay_ms: 1500,
            page_loader_duration_ms: 2000,
            scroll_button_threshold_px: 300.0,
            navbar_compact_threshold_px: 20.0,
            hero_rotation_ms: 4000,
            achievements_per_page: 5,
            ambient_particle_count: 100,
            matrix_frame_ms: 35,
            cursor_trail_length: 6,
            cursor_effect: true,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the embedded configuration and apply the page override, if any.
    pub fn load() -> Result<Self, AppError> {
        let mut base: Value = serde_json::from_str(EMBEDDED_CONFIG)?;
        if let Some(patch) = read_override()? {
            merge(&mut base, patch);
        }
        Ok(serde_json::from_value(base)?)
    }

    /// Parsed log level, falling back to `Info` on unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Shallow-merge `patch` into `base`. Object keys in the patch replace the
/// same keys in the base; any non-object patch is ignored.
pub fn merge(base: &mut Value, patch: Value) {
    if let (Value::Object(base), Value::Object(patch)) = (base, patch) {
        for (key, value) in patch {
            base.insert(key, value);
        }
    }
}

fn read_override() -> Result<Option<Value>, AppError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(OVERRIDE_GLOBAL))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_wasm_bindgen::from_value(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.contact_submit_delay_ms, 1500);
        assert_eq!(config.achievements_per_page, 5);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = SiteConfig::from_json(r#"{ "typing_speed_ms": 30 }"#).unwrap();
        assert_eq!(config.typing_speed_ms, 30);
        assert_eq!(config.cursor_blink_ms, 500);
        assert!(config.cursor_effect);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let result = SiteConfig::from_json("{ not json");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = SiteConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_merge_replaces_only_patched_keys() {
        let mut base = json!({ "typing_speed_ms": 50, "cursor_effect": true });
        merge(&mut base, json!({ "cursor_effect": false }));
        assert_eq!(base, json!({ "typing_speed_ms": 50, "cursor_effect": false }));
    }

    #[test]
    fn test_merge_ignores_non_object_patch() {
        let mut base = json!({ "typing_speed_ms": 50 });
        merge(&mut base, json!([1, 2, 3]));
        assert_eq!(base, json!({ "typing_speed_ms": 50 }));
    }
}
