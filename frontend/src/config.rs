use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Page wiring overrides, all optional in every source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub root_id: Option<String>,
    pub label_id: Option<String>,
    pub storage_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub root_id: String,
    pub label_id: String,
    pub storage_key: String,
}

pub const DEFAULT_ROOT_ID: &str = "body";
pub const DEFAULT_LABEL_ID: &str = "theme-switch";
pub const DEFAULT_STORAGE_KEY: &str = "theme";

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

impl RuntimeConfig {
    fn is_empty(&self) -> bool {
        self.root_id.is_none() && self.label_id.is_none() && self.storage_key.is_none()
    }

    /// Field-wise precedence: `self` wins, `fallback` fills the gaps.
    fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            root_id: self.root_id.or(fallback.root_id),
            label_id: self.label_id.or(fallback.label_id),
            storage_key: self.storage_key.or(fallback.storage_key),
        }
    }

    fn resolve(self) -> ResolvedConfig {
        ResolvedConfig {
            root_id: self.root_id.unwrap_or_else(|| DEFAULT_ROOT_ID.to_string()),
            label_id: self.label_id.unwrap_or_else(|| DEFAULT_LABEL_ID.to_string()),
            storage_key: self
                .storage_key
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
        }
    }
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn global_object(name: &str) -> Option<js_sys::Object> {
    let any = js_sys::Reflect::get(&window(), &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

fn string_field(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Ok(val) = js_sys::Reflect::get(obj, &(*key).into()) {
            if let Some(s) = val.as_string() {
                return Some(s);
            }
        }
    }
    None
}

fn get_from_env_js() -> Option<RuntimeConfig> {
    // Expect optional global object: window.__THEMESWITCH_ENV = { STORAGE_KEY: "..." }
    let obj = global_object("__THEMESWITCH_ENV")?;
    Some(RuntimeConfig {
        root_id: string_field(&obj, &["ROOT_ID", "root_id"]),
        label_id: string_field(&obj, &["LABEL_ID", "label_id"]),
        storage_key: string_field(&obj, &["STORAGE_KEY", "storage_key"]),
    })
}

fn get_from_window_config() -> Option<RuntimeConfig> {
    // Expect optional global object: window.__THEMESWITCH_CONFIG = { storage_key: "..." }
    let obj = global_object("__THEMESWITCH_CONFIG")?;
    Some(RuntimeConfig {
        root_id: string_field(&obj, &["root_id", "ROOT_ID"]),
        label_id: string_field(&obj, &["label_id", "LABEL_ID"]),
        storage_key: string_field(&obj, &["storage_key", "STORAGE_KEY"]),
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    let env = get_from_env_js().unwrap_or_default();
    let window_cfg = get_from_window_config().unwrap_or_default();
    env.or(window_cfg)
}

fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.is_empty() {
        return;
    }
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    for (key, value) in [
        ("root_id", &cfg.root_id),
        ("label_id", &cfg.label_id),
        ("storage_key", &cfg.storage_key),
    ] {
        if let Some(value) = value {
            let _ = js_sys::Reflect::set(
                &obj,
                &key.into(),
                &wasm_bindgen::JsValue::from_str(value),
            );
        }
    }
    let _ = js_sys::Reflect::set(&w, &"__THEMESWITCH_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolve the runtime configuration once: window globals first, then an
/// optional `./config.json` next to the bundle, then compiled defaults.
pub async fn init() {
    if CONFIG.get().is_some() {
        return;
    }
    let mut snapshot = snapshot_from_globals();
    if let Some(fetched) = fetch_runtime_config().await {
        write_window_config(&fetched);
        snapshot = snapshot.or(fetched);
    }
    let _ = CONFIG.set(snapshot.resolve());
}

fn resolved() -> ResolvedConfig {
    match CONFIG.get() {
        Some(cfg) => cfg.clone(),
        None => RuntimeConfig::default().resolve(),
    }
}

pub fn root_id() -> String {
    resolved().root_id
}

pub fn label_id() -> String {
    resolved().label_id
}

pub fn storage_key() -> String {
    resolved().storage_key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_prefers_the_earlier_source() {
        let env = RuntimeConfig {
            storage_key: Some("env-theme".into()),
            ..Default::default()
        };
        let window_cfg = RuntimeConfig {
            root_id: Some("page".into()),
            storage_key: Some("window-theme".into()),
            ..Default::default()
        };
        let merged = env.or(window_cfg);
        assert_eq!(merged.storage_key.as_deref(), Some("env-theme"));
        assert_eq!(merged.root_id.as_deref(), Some("page"));
        assert_eq!(merged.label_id, None);
    }

    #[test]
    fn resolve_falls_back_to_defaults() {
        let resolved = RuntimeConfig::default().resolve();
        assert_eq!(resolved.root_id, DEFAULT_ROOT_ID);
        assert_eq!(resolved.label_id, DEFAULT_LABEL_ID);
        assert_eq!(resolved.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn partial_config_json_deserializes() {
        let cfg: RuntimeConfig = serde_json::from_str(r#"{"storage_key":"site-theme"}"#).unwrap();
        assert_eq!(cfg.storage_key.as_deref(), Some("site-theme"));
        assert_eq!(cfg.root_id, None);
        assert!(!cfg.is_empty());
    }
}
