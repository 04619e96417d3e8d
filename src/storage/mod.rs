use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON array of module names switched off from the host's monitor.
pub(crate) const DISABLED_MODULES_KEY: &str = "mfe-disabled";
pub(crate) const LOCALE_KEY: &str = "app-locale";
pub(crate) const THEME_KEY: &str = "ds-theme:playground-react";

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The slice of the Web Storage API this crate uses.
pub(crate) trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub(crate) struct LocalStore(web_sys::Storage);

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(Self)
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}

pub(crate) fn load_json<T: for<'de> Deserialize<'de>>(
    store: &impl KeyValueStore,
    key: &str,
) -> Option<T> {
    let json = store.get_item(key)?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set_item(key, &json)
}

/// Module names persisted under [`DISABLED_MODULES_KEY`].
///
/// Anything other than a JSON array reads as "nothing disabled"; non-string
/// entries are skipped.
pub(crate) fn load_disabled_modules(store: &impl KeyValueStore) -> Vec<String> {
    match load_json::<serde_json::Value>(store, DISABLED_MODULES_KEY) {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn is_module_disabled(store: &impl KeyValueStore, module: &str) -> bool {
    load_disabled_modules(store).iter().any(|m| m == module)
}
