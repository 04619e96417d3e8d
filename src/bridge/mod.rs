//! Host-shell signals that enable or disable this module at runtime.
//!
//! The monitor posts `{type: "mfe-toggle", disabled: [...]}`; trusted senders
//! get the list persisted under [`DISABLED_MODULES_KEY`] and the page reloaded
//! so the gate in the page re-evaluates. Other tabs see the write through the
//! `storage` event and reload too.

use crate::overlay::{listen, Subscriptions};
use crate::storage::{save_json, KeyValueStore, LocalStore, StorageError, DISABLED_MODULES_KEY};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub(crate) const MODULE_NAME: &str = "@org/playground";
const TOGGLE_MESSAGE_TYPE: &str = "mfe-toggle";
const BRIDGE_QUERY_FLAG: &str = "mfe-bridge";

#[derive(Debug, Error)]
pub(crate) enum BridgeError {
    #[error("message from untrusted origin `{0}`")]
    UntrustedOrigin(String),
    #[error("not an mfe-toggle message")]
    NotToggle,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ToggleOutcome {
    Reloaded,
    /// Embedded behind the bridge; the host reloads us itself.
    Stored,
}

#[derive(Debug, Deserialize)]
struct ToggleMessage {
    #[serde(rename = "type")]
    kind: String,
    disabled: Vec<serde_json::Value>,
}

impl ToggleMessage {
    fn parse(json: &str) -> Option<Self> {
        serde_json::from_str::<Self>(json)
            .ok()
            .filter(|m| m.kind == TOGGLE_MESSAGE_TYPE)
    }
}

fn local_origin_pattern() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://(localhost|127\.0\.0\.1)(:\d+)?$").ok())
        .as_ref()
}

/// Same origin as the page, or a loopback dev server on any port.
pub(crate) fn is_trusted_origin(origin: &str, page_origin: &str) -> bool {
    origin == page_origin || local_origin_pattern().is_some_and(|re| re.is_match(origin))
}

/// Whether the query string carries `mfe-bridge=1`.
pub(crate) fn is_bridged(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(k, v)| {
            let k = urlencoding::decode(k).map(|s| s.into_owned()).unwrap_or_default();
            let v = urlencoding::decode(v).map(|s| s.into_owned()).unwrap_or_default();
            k == BRIDGE_QUERY_FLAG && v == "1"
        })
}

pub(crate) trait Reloader {
    fn reload(&self);
}

struct LocationReloader;

impl Reloader for LocationReloader {
    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            tracing::warn!(error = ?e, "location.reload failed");
        }
    }
}

pub(crate) struct Bridge<S, R> {
    store: S,
    reloader: R,
    page_origin: String,
    bridged: bool,
}

impl<S: KeyValueStore, R: Reloader> Bridge<S, R> {
    pub fn new(store: S, reloader: R, page_origin: String, search: &str) -> Self {
        Self {
            store,
            reloader,
            page_origin,
            bridged: is_bridged(search),
        }
    }

    /// Handle a `message` event whose data was serialized to `data_json`.
    pub fn handle_message(
        &self,
        origin: &str,
        data_json: Option<&str>,
    ) -> Result<ToggleOutcome, BridgeError> {
        if !is_trusted_origin(origin, &self.page_origin) {
            return Err(BridgeError::UntrustedOrigin(origin.to_string()));
        }
        let msg = data_json
            .and_then(ToggleMessage::parse)
            .ok_or(BridgeError::NotToggle)?;

        save_json(&self.store, DISABLED_MODULES_KEY, &msg.disabled)?;

        if self.bridged {
            return Ok(ToggleOutcome::Stored);
        }
        self.reloader.reload();
        Ok(ToggleOutcome::Reloaded)
    }

    /// Handle a `storage` event; returns whether the page was reloaded.
    pub fn handle_storage_change(&self, key: Option<&str>) -> bool {
        if key != Some(DISABLED_MODULES_KEY) {
            return false;
        }
        self.reloader.reload();
        true
    }
}

/// `undefined`, functions and cyclic values yield `None`.
fn stringify(value: &JsValue) -> Option<String> {
    js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string())
}

/// Install the window listeners for the lifetime of the returned subscriptions.
pub(crate) fn install() -> Subscriptions {
    let mut subs = Subscriptions::new();
    let Some(window) = web_sys::window() else {
        return subs;
    };
    let store = match LocalStore::open() {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "host bridge disabled");
            return subs;
        }
    };

    let location = window.location();
    let bridge = std::rc::Rc::new(Bridge::new(
        store,
        LocationReloader,
        location.origin().unwrap_or_default(),
        &location.search().unwrap_or_default(),
    ));

    let b = bridge.clone();
    subs.push(listen(window.as_ref(), "message", move |ev: web_sys::MessageEvent| {
        let json = stringify(&ev.data());
        match b.handle_message(&ev.origin(), json.as_deref()) {
            Ok(outcome) => tracing::debug!(?outcome, "module toggle applied"),
            Err(BridgeError::NotToggle) => {}
            Err(e) => tracing::warn!(error = %e, "module toggle rejected"),
        }
    }));

    subs.push(listen(window.as_ref(), "storage", move |ev: web_sys::StorageEvent| {
        bridge.handle_storage_change(ev.key().as_deref());
    }));

    tracing::debug!(module = MODULE_NAME, "host bridge installed");
    subs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::load_disabled_modules;
    use crate::storage::memory::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingReloader(Rc<Cell<u32>>);

    impl Reloader for CountingReloader {
        fn reload(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    const PAGE: &str = "https://playground.example.com";
    const TOGGLE: &str = r#"{"type":"mfe-toggle","disabled":["@org/playground"]}"#;

    fn bridge(search: &str) -> (Bridge<MemoryStore, CountingReloader>, Rc<Cell<u32>>) {
        let reloader = CountingReloader::default();
        let count = reloader.0.clone();
        let b = Bridge::new(MemoryStore::default(), reloader, PAGE.to_string(), search);
        (b, count)
    }

    #[test]
    fn test_trusted_origins() {
        assert!(is_trusted_origin(PAGE, PAGE));
        assert!(is_trusted_origin("http://localhost", PAGE));
        assert!(is_trusted_origin("http://localhost:9000", PAGE));
        assert!(is_trusted_origin("https://127.0.0.1:8080", PAGE));

        assert!(!is_trusted_origin("https://evil.example.com", PAGE));
        assert!(!is_trusted_origin("http://localhost.evil.com", PAGE));
        assert!(!is_trusted_origin("http://localhost:80/path", PAGE));
        assert!(!is_trusted_origin("ftp://localhost", PAGE));
    }

    #[test]
    fn test_bridge_flag() {
        assert!(is_bridged("?mfe-bridge=1"));
        assert!(is_bridged("?a=b&mfe-bridge=1"));
        assert!(is_bridged("?mfe%2Dbridge=1"));
        assert!(!is_bridged(""));
        assert!(!is_bridged("?mfe-bridge=0"));
        assert!(!is_bridged("?mfe-bridge"));
    }

    #[test]
    fn test_untrusted_origin_leaves_storage_untouched() {
        let (b, reloads) = bridge("");
        let err = b
            .handle_message("https://evil.example.com", Some(TOGGLE))
            .unwrap_err();

        assert!(matches!(err, BridgeError::UntrustedOrigin(_)));
        assert_eq!(b.store.len(), 0);
        assert_eq!(reloads.get(), 0);
    }

    #[test]
    fn test_trusted_toggle_persists_and_reloads_once() {
        let (b, reloads) = bridge("?tab=1");
        let outcome = b.handle_message("http://localhost:9000", Some(TOGGLE)).unwrap();

        assert_eq!(outcome, ToggleOutcome::Reloaded);
        assert_eq!(reloads.get(), 1);
        assert_eq!(load_disabled_modules(&b.store), vec![MODULE_NAME.to_string()]);
    }

    #[test]
    fn test_bridged_page_does_not_reload() {
        let (b, reloads) = bridge("?mfe-bridge=1");
        let outcome = b.handle_message(PAGE, Some(TOGGLE)).unwrap();

        assert_eq!(outcome, ToggleOutcome::Stored);
        assert_eq!(reloads.get(), 0);
        assert_eq!(b.store.len(), 1);
    }

    #[test]
    fn test_malformed_messages_ignored() {
        let (b, reloads) = bridge("");
        for data in [
            None,
            Some("null"),
            Some(r#"{"type":"other","disabled":[]}"#),
            Some(r#"{"type":"mfe-toggle","disabled":"@org/playground"}"#),
            Some(r#"{"type":"mfe-toggle"}"#),
        ] {
            let err = b.handle_message(PAGE, data).unwrap_err();
            assert!(matches!(err, BridgeError::NotToggle), "{data:?}");
        }
        assert_eq!(b.store.len(), 0);
        assert_eq!(reloads.get(), 0);
    }

    #[test]
    fn test_write_failure_skips_reload() {
        let (b, reloads) = bridge("");
        b.store.fail_writes();
        let err = b.handle_message(PAGE, Some(TOGGLE)).unwrap_err();

        assert!(matches!(err, BridgeError::Storage(_)));
        assert_eq!(reloads.get(), 0);
    }

    #[test]
    fn test_storage_change_reloads_only_for_disabled_key() {
        let (b, reloads) = bridge("");
        assert!(!b.handle_storage_change(Some("app-locale")));
        assert!(!b.handle_storage_change(None));
        assert!(b.handle_storage_change(Some(DISABLED_MODULES_KEY)));
        assert_eq!(reloads.get(), 1);
    }
}
