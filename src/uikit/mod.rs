//! Bindings to the shared design-system, contracts and i18n packages.
//!
//! The host bundler resolves these module specifiers; this crate only sees
//! the typed wrappers below.

mod widgets;

pub use widgets::{
    init_dialog, init_dropdown, init_select_menu, init_tooltip, options_json, show_toast, Toast, Widget,
};

use crate::overlay::{Disposer, EditorChange, EditorConfig};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(module = "@mfe-sols/ui-kit")]
extern "C" {
    #[wasm_bindgen(js_name = mountEditor)]
    fn mount_editor_js(host: &web_sys::HtmlElement, config: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = sanitizeInlineHtml)]
    fn sanitize_inline_html_js(html: &str) -> String;

    #[wasm_bindgen(js_name = defineDesignSystem)]
    fn define_design_system_js(options: &JsValue);

    #[wasm_bindgen(js_name = ensureTokens)]
    fn ensure_tokens_js();

    #[wasm_bindgen(js_name = initThemeMode)]
    fn init_theme_mode_js(target: &web_sys::Element, storage_key: &str);

    #[wasm_bindgen(js_name = ensureThemeToggle)]
    fn ensure_theme_toggle_js(root: &web_sys::Element, label: &str, options: &JsValue) -> JsValue;
}

#[wasm_bindgen(module = "@mfe-sols/contracts")]
extern "C" {
    #[wasm_bindgen(js_name = getSharedValue)]
    fn get_shared_value_js(key: &str, fallback: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = setSharedValue)]
    fn set_shared_value_js(key: &str, value: &JsValue);

    #[wasm_bindgen(js_name = subscribeSharedValue)]
    fn subscribe_shared_value_js(key: &str, callback: &Function) -> JsValue;
}

#[wasm_bindgen(module = "@mfe-sols/contracts")]
extern "C" {
    #[wasm_bindgen(js_name = initMfeErrorReporter)]
    fn init_mfe_error_reporter_js(module: &str) -> JsValue;
}

#[wasm_bindgen(module = "@mfe-sols/i18n")]
extern "C" {
    #[wasm_bindgen(js_name = getStoredLocale)]
    fn get_stored_locale_js() -> String;

    #[wasm_bindgen(js_name = setLocale)]
    fn set_locale_js(locale: &str);

    #[wasm_bindgen(js_name = t)]
    fn translate_js(key: &str) -> String;
}

pub const THEME_TOGGLE_LABEL: &str = "Toggle theme";

fn set(obj: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn get_string(obj: &JsValue, key: &str) -> String {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Wrap a JS cleanup function (or anything else) as a [`Disposer`].
fn disposer_from(value: JsValue) -> Disposer {
    match value.dyn_into::<Function>() {
        Ok(dispose) => Disposer::new(move || {
            if let Err(e) = dispose.call0(&JsValue::NULL) {
                tracing::warn!(error = ?e, "ui-kit cleanup threw");
            }
        }),
        Err(_) => Disposer::noop(),
    }
}

/// Mount the ui-kit rich-text editor into `host`.
///
/// The change closure lives as long as the returned disposer.
pub fn mount_editor(host: &web_sys::HtmlElement, config: EditorConfig) -> Disposer {
    let toolbar = Object::new();
    set(&toolbar, "variant", &JsValue::from_str("full"));
    let items: Array = config
        .toolbar_items
        .iter()
        .map(|item| JsValue::from_str(item))
        .collect();
    set(&toolbar, "items", &items);

    let on_change = config.on_change.clone();
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
        on_change(EditorChange {
            html: get_string(&payload, "html"),
            markdown: get_string(&payload, "markdown"),
            text: get_string(&payload, "text"),
        });
    });

    let options = Object::new();
    if let Some(label) = &config.label {
        set(&options, "label", &JsValue::from_str(label));
    }
    if let Some(helper) = &config.helper {
        set(&options, "helper", &JsValue::from_str(helper));
    }
    set(&options, "placeholder", &JsValue::from_str(&config.placeholder));
    set(&options, "characterLimit", &JsValue::from(config.character_limit));
    set(&options, "toolbar", &toolbar);
    set(&options, "showGrid", &JsValue::from_bool(config.show_grid));
    set(&options, "showStatus", &JsValue::from_bool(config.show_status));
    set(&options, "onChange", callback.as_ref());

    let dispose = disposer_from(mount_editor_js(host, &options));
    Disposer::new(move || {
        dispose.dispose();
        drop(callback);
    })
}

pub fn sanitize_inline_html(raw: &str) -> String {
    sanitize_inline_html_js(raw)
}

/// Register the design-system custom elements and CSS tokens.
pub fn install_design_system() {
    let options = Object::new();
    set(&options, "tailwind", &JsValue::TRUE);
    define_design_system_js(&options);
    ensure_tokens_js();
}

/// Apply the persisted theme to `root` and attach the floating toggle.
pub fn install_theme(root: &web_sys::Element, storage_key: &str) -> Disposer {
    init_theme_mode_js(root, storage_key);

    let options = Object::new();
    set(&options, "target", root.as_ref());
    set(&options, "storageKey", &JsValue::from_str(storage_key));
    set(&options, "placement", &JsValue::from_str("bottom-right"));
    disposer_from(ensure_theme_toggle_js(root, THEME_TOGGLE_LABEL, &options))
}

pub fn shared_string(key: &str) -> String {
    get_shared_value_js(key, &JsValue::from_str(""))
        .as_string()
        .unwrap_or_default()
}

pub fn set_shared_string(key: &str, value: &str) {
    set_shared_value_js(key, &JsValue::from_str(value));
}

/// Call `on_value` with every new value published under `key`.
pub fn subscribe_shared_string(key: &str, on_value: impl Fn(String) + 'static) -> Disposer {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        on_value(value.as_string().unwrap_or_default());
    });
    let unsubscribe = disposer_from(subscribe_shared_value_js(key, callback.as_ref().unchecked_ref()));
    Disposer::new(move || {
        unsubscribe.dispose();
        drop(callback);
    })
}

pub fn stored_locale() -> String {
    get_stored_locale_js()
}

pub fn set_locale(locale: &str) {
    set_locale_js(locale);
}

pub fn translate(key: &str) -> String {
    translate_js(key)
}

thread_local! {
    static REPORTER: JsValue = init_mfe_error_reporter_js(crate::bridge::MODULE_NAME);
}

/// Forward an error to the host's reporter, created on first use.
pub fn report_error(level: &str, message: &str, detail: &str) {
    REPORTER.with(|reporter| {
        let report = Reflect::get(reporter, &JsValue::from_str("report"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        let Some(report) = report else {
            tracing::warn!("error reporter has no report()");
            return;
        };
        let args = [level, message, detail].map(JsValue::from_str);
        if let Err(e) = report.call3(reporter, &args[0], &args[1], &args[2]) {
            tracing::warn!(error = ?e, "error reporter threw");
        }
    });
}
