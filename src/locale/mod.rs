use crate::overlay::{listen, Subscriptions};
use crate::storage::LOCALE_KEY;
use crate::uikit;
use std::rc::Rc;
use strum::{AsRefStr, Display, EnumString};
use wasm_bindgen::JsValue;

pub(crate) const LOCALE_CHANGE_EVENT: &str = "app-locale-change";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    /// Anything we don't ship translations for falls back to English.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "vi" => Self::Vi,
            _ => Self::En,
        }
    }
}

/// `detail.locale` of an `app-locale-change` event, if it names one.
pub(crate) fn locale_from_detail(detail: &JsValue) -> Option<String> {
    if !detail.is_object() {
        return None;
    }
    js_sys::Reflect::get(detail, &JsValue::from_str("locale"))
        .ok()?
        .as_string()
        .filter(|s| !s.is_empty())
}

/// Persist `locale` through the i18n store and tag `<html lang>`; returns the
/// translated label for the header.
pub(crate) fn apply(locale: Locale) -> String {
    uikit::set_locale(locale.as_ref());
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", locale.as_ref());
    }
    uikit::translate("localeLabel")
}

/// Apply the stored locale now and again whenever the shell announces a
/// change or another tab rewrites it.
pub(crate) fn install(on_change: impl Fn(Locale, String) + 'static) -> Subscriptions {
    let on_change: Rc<dyn Fn(Locale, String)> = Rc::new(on_change);
    let apply_raw = move |raw: &str| {
        let locale = Locale::normalize(raw);
        let label = apply(locale);
        tracing::debug!(%locale, "locale applied");
        on_change(locale, label);
    };
    let apply_raw: Rc<dyn Fn(&str)> = Rc::new(apply_raw);

    apply_raw(&uikit::stored_locale());

    let mut subs = Subscriptions::new();
    let Some(window) = web_sys::window() else {
        return subs;
    };

    let f = apply_raw.clone();
    subs.push(listen(window.as_ref(), LOCALE_CHANGE_EVENT, move |ev: web_sys::CustomEvent| {
        if let Some(raw) = locale_from_detail(&ev.detail()) {
            f(&raw);
        }
    }));

    subs.push(listen(window.as_ref(), "storage", move |ev: web_sys::StorageEvent| {
        if ev.key().as_deref() == Some(LOCALE_KEY) {
            apply_raw(&uikit::stored_locale());
        }
    }));

    subs
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn detail_locale_extracted() {
        let detail = js_sys::Object::new();
        js_sys::Reflect::set(&detail, &"locale".into(), &"vi".into()).unwrap();
        assert_eq!(locale_from_detail(&detail), Some("vi".to_string()));

        let empty = js_sys::Object::new();
        assert_eq!(locale_from_detail(&empty), None);
        assert_eq!(locale_from_detail(&JsValue::NULL), None);
    }
}
