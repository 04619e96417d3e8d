mod api;
mod app;
mod bridge;
mod components;
mod config;
mod format;
mod locale;
mod logging;
pub mod overlay;
mod pages;
mod state;
mod storage;
mod uikit;
mod util;

use crate::app::App;
use crate::config::EnvConfig;
use crate::overlay::Subscriptions;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    /// The live view while mounted by the host; dropping it unmounts.
    static MOUNTED: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
    /// Window listeners installed once per page load.
    static BRIDGE: RefCell<Option<Subscriptions>> = const { RefCell::new(None) };
}

fn resolved() -> js_sys::Promise {
    js_sys::Promise::resolve(&JsValue::UNDEFINED)
}

/// `props.domElement` when the host provides one, else `<body>`.
fn mount_target(props: &JsValue) -> Option<web_sys::HtmlElement> {
    let from_props = props
        .is_object()
        .then(|| js_sys::Reflect::get(props, &JsValue::from_str("domElement")).ok())
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    from_props.or_else(|| web_sys::window()?.document()?.body())
}

fn mount_into(parent: web_sys::HtmlElement) {
    let handle = leptos::mount::mount_to(parent, App);
    MOUNTED.with(|m| {
        // Replacing a previous view drops (unmounts) it first.
        *m.borrow_mut() = Some(Box::new(handle));
    });
    tracing::debug!(module = bridge::MODULE_NAME, "mounted");
}

/// Lifecycle hook for the micro-frontend host.
#[wasm_bindgen]
pub fn bootstrap(_props: JsValue) -> js_sys::Promise {
    resolved()
}

#[wasm_bindgen]
pub fn mount(props: JsValue) -> js_sys::Promise {
    match mount_target(&props) {
        Some(parent) => {
            mount_into(parent);
            resolved()
        }
        None => js_sys::Promise::reject(&JsValue::from_str("no element to mount into")),
    }
}

#[wasm_bindgen]
pub fn unmount(_props: JsValue) -> js_sys::Promise {
    let view = MOUNTED.with(|m| m.borrow_mut().take());
    if view.is_some() {
        drop(view);
        tracing::debug!(module = bridge::MODULE_NAME, "unmounted");
    }
    resolved()
}

/// Whether a single-spa root config is driving this page.
fn hosted() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("singleSpaNavigate")).ok())
        .is_some_and(|v| v.is_function())
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let env = EnvConfig::new();
    logging::init(env.log_level.as_deref());

    BRIDGE.with(|b| {
        if b.borrow().is_none() {
            *b.borrow_mut() = Some(bridge::install());
        }
    });

    // Standalone dev server: nobody will call `mount`.
    if !hosted() {
        if let Some(body) = mount_target(&JsValue::UNDEFINED) {
            mount_into(body);
        }
    }
}
