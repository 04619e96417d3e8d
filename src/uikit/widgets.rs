//! Catalogue widgets driven by the ui-kit's `init*` functions.
//!
//! Each widget takes over markup the page already rendered and hands back a
//! cleanup function, wrapped here as a [`Disposer`].

use super::{disposer_from, set};
use crate::overlay::Disposer;
use js_sys::{Object, JSON};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(module = "@mfe-sols/ui-kit")]
extern "C" {
    #[wasm_bindgen(js_name = initTabs)]
    fn init_tabs_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initDatagrid)]
    fn init_datagrid_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initDatepicker)]
    fn init_datepicker_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initDatepickerDropdown)]
    fn init_datepicker_dropdown_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initDateRangeCalendar)]
    fn init_date_range_calendar_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initDateRangeDropdown)]
    fn init_date_range_dropdown_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initDateTimeDropdown)]
    fn init_date_time_dropdown_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initTreeView)]
    fn init_tree_view_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initSlider)]
    fn init_slider_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initRangeSlider)]
    fn init_range_slider_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initAutocomplete)]
    fn init_autocomplete_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initSelectMenu)]
    fn init_select_menu_js(el: &web_sys::HtmlElement, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_name = initTooltip)]
    fn init_tooltip_js(trigger: &web_sys::HtmlElement, tooltip: &web_sys::HtmlElement) -> JsValue;

    #[wasm_bindgen(js_name = initDropdown)]
    fn init_dropdown_js(trigger: &web_sys::HtmlElement, content: &web_sys::HtmlElement) -> JsValue;

    #[wasm_bindgen(js_name = initDialog)]
    fn init_dialog_js(
        dialog: &web_sys::HtmlElement,
        backdrop: Option<web_sys::HtmlElement>,
        options: &JsValue,
    ) -> JsValue;

    #[wasm_bindgen(js_name = createToast)]
    fn create_toast_js(options: &JsValue);
}

const PICKER_LOCALE: &str = "en-US";
const RANGE_LENGTH_DAYS: u32 = 4;
const YEAR_SPAN: i32 = 6;

/// Years offered by the month/year dropdowns around `current`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

pub fn compact_year_range(current: i32) -> YearRange {
    YearRange {
        start: current - YEAR_SPAN,
        end: current + YEAR_SPAN,
    }
}

/// Single-element widgets and the options they start with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Widget {
    Tabs { active: &'static str },
    DataGrid,
    Datepicker,
    DatepickerDropdown,
    DateRangeCalendar,
    DateRangeDropdown { time_step_minutes: u32 },
    DateTimeDropdown,
    TreeView,
    Slider { value: u32 },
    RangeSlider { min: u32, max: u32 },
    Autocomplete,
    SelectMenu,
}

impl Widget {
    /// Plain-data options; callbacks and dates are attached in [`Widget::init`].
    pub fn options(&self) -> Value {
        match *self {
            Widget::Tabs { active } => json!({ "activeValue": active }),
            Widget::Datepicker | Widget::DateRangeCalendar => json!({
                "showMonthYearDropdown": true,
                "monthFormat": "short",
                "locale": PICKER_LOCALE,
            }),
            Widget::DateRangeDropdown { time_step_minutes } => json!({
                "showMonthYearDropdown": true,
                "monthFormat": "short",
                "enableTimeRange": true,
                "timeStepMinutes": time_step_minutes,
                "locale": PICKER_LOCALE,
            }),
            // Weekends are not bookable.
            Widget::DateTimeDropdown => json!({
                "disabledWeekdays": [0, 6],
                "locale": PICKER_LOCALE,
            }),
            Widget::Slider { value } => json!({ "value": value }),
            Widget::RangeSlider { min, max } => json!({ "minValue": min, "maxValue": max }),
            Widget::DatepickerDropdown
            | Widget::DataGrid
            | Widget::TreeView
            | Widget::Autocomplete
            | Widget::SelectMenu => json!({}),
        }
    }

    pub fn wants_year_range(&self) -> bool {
        matches!(
            self,
            Widget::Datepicker
                | Widget::DatepickerDropdown
                | Widget::DateRangeCalendar
                | Widget::DateRangeDropdown { .. }
        )
    }

    pub fn init(&self, el: &web_sys::HtmlElement) -> Disposer {
        let options = to_object(&self.options());

        let year_range = self.wants_year_range().then(|| {
            let cb = Closure::<dyn Fn(JsValue) -> JsValue>::new(|current: JsValue| {
                let year = current
                    .dyn_into::<js_sys::Date>()
                    .map(|d| d.get_full_year() as i32)
                    .unwrap_or_else(|_| js_sys::Date::new_0().get_full_year() as i32);
                serde_json::to_value(compact_year_range(year))
                    .map(|v| JsValue::from(to_object(&v)))
                    .unwrap_or(JsValue::UNDEFINED)
            });
            set(&options, "yearRange", cb.as_ref());
            cb
        });

        if *self == Widget::DateRangeCalendar {
            let start = js_sys::Date::new_0();
            let end = js_sys::Date::new_0();
            end.set_date(end.get_date() + RANGE_LENGTH_DAYS);
            set(&options, "initialStart", &start);
            set(&options, "initialEnd", &end);
        }

        let init: fn(&web_sys::HtmlElement, &JsValue) -> JsValue = match self {
            Widget::Tabs { .. } => init_tabs_js,
            Widget::DataGrid => init_datagrid_js,
            Widget::Datepicker => init_datepicker_js,
            Widget::DatepickerDropdown => init_datepicker_dropdown_js,
            Widget::DateRangeCalendar => init_date_range_calendar_js,
            Widget::DateRangeDropdown { .. } => init_date_range_dropdown_js,
            Widget::DateTimeDropdown => init_date_time_dropdown_js,
            Widget::TreeView => init_tree_view_js,
            Widget::Slider { .. } => init_slider_js,
            Widget::RangeSlider { .. } => init_range_slider_js,
            Widget::Autocomplete => init_autocomplete_js,
            Widget::SelectMenu => init_select_menu_js,
        };

        tracing::trace!(widget = ?self, "ui-kit widget init");
        let dispose = disposer_from(init(el, &options));
        Disposer::new(move || {
            dispose.dispose();
            drop(year_range);
        })
    }
}

fn to_object(value: &Value) -> Object {
    JSON::parse(&value.to_string())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .unwrap_or_else(Object::new)
}

/// `data-options` / `data-value` attribute for a select menu.
pub fn options_json(values: &[&str]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// First entry of a select-menu change payload, which is a string or an array of strings.
pub fn first_selected(value: &JsValue) -> Option<String> {
    let first = match value.dyn_ref::<js_sys::Array>() {
        Some(values) => values.get(0).as_string(),
        None => value.as_string(),
    };
    first.filter(|v| !v.is_empty())
}

/// Select menu that reports its selection through `on_change`.
pub fn init_select_menu(el: &web_sys::HtmlElement, on_change: impl Fn(Option<String>) + 'static) -> Disposer {
    let callback = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
        on_change(first_selected(&value));
    });
    let options = Object::new();
    set(&options, "onChange", callback.as_ref());

    let dispose = disposer_from(init_select_menu_js(el, &options));
    Disposer::new(move || {
        dispose.dispose();
        drop(callback);
    })
}

pub fn init_tooltip(trigger: &web_sys::HtmlElement, tooltip: &web_sys::HtmlElement) -> Disposer {
    disposer_from(init_tooltip_js(trigger, tooltip))
}

pub fn init_dropdown(trigger: &web_sys::HtmlElement, content: &web_sys::HtmlElement) -> Disposer {
    disposer_from(init_dropdown_js(trigger, content))
}

pub fn init_dialog(
    dialog: &web_sys::HtmlElement,
    backdrop: Option<web_sys::HtmlElement>,
    on_close: impl Fn() + 'static,
) -> Disposer {
    let callback = Closure::<dyn Fn()>::new(on_close);
    let options = Object::new();
    set(&options, "onClose", callback.as_ref());

    let dispose = disposer_from(init_dialog_js(dialog, backdrop, &options));
    Disposer::new(move || {
        dispose.dispose();
        drop(callback);
    })
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Toast<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub variant: &'a str,
}

pub fn show_toast(toast: &Toast<'_>) {
    match serde_json::to_value(toast) {
        Ok(value) => create_toast_js(&to_object(&value)),
        Err(e) => tracing::warn!(error = %e, "toast options did not serialize"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_spans_six_years_each_way() {
        assert_eq!(compact_year_range(2026), YearRange { start: 2020, end: 2032 });
    }

    #[test]
    fn test_picker_options() {
        assert_eq!(Widget::Tabs { active: "overview" }.options()["activeValue"], "overview");
        assert_eq!(Widget::Datepicker.options()["monthFormat"], "short");

        let range = Widget::DateRangeDropdown { time_step_minutes: 15 }.options();
        assert_eq!(range["enableTimeRange"], true);
        assert_eq!(range["timeStepMinutes"], 15);

        assert_eq!(Widget::DateTimeDropdown.options()["disabledWeekdays"], json!([0, 6]));
        assert_eq!(Widget::DataGrid.options(), json!({}));
    }

    #[test]
    fn test_slider_options() {
        assert_eq!(Widget::Slider { value: 40 }.options(), json!({ "value": 40 }));
        assert_eq!(
            Widget::RangeSlider { min: 25, max: 70 }.options(),
            json!({ "minValue": 25, "maxValue": 70 })
        );
    }

    #[test]
    fn test_year_range_only_for_date_pickers() {
        assert!(Widget::Datepicker.wants_year_range());
        assert!(Widget::DateRangeDropdown { time_step_minutes: 15 }.wants_year_range());
        assert!(!Widget::DateTimeDropdown.wants_year_range());
        assert!(!Widget::TreeView.wants_year_range());
    }

    #[test]
    fn test_options_json() {
        assert_eq!(options_json(&["+1", "+33"]), r#"["+1","+33"]"#);
        assert_eq!(options_json(&[]), "[]");
    }

    #[test]
    fn test_toast_serializes_flat() {
        let toast = Toast {
            title: "Saved",
            description: "Your changes were saved.",
            variant: "success",
        };
        assert_eq!(
            serde_json::to_value(&toast).unwrap(),
            json!({ "title": "Saved", "description": "Your changes were saved.", "variant": "success" })
        );
    }
}
