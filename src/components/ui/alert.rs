use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "ds-alert", "ds-body2"}
    clx! {AlertDescription, p, "ds-alert__description"}
}

pub use components::*;
