use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, section, "ds-card ds-stack-3"}
    clx! {CardTitle, h2, "ds-h4"}
    clx! {CardText, p, "ds-body2"}
    clx! {CardActions, div, "ds-inline-3"}
}

pub use components::*;
