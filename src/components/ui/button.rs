use leptos::prelude::*;
use leptos_ui::variants;

// Class names come from the shared design-system stylesheet.
variants! {
    Button {
        base: "ds-btn",
        variants: {
            variant: {
                Default: "ds-btn--primary",
                Secondary: "ds-btn--secondary",
                Ghost: "ds-btn--ghost",
            },
            size: {
                Default: "ds-btn--md",
                Sm: "ds-btn--sm",
            }
        },
        component: {
            element: button
        }
    }
}
