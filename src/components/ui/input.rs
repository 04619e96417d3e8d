use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,

    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,
    /// `inputmode` hint for virtual keyboards (`tel`, `numeric`, `decimal`).
    #[prop(into, optional)] input_mode: String,

    // Two-way binding
    //
    // NOTE: We intentionally avoid `bind:value=...`; manual wiring lets the
    // mask below rewrite what was typed before it lands in the signal.
    #[prop(into)] bind_value: RwSignal<String>,

    /// Input mask applied to every keystroke.
    #[prop(optional)] transform: Option<Callback<String, String>>,
) -> impl IntoView {
    let merged_class = tw_merge!("ds-input", class);

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let next = match transform {
            Some(mask) => mask.run(input.value()),
            None => input.value(),
        };
        // Keep the element in sync even when the mask leaves the signal unchanged.
        if input.value() != next {
            input.set_value(&next);
        }
        bind_value.set(next);
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            id=id
            inputmode=input_mode
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}
