mod catalogue;

use crate::api::ApiStatus;
use crate::bridge::MODULE_NAME;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardActions, CardText, CardTitle, Input, Label,
    Spinner,
};
use crate::format::{
    format_card, format_currency, format_cvc, format_phone, parse_quantity, PHONE_COUNTRIES,
};
use crate::locale;
use crate::overlay::{InlineOverlay, Subscriptions, HOST_ID};
use crate::state::{AppContext, SHARED_MESSAGE_KEY};
use crate::storage::{is_module_disabled, LocalStore, THEME_KEY};
use crate::uikit;
use crate::util::{iso_now, set_document_title, shared_message_update};
use catalogue::{
    AdvancedInputsCard, ConfirmDialog, DataDisplayCard, DataGridCard, DropdownCard, EditorCard,
    FeedbackCard, GridCard, NavigationCard, OverlaysCard, SelectMenu, TabsCard, TimelineCard,
    TreeViewCard, TypographyCard, WidgetScope,
};
use icons::{Eye, EyeOff};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DOCUMENT_TITLE: &str = "Playground React";
pub(crate) const DISABLED_MESSAGE: &str = "Rust module is disabled in monitor.";

const CURRENCIES: [&str; 5] = ["USD", "EUR", "VND", "JPY", "SGD"];
const SELECT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];
const TAGS: [&str; 5] = ["Design", "Product", "Engineering", "Ops", "Research"];
const SELECTED_TAGS: [&str; 2] = ["Design", "Product"];

const INLINE_EDITOR_CSS: &str = r#"
.playground-rust .ds-inline-edit {
  position: relative;
  border-radius: var(--radius-md);
  padding: 2px 6px;
  transition: background-color 150ms ease;
  cursor: text;
}
.playground-rust .ds-inline-edit:hover {
  background-color: var(--color-surface-muted);
}
.playground-rust .ds-inline-editor {
  position: absolute;
  z-index: 40;
  width: min(360px, calc(100vw - 32px));
  min-width: 300px;
  max-width: min(720px, calc(100vw - 32px));
  border-radius: var(--radius-xl);
  border: 1px solid var(--color-border);
  background-color: var(--color-surface);
  padding: 8px 12px 12px 8px;
  box-shadow: var(--ds-shadow-2);
  resize: both;
  overflow: auto;
}
"#;

/// Module root: locale and title apply even while the module is switched off.
#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let locale_sig = app_state.0.locale;
    let label_sig = app_state.0.locale_label;

    let mut subs = locale::install(move |locale, label| {
        locale_sig.set(locale);
        label_sig.set(label);
    });
    subs.push(set_document_title(DOCUMENT_TITLE));
    let _subs = StoredValue::new_local(subs);

    let disabled = LocalStore::open()
        .map(|store| is_module_disabled(&store, MODULE_NAME))
        .unwrap_or(false);

    if disabled {
        tracing::info!(module = MODULE_NAME, "module disabled in monitor");
        return view! { <section>{DISABLED_MESSAGE}</section> }.into_any();
    }

    view! { <Playground /> }.into_any()
}

#[component]
fn Playground() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;
    let locale = state.locale;
    let locale_label = state.locale_label;
    let api_status = state.api_status;
    let shared = state.shared_message;

    let root_ref = NodeRef::<html::Section>::new();
    let disposers = StoredValue::new_local(Subscriptions::new());
    let show_dialog = RwSignal::new(false);

    // ui-kit widgets in the cards below register their cleanup here.
    provide_context(WidgetScope(disposers));

    // Theme + design tokens once the root section exists.
    Effect::new(move |installed: Option<bool>| {
        if installed == Some(true) {
            return true;
        }
        let Some(root) = root_ref.get() else {
            return false;
        };
        uikit::install_design_system();
        let toggle = uikit::install_theme(&root, THEME_KEY);
        disposers.update_value(|d| d.push(toggle));
        true
    });

    // Health check.
    let api = state.api_client.get_value();
    let api_configured = api.is_configured();
    if api_configured {
        spawn_local(async move {
            let res = api.health().await;
            if let Err(e) = &res {
                tracing::warn!(error = %e, "health check failed");
            }
            api_status.set(ApiStatus::from(&res));
        });
    }

    // Shared message.
    let unsubscribe = uikit::subscribe_shared_string(SHARED_MESSAGE_KEY, move |value| {
        shared.set(value);
    });
    disposers.update_value(|d| d.push(unsubscribe));

    let on_share = move |_| {
        let next = shared_message_update(&iso_now());
        uikit::set_shared_string(SHARED_MESSAGE_KEY, &next);
        shared.set(next);
    };

    let api_base_url = state
        .env
        .with_value(|env| env.api_base_url.clone().unwrap_or_default());

    on_cleanup(move || {
        disposers.try_update_value(|d| d.clear());
    });

    view! {
        <section node_ref=root_ref class="playground-rust">
            <style>{INLINE_EDITOR_CSS}</style>
            <div class="ds-container ds-stack-6">
                <header class="ds-appbar">
                    <div class="ds-toolbar">
                        <div class="ds-toolbar__title">"UI Kit Playground"</div>
                        <div class="ds-toolbar__actions">
                            <span class="ds-caption">"Rust"</span>
                            <span class="ds-caption">
                                {move || format!("{}: {}", locale_label.get(), locale.get())}
                            </span>
                        </div>
                    </div>
                </header>

                <Card>
                    <h1 class="ds-h3">"Status"</h1>
                    <CardText>"API_BASE_URL: " {api_base_url}</CardText>
                    <CardText>
                        "API /health: "
                        {move || api_status.get().to_string()}
                        <Show when=move || api_configured && api_status.get() == ApiStatus::Idle>
                            " " <Spinner />
                        </Show>
                    </CardText>
                    <CardText>"Shared message: " {move || shared.get()}</CardText>
                    <CardActions>
                        <Button on:click=on_share>"Rust UI Button"</Button>
                        <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                        <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                    </CardActions>
                </Card>

                <TypographyCard />
                <GridCard />
                <TimelineCard />
                <TabsCard />
                <DataGridCard />
                <TreeViewCard />
                <OverlaysCard show_dialog=show_dialog />
                <FormsCard />
                <EditorCard />
                <InlineEditorCard />
                <DropdownCard />
                <DataDisplayCard />
                <NavigationCard />
                <AdvancedInputsCard />
                <FeedbackCard />
            </div>
            <Show when=move || show_dialog.get()>
                <ConfirmDialog show_dialog=show_dialog />
            </Show>
        </section>
    }
}

#[component]
fn FormsCard() -> impl IntoView {
    let phone_country = RwSignal::new(PHONE_COUNTRIES[0].to_string());
    let phone = RwSignal::new(String::new());
    let card = RwSignal::new(String::new());
    let cvc = RwSignal::new(String::new());
    let quantity = RwSignal::new(1u32);
    let amount = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let phone_mask = Callback::new(move |raw: String| format_phone(&raw, &phone_country.get_untracked()));
    let email = RwSignal::new(String::new());

    // Re-mask the number already typed under the new dialing code.
    let on_country = Callback::new(move |code: Option<String>| {
        let country = code.unwrap_or_else(|| PHONE_COUNTRIES[0].to_string());
        phone.update(|p| *p = format_phone(p, &country));
        phone_country.set(country);
    });

    view! {
        <Card>
            <CardTitle>"Form Inputs"</CardTitle>
            <div class="ds-grid-2">
                <div class="ds-field">
                    <Label html_for="playground-first-name">"First name"</Label>
                    <input id="playground-first-name" class="ds-input" placeholder="Jane" />
                    <span class="ds-helper">"Required"</span>
                </div>
                <div class="ds-field">
                    <Label html_for="playground-last-name">"Last name"</Label>
                    <input id="playground-last-name" class="ds-input" placeholder="Doe" />
                </div>
            </div>
            <div class="ds-field">
                <Label html_for="playground-email">"Email"</Label>
                <div class="ds-input-group">
                    <Input id="playground-email" placeholder="you@domain.com" bind_value=email />
                    <Button variant=ButtonVariant::Secondary>"Verify"</Button>
                </div>
                <span class="ds-error">"Invalid email"</span>
            </div>
            <div class="ds-field">
                <Label html_for="playground-password">"Password"</Label>
                <div class="ds-input-group relative">
                    <input
                        id="playground-password"
                        class="ds-input pr-10"
                        placeholder="Create a password"
                        autocomplete="new-password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        attr:r#type="button"
                        attr:aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        <Show when=move || show_password.get() fallback=|| view! { <Eye /> }>
                            <EyeOff />
                        </Show>
                    </Button>
                </div>
                <span class="ds-helper">"Use at least 8 characters."</span>
            </div>

            <div class="ds-grid-2">
                <div class="ds-field">
                    <Label html_for="playground-phone">"Phone number"</Label>
                    <div class="ds-input-group">
                        <SelectMenu
                            class="ds-phone-select"
                            options=&PHONE_COUNTRIES
                            placeholder="Code"
                            label=PHONE_COUNTRIES[0]
                            on_change=on_country
                        />
                        <Input
                            id="playground-phone"
                            input_mode="tel"
                            placeholder="(555) 123-4567"
                            bind_value=phone
                            transform=phone_mask
                        />
                    </div>
                    <span class="ds-helper">"Select country code"</span>
                </div>
            </div>

            <div class="ds-credit-card-group">
                <div class="ds-credit-card-group__title">"Card details"</div>
                <div class="ds-grid-2">
                    <div class="ds-field">
                        <Label html_for="playground-card">"Credit card"</Label>
                        <Input
                            id="playground-card"
                            input_mode="numeric"
                            placeholder="1234 5678 9012 3456"
                            bind_value=card
                            transform=Callback::new(|raw: String| format_card(&raw))
                        />
                    </div>
                    <div class="ds-field">
                        <Label html_for="playground-cvc">"CVC"</Label>
                        <Input
                            id="playground-cvc"
                            input_mode="numeric"
                            placeholder="123"
                            bind_value=cvc
                            transform=Callback::new(|raw: String| format_cvc(&raw))
                        />
                        <span class="ds-helper">"3–4 digits"</span>
                    </div>
                </div>
            </div>

            <div class="ds-grid-2">
                <div class="ds-field">
                    <Label>"Quantity"</Label>
                    <div class="ds-input-group">
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on:click=move |_| quantity.update(|q| *q = q.saturating_sub(1))
                        >
                            "−"
                        </Button>
                        <input
                            class="ds-input"
                            inputmode="numeric"
                            prop:value=move || quantity.get().to_string()
                            on:input=move |ev| quantity.set(parse_quantity(&event_target_value(&ev)))
                        />
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on:click=move |_| quantity.update(|q| *q = q.saturating_add(1))
                        >
                            "+"
                        </Button>
                    </div>
                    <span class="ds-helper">"Stepper input"</span>
                </div>

                <div class="ds-field">
                    <Label html_for="playground-amount">"Amount"</Label>
                    <div class="ds-input-group">
                        <SelectMenu
                            class="ds-currency-select"
                            options=&CURRENCIES
                            placeholder="Currency"
                            label=CURRENCIES[0]
                        />
                        <Input
                            id="playground-amount"
                            input_mode="decimal"
                            placeholder="0.00"
                            bind_value=amount
                            transform=Callback::new(|raw: String| format_currency(&raw))
                        />
                    </div>
                    <span class="ds-helper">"Currency input"</span>
                </div>
            </div>

            <div class="ds-inline-4">
                <label class="ds-inline-2">
                    <input type="checkbox" class="ds-checkbox" />
                    <span class="ds-body2">"Remember me"</span>
                </label>
                <label class="ds-inline-2">
                    <input type="radio" name="playground-radio" class="ds-radio" />
                    <span class="ds-body2">"Option A"</span>
                </label>
                <label class="ds-switch-field">
                    <input type="checkbox" class="ds-switch-input" />
                    <span class="ds-switch-control"></span>
                    <span class="ds-body2">"Notifications"</span>
                </label>
            </div>
            <textarea class="ds-textarea" placeholder="Message"></textarea>
            <SelectMenu options=&SELECT_OPTIONS placeholder="Choose an option" />
            <SelectMenu options=&TAGS placeholder="Select tags" multiple=true selected=&SELECTED_TAGS />
        </Card>
    }
}

#[component]
fn InlineEditorCard() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let config = app_state.0.env.with_value(|env| env.inline_editor.clone());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return ().into_any();
    };

    let overlay = StoredValue::new_local(InlineOverlay::new(config, document.clone()));
    let overlay_view = overlay.with_value(|o| o.view());
    let triggers = StoredValue::new_local(Subscriptions::new());

    // The editable paragraphs exist once this component has rendered.
    Effect::new(move |_| {
        let subs = overlay.with_value(|o| o.bind_triggers(&document));
        triggers.update_value(|t| t.replace(subs));
    });

    on_cleanup(move || {
        triggers.try_update_value(|t| t.clear());
        overlay.try_with_value(|o| o.shutdown());
    });

    view! {
        <Card class="z-10">
            <CardTitle>"Inline Text Editor"</CardTitle>
            <p class="ds-body1 ds-inline-edit" data-ds-inline-edit="headline">
                "Build delightful experiences with a unified design system."
            </p>
            <p class="ds-body2 ds-inline-edit" data-ds-inline-edit="subhead">
                "Hover or click to edit inline. Changes save to the text immediately."
            </p>
            <Show when=move || overlay_view.get().open>
                <div
                    class="ds-inline-editor ds-anim-fade-in"
                    style:left=move || format!("{}px", overlay_view.get().left)
                    style:top=move || format!("{}px", overlay_view.get().top)
                    on:mouseenter=move |_| overlay.with_value(|o| o.hover_enter())
                    on:mouseleave=move |_| overlay.with_value(|o| o.hover_leave())
                    on:pointerdown=move |_| overlay.with_value(|o| o.pointer_down())
                    on:pointermove=move |ev: web_sys::PointerEvent| overlay.with_value(|o| o.pointer_move(&ev))
                    on:focusin=move |_| overlay.with_value(|o| o.focus_in())
                    on:focusout=move |ev: web_sys::FocusEvent| overlay.with_value(|o| o.focus_out(&ev))
                >
                    <div class="ds-stack-2">
                        <Label>"Edit text"</Label>
                        <div id=HOST_ID data-ds-editor-shell=""></div>
                        <CardActions>
                            <Button size=ButtonSize::Sm on:click=move |_| overlay.with_value(|o| o.save())>
                                "Save"
                            </Button>
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on:click=move |_| overlay.with_value(|o| o.cancel())
                            >
                                "Cancel"
                            </Button>
                        </CardActions>
                    </div>
                </div>
            </Show>
        </Card>
    }
    .into_any()
}
