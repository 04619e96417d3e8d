//! UI-kit catalogue: one card per family of design-system components.
//!
//! Interactive widgets are started by the ui-kit once their markup is in the
//! DOM. Their disposers go into the page's [`WidgetScope`].

use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardActions, CardTitle,
};
use crate::overlay::{Disposer, Draft, EditorConfig, Subscriptions};
use crate::uikit::{self, Toast, Widget};
use crate::util::{iso_now, saved_label};
use icons::{Calendar, ChevronDown, ChevronRight};
use leptos::html::{self, ElementType};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

const EDITOR_HOST_ID: &str = "playground-editor";
const EDITOR_CHARACTER_LIMIT: u32 = 800;
const EDITOR_TOOLBAR: [&str; 15] = [
    "undo", "redo", "bold", "italic", "underline", "link", "image", "imageUrl", "videoUrl",
    "fontSize", "highlight", "textColor", "quote", "code", "clear",
];

static HOURS: [&str; 24] = [
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23",
];

/// Disposers of every ui-kit widget on the page, released with it.
#[derive(Clone, Copy)]
pub(crate) struct WidgetScope(pub StoredValue<Subscriptions, LocalStorage>);

impl WidgetScope {
    pub fn push(&self, disposer: Disposer) {
        // Once the page is gone the closure never runs and the disposer drops here.
        self.0.try_update_value(|w| w.push(disposer));
    }
}

/// Run `init` on the element behind `node` once it is mounted.
fn use_widget<E>(node: NodeRef<E>, init: impl FnOnce(&web_sys::HtmlElement) -> Disposer + 'static)
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let scope = expect_context::<WidgetScope>();
    node.on_load(move |el| {
        let el: web_sys::HtmlElement = el.unchecked_into();
        scope.push(init(&el));
    });
}

/// Like [`use_widget`] for widgets built from a trigger and a floating part.
fn use_widget_pair<A, B>(
    trigger: NodeRef<A>,
    floating: NodeRef<B>,
    init: impl FnOnce(&web_sys::HtmlElement, &web_sys::HtmlElement) -> Disposer + 'static,
) where
    A: ElementType + 'static,
    A::Output: JsCast + Clone + 'static,
    B: ElementType + 'static,
    B::Output: JsCast + Clone + 'static,
{
    let scope = expect_context::<WidgetScope>();
    floating.on_load(move |floating| {
        let Some(trigger) = trigger.get_untracked() else {
            tracing::warn!("widget trigger missing at load");
            return;
        };
        let trigger: web_sys::HtmlElement = trigger.unchecked_into();
        let floating: web_sys::HtmlElement = floating.unchecked_into();
        scope.push(init(&trigger, &floating));
    });
}

/// Design-system select menu. The ui-kit builds the list from `data-options`.
#[component]
pub(crate) fn SelectMenu(
    options: &'static [&'static str],
    #[prop(into)] placeholder: String,
    #[prop(into, optional)] class: String,
    /// Trigger label before the ui-kit takes over.
    #[prop(into, optional)] label: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] selected: &'static [&'static str],
    #[prop(optional)] on_change: Option<Callback<Option<String>>>,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    use_widget(node, move |el| match on_change {
        Some(cb) => uikit::init_select_menu(el, move |value| cb.run(value)),
        None => Widget::SelectMenu.init(el),
    });

    let label = label.unwrap_or_else(|| placeholder.clone());
    view! {
        <div
            node_ref=node
            class=format!("ds-select-menu {class}")
            data-placeholder=placeholder
            data-multiple=multiple.then_some("true")
            data-options=uikit::options_json(options)
            data-value=(!selected.is_empty()).then(|| uikit::options_json(selected))
        >
            <button class="ds-select-trigger" type="button">
                <span class="ds-select-trigger__label">{label}</span>
                <span class="ds-select-trigger__icon" aria-hidden="true">
                    <ChevronDown />
                </span>
            </button>
        </div>
    }
}

#[component]
pub(crate) fn TypographyCard() -> impl IntoView {
    let headings = ["ds-h1", "ds-h2", "ds-h3", "ds-h4", "ds-h5", "ds-h6"];
    view! {
        <Card>
            <CardTitle>"Typography"</CardTitle>
            <div class="ds-stack-2">
                {headings
                    .iter()
                    .enumerate()
                    .map(|(i, class)| view! { <div class=*class>{format!("Heading {}", i + 1)}</div> })
                    .collect_view()}
            </div>
            <div class="ds-stack-2">
                <div class="ds-subtitle1">"Subtitle 1"</div>
                <div class="ds-subtitle2">"Subtitle 2"</div>
                <div class="ds-body1">"Body 1: The quick brown fox jumps over the lazy dog."</div>
                <div class="ds-body2">"Body 2: The quick brown fox jumps over the lazy dog."</div>
                <div class="ds-caption">"Caption text"</div>
                <div class="ds-overline">"Overline"</div>
                <div class="ds-button-text">"Button text"</div>
                <a class="ds-link" href="#">"Link style"</a>
                <code class="ds-mono">"Monospace sample"</code>
            </div>
        </Card>
    }
}

#[component]
pub(crate) fn GridCard() -> impl IntoView {
    let labelled = |columns: usize| {
        (0..columns)
            .map(|i| {
                let item = char::from(b'A' + i as u8);
                view! { <div class="ds-card">{format!("Grid {columns}: Item {item}")}</div> }
            })
            .collect_view()
    };
    view! {
        <Card>
            <CardTitle>"Grid Layout"</CardTitle>
            <div class="ds-grid-2">{labelled(2)}</div>
            <div class="ds-grid-3">{labelled(3)}</div>
            <div class="ds-grid-4">{labelled(4)}</div>
            <div class="ds-grid-6">
                {(1..=6).map(|n| view! { <div class="ds-card">{n}</div> }).collect_view()}
            </div>
        </Card>
    }
}

struct Milestone {
    time: &'static str,
    title: &'static str,
    description: &'static str,
}

const MILESTONES: [Milestone; 3] = [
    Milestone {
        time: "Today · 09:30",
        title: "Order confirmed",
        description: "We have received your payment and confirmed the order.",
    },
    Milestone {
        time: "Today · 11:00",
        title: "Preparing shipment",
        description: "Items are being packed and assigned to a courier.",
    },
    Milestone {
        time: "Tomorrow",
        title: "Out for delivery",
        description: "The courier is on the way to your address.",
    },
];

#[component]
pub(crate) fn TimelineCard() -> impl IntoView {
    view! {
        <Card>
            <CardTitle>"Timeline"</CardTitle>
            <div class="ds-timeline">
                {MILESTONES
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        let marker = if i == 0 {
                            "ds-timeline-marker ds-timeline-marker--active"
                        } else {
                            "ds-timeline-marker"
                        };
                        view! {
                            <div class="ds-timeline-item">
                                <div class=marker>{i + 1}</div>
                                <div class="ds-timeline-content">
                                    <div class="ds-timeline-time">{m.time}</div>
                                    <div class="ds-timeline-title">{m.title}</div>
                                    <div class="ds-timeline-description">{m.description}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
pub(crate) fn TabsCard() -> impl IntoView {
    const TABS: [(&str, &str); 3] = [("overview", "Overview"), ("details", "Details"), ("settings", "Settings")];
    let active = TABS[0].0;

    let tabs = NodeRef::<html::Div>::new();
    use_widget(tabs, move |el| Widget::Tabs { active }.init(el));

    view! {
        <Card>
            <CardTitle>"Tabs"</CardTitle>
            <div node_ref=tabs class="ds-tabs" id="demo-tabs">
                <span class="ds-tabs-indicator" data-ds-tab-indicator=""></span>
                {TABS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <button class="ds-tab" data-ds-tab-trigger="" data-ds-value=*value>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {TABS
                .iter()
                .map(|(value, label)| {
                    view! {
                        <div data-ds-tab-panel="" data-ds-value=*value hidden={*value != active}>
                            {format!("{label} content")}
                        </div>
                    }
                })
                .collect_view()}
        </Card>
    }
}

#[component]
fn DatepickerMenu(
    widget: Widget,
    #[prop(into)] placeholder: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let menu = NodeRef::<html::Div>::new();
    use_widget(menu, move |el| widget.init(el));

    view! {
        <div node_ref=menu class="ds-datepicker-menu">
            <div class="ds-datepicker-trigger">
                <input
                    class="ds-input ds-datepicker-input"
                    data-ds-datepicker-input=""
                    placeholder=placeholder
                    readonly=true
                />
                <span class="ds-datepicker-icon" aria-hidden="true">
                    <Calendar />
                </span>
            </div>
            <div class="ds-datepicker-panel" data-ds-datepicker-panel="" hidden=true>
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[component]
pub(crate) fn DataGridCard() -> impl IntoView {
    const ROWS: [(&str, &str); 2] = [("Project A", "Active"), ("Project B", "Paused")];

    let grid = NodeRef::<html::Table>::new();
    let inline = NodeRef::<html::Div>::new();
    let range_inline = NodeRef::<html::Div>::new();
    use_widget(grid, |el| Widget::DataGrid.init(el));
    use_widget(inline, |el| Widget::Datepicker.init(el));
    use_widget(range_inline, |el| Widget::DateRangeCalendar.init(el));

    view! {
        <Card>
            <CardTitle>"DataGrid + DatePicker"</CardTitle>
            <div class="ds-datagrid">
                <table node_ref=grid class="ds-datagrid__table" id="demo-grid">
                    <thead class="ds-datagrid__head">
                        <tr>
                            <th class="ds-datagrid__th" data-ds-sortable="" data-ds-field="name">"Name"</th>
                            <th class="ds-datagrid__th" data-ds-sortable="" data-ds-field="status">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {ROWS
                            .iter()
                            .map(|(name, status)| {
                                view! {
                                    <tr>
                                        <td class="ds-datagrid__td" data-ds-field="name">{*name}</td>
                                        <td class="ds-datagrid__td" data-ds-field="status">{*status}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
            <div node_ref=inline class="ds-datepicker" id="demo-datepicker"></div>
            <div node_ref=range_inline class="ds-datepicker"></div>
            <DatepickerMenu widget=Widget::DatepickerDropdown placeholder="Pick a date" />
            <DatepickerMenu
                widget=Widget::DateRangeDropdown { time_step_minutes: 15 }
                placeholder="Select date range"
            />
            <DatepickerMenu widget=Widget::DateTimeDropdown placeholder="Pick date & time">
                <div data-ds-datepicker-calendar=""></div>
                <div class="ds-datepicker__footer" data-ds-datepicker-footer="">
                    <span class="ds-datepicker__footer-label">"Time"</span>
                    <div class="ds-time-picker" data-ds-datetime-picker="">
                        <TimeSegment hour=true placeholder="HH" options=&HOURS />
                        <span class="ds-time-picker__colon">":"</span>
                        <TimeSegment hour=false placeholder="MM" options=&MINUTES />
                    </div>
                </div>
            </DatepickerMenu>
        </Card>
    }
}

static MINUTES: [&str; 60] = [
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31",
    "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47",
    "48", "49", "50", "51", "52", "53", "54", "55", "56", "57", "58", "59",
];

/// Hour or minute select inside the date-time panel. The date-time widget
/// drives these itself, so they are not started here.
#[component]
fn TimeSegment(hour: bool, placeholder: &'static str, options: &'static [&'static str]) -> impl IntoView {
    view! {
        <div
            class="ds-select-menu ds-time-picker__segment"
            data-ds-time-hour=hour.then_some("")
            data-ds-time-minute=(!hour).then_some("")
            data-placeholder=placeholder
            data-searchable="true"
            data-options=uikit::options_json(options)
        >
            <button class="ds-select-trigger" type="button">
                <span class="ds-select-trigger__label">{placeholder}</span>
                <span class="ds-select-trigger__icon" aria-hidden="true">
                    <ChevronDown />
                </span>
            </button>
        </div>
    }
}

struct TreeNode {
    id: &'static str,
    badge: &'static str,
    label: &'static str,
    meta: &'static str,
    open: bool,
    children: &'static [TreeNode],
}

const fn leaf(id: &'static str, badge: &'static str, label: &'static str, meta: &'static str) -> TreeNode {
    TreeNode { id, badge, label, meta, open: false, children: &[] }
}

static WORKSPACE: TreeNode = TreeNode {
    id: "root",
    badge: "WS",
    label: "Workspace",
    meta: "Unified platform modules",
    open: true,
    children: &[
        TreeNode {
            id: "projects",
            badge: "PJ",
            label: "Projects",
            meta: "Production applications",
            open: true,
            children: &[
                leaf("project-a", "A", "Project Alpha", "Core commerce shell"),
                leaf("project-b", "B", "Project Beta", "Analytics workspace"),
            ],
        },
        TreeNode {
            id: "teams",
            badge: "TM",
            label: "Teams",
            meta: "Organization units",
            open: false,
            children: &[
                leaf("team-a", "DS", "Design", "UX and visual language"),
                leaf("team-b", "EN", "Engineering", "Platform and delivery"),
            ],
        },
        TreeNode {
            id: "archives",
            badge: "AR",
            label: "Archives",
            meta: "Historical snapshots",
            open: false,
            children: &[
                leaf("2023", "23", "2023", "Release notes and logs"),
                leaf("2022", "22", "2022", "Baseline archive"),
            ],
        },
    ],
};

impl TreeNode {
    fn state(&self) -> &'static str {
        if self.open { "open" } else { "closed" }
    }

    /// Branch pill: "Live" at the root, the child count below it.
    fn pill(&self, depth: usize) -> Option<String> {
        match (self.children.is_empty(), depth) {
            (true, _) => None,
            (false, 0) => Some("Live".to_string()),
            (false, _) => Some(self.children.len().to_string()),
        }
    }
}

fn tree_item(node: &'static TreeNode, depth: usize) -> AnyView {
    let content = view! {
        <span class="mfe-tree__content">
            <span class="ds-tree__label mfe-tree__label">{node.label}</span>
            <span class="mfe-tree__meta">{node.meta}</span>
        </span>
    };

    if node.children.is_empty() {
        return view! {
            <div class="ds-tree__item" data-ds-tree-item="" data-ds-id=node.id>
                <span class="mfe-tree__spacer" aria-hidden="true"></span>
                <span class="mfe-tree__node-icon mfe-tree__node-icon--leaf" aria-hidden="true">{node.badge}</span>
                {content}
            </div>
        }
        .into_any();
    }

    view! {
        <div class="ds-tree__item" data-ds-tree-item="" data-ds-id=node.id data-state=node.state()>
            <button class="ds-tree__toggle" data-ds-tree-toggle="">
                <ChevronRight />
            </button>
            <span class="mfe-tree__node-icon" aria-hidden="true">{node.badge}</span>
            {content}
            <span class="mfe-tree__pill">{node.pill(depth)}</span>
            <div class="ds-tree__children" data-ds-tree-children="" data-state=node.state() hidden={!node.open}>
                {node.children.iter().map(|child| tree_item(child, depth + 1)).collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub(crate) fn TreeViewCard() -> impl IntoView {
    let tree = NodeRef::<html::Div>::new();
    use_widget(tree, |el| Widget::TreeView.init(el));

    view! {
        <Card>
            <CardTitle>"TreeView"</CardTitle>
            <div node_ref=tree class="ds-tree mfe-tree" id="demo-tree">
                {tree_item(&WORKSPACE, 0)}
            </div>
        </Card>
    }
}

#[component]
pub(crate) fn OverlaysCard(show_dialog: RwSignal<bool>) -> impl IntoView {
    let trigger = NodeRef::<html::Button>::new();
    let tooltip = NodeRef::<html::Div>::new();
    use_widget_pair(trigger, tooltip, uikit::init_tooltip);

    let on_toast = move |_| {
        uikit::show_toast(&Toast {
            title: "Saved",
            description: "Your changes were saved.",
            variant: "success",
        })
    };

    view! {
        <Card>
            <CardTitle>"Feedback + Overlays"</CardTitle>
            <CardActions>
                <Button on:click=on_toast>"Show toast"</Button>
                <Button variant=ButtonVariant::Secondary on:click=move |_| show_dialog.set(true)>
                    "Open dialog"
                </Button>
                <div class="relative">
                    <button node_ref=trigger class="ds-btn ds-btn--ghost ds-btn--md">"Tooltip"</button>
                    <div node_ref=tooltip class="ds-tooltip ds-tooltip--top" hidden=true>"Tooltip content"</div>
                </div>
            </CardActions>
            <div class="ds-progress">
                <div class="ds-progress__bar" style:width="60%"></div>
            </div>
            <div class="ds-snackbar" role="status" aria-live="polite">
                "Snackbar message"
                <div class="ds-snackbar__actions">
                    <button class="ds-snackbar__action">"Undo"</button>
                </div>
            </div>
        </Card>
    }
}

/// Confirmation modal. Lives only while `show_dialog` is set.
#[component]
pub(crate) fn ConfirmDialog(show_dialog: RwSignal<bool>) -> impl IntoView {
    let backdrop = NodeRef::<html::Div>::new();
    let dialog = NodeRef::<html::Div>::new();
    let handle = StoredValue::new_local(None::<Disposer>);

    dialog.on_load(move |el| {
        let backdrop = backdrop
            .get_untracked()
            .map(|b| b.unchecked_into::<web_sys::HtmlElement>());
        let d = uikit::init_dialog(&el, backdrop, move || show_dialog.set(false));
        handle.set_value(Some(d));
    });
    on_cleanup(move || {
        handle.try_update_value(|h| h.take());
    });

    let close = move |_| show_dialog.set(false);
    view! {
        <div node_ref=backdrop class="ds-modal-backdrop"></div>
        <div node_ref=dialog class="ds-modal">
            <div class="ds-modal-header">"Confirm"</div>
            <div class="ds-modal-body">"Are you sure you want to continue?"</div>
            <div class="ds-modal-footer">
                <Button variant=ButtonVariant::Secondary on:click=close>"Cancel"</Button>
                <Button on:click=close>"Confirm"</Button>
            </div>
        </div>
    }
}

#[component]
pub(crate) fn EditorCard() -> impl IntoView {
    let draft = Draft::new(String::new());
    let saved_at = RwSignal::new(None::<String>);

    let host = NodeRef::<html::Div>::new();
    let editor_draft = draft.clone();
    use_widget(host, move |el| {
        let on_change = Rc::new(move |change: crate::overlay::EditorChange| {
            tracing::debug!(
                html = %change.html,
                markdown = %change.markdown,
                text = %change.text,
                "editor change"
            );
            editor_draft.set(change.html);
        });
        uikit::mount_editor(
            el,
            EditorConfig {
                label: Some("Content".to_string()),
                helper: Some("Rich text editor with typography, color, and layout controls.".to_string()),
                placeholder: "Write something... (Markdown not required)".to_string(),
                character_limit: EDITOR_CHARACTER_LIMIT,
                toolbar_items: EDITOR_TOOLBAR.iter().map(|s| s.to_string()).collect(),
                show_grid: true,
                show_status: true,
                on_change,
            },
        )
    });

    let draft = StoredValue::new_local(draft);
    let on_save = move |_| {
        let clean = draft.with_value(|d| uikit::sanitize_inline_html(&d.get()));
        tracing::info!(len = clean.len(), "editor saved");
        saved_at.set(Some(iso_now()));
    };

    view! {
        <Card>
            <CardTitle>"Editor"</CardTitle>
            <div node_ref=host id=EDITOR_HOST_ID data-ds-editor-shell=""></div>
            <CardActions>
                <Button size=ButtonSize::Sm on:click=on_save>"Save"</Button>
                <span class="ds-body2">{move || saved_label(saved_at.get().as_deref())}</span>
            </CardActions>
        </Card>
    }
}

#[component]
pub(crate) fn DropdownCard() -> impl IntoView {
    let trigger = NodeRef::<html::Button>::new();
    let content = NodeRef::<html::Div>::new();
    use_widget_pair(trigger, content, uikit::init_dropdown);

    view! {
        <Card>
            <CardTitle>"Dropdown"</CardTitle>
            <div class="ds-dropdown">
                <button node_ref=trigger class="ds-btn ds-btn--secondary ds-btn--md">"Open menu"</button>
                <div node_ref=content class="ds-dropdown__content" data-align="start" hidden=true>
                    <div class="ds-menu" id="menu-content">
                        <button class="ds-menu-item">"Edit"</button>
                        <button class="ds-menu-item">"Duplicate"</button>
                        <div class="ds-menu-separator"></div>
                        <button class="ds-menu-item">"Archive"</button>
                    </div>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub(crate) fn DataDisplayCard() -> impl IntoView {
    view! {
        <Card>
            <CardTitle>"Data Display"</CardTitle>
            <div class="ds-inline-4">
                <span class="ds-badge">"Default"</span>
                <span class="ds-badge ds-badge--success">"Success"</span>
                <span class="ds-badge ds-badge--warning">"Warning"</span>
                <span class="ds-badge ds-badge--danger">"Danger"</span>
            </div>
            <div class="ds-inline-3">
                <span class="ds-chip">"Design"</span>
                <span class="ds-chip">
                    "Tag" <button class="ds-chip__close" aria-label="Remove">"×"</button>
                </span>
            </div>
            <div class="ds-avatar-group">
                {["JD", "AB", "MN"].map(|initials| view! { <span class="ds-avatar">{initials}</span> }).collect_view()}
            </div>
            <div class="ds-list">
                <div class="ds-list-item">
                    <span class="ds-avatar ds-avatar--sm">"JD"</span>
                    <div class="ds-list-item__content">
                        <div class="ds-list-item__title">"Jane Doe"</div>
                        <div class="ds-list-item__subtitle">"Admin"</div>
                    </div>
                    <span class="ds-badge ds-badge--info">"New"</span>
                </div>
            </div>
            <table class="ds-table">
                <thead class="ds-thead">
                    <tr class="ds-tr">
                        <th class="ds-th">"Name"</th>
                        <th class="ds-th">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr class="ds-tr">
                        <td class="ds-td">"Project A"</td>
                        <td class="ds-td"><span class="ds-badge ds-badge--success">"Active"</span></td>
                    </tr>
                </tbody>
            </table>
            <nav class="ds-pagination" aria-label="Pagination">
                <button class="ds-page" aria-label="Previous">"Prev"</button>
                <button class="ds-page" data-state="active">"1"</button>
                <button class="ds-page">"2"</button>
                <button class="ds-page" aria-label="Next">"Next"</button>
            </nav>
        </Card>
    }
}

#[component]
pub(crate) fn NavigationCard() -> impl IntoView {
    view! {
        <Card>
            <CardTitle>"Navigation"</CardTitle>
            <nav class="ds-breadcrumbs" aria-label="Breadcrumb">
                <a class="ds-breadcrumbs__item" href="#">"Home"</a>
                <span class="ds-breadcrumbs__separator">"/"</span>
                <a class="ds-breadcrumbs__item" href="#">"Library"</a>
                <span class="ds-breadcrumbs__separator">"/"</span>
                <span class="ds-breadcrumbs__item" aria-current="page">"Data"</span>
            </nav>
            <div class="ds-bottom-nav" style:position="relative">
                <div class="ds-bottom-nav__list">
                    <button class="ds-bottom-nav__item" data-state="active">"Home"</button>
                    <button class="ds-bottom-nav__item">"Search"</button>
                    <button class="ds-bottom-nav__item">"Profile"</button>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub(crate) fn AdvancedInputsCard() -> impl IntoView {
    let slider = NodeRef::<html::Div>::new();
    let range = NodeRef::<html::Div>::new();
    let autocomplete = NodeRef::<html::Div>::new();
    use_widget(slider, |el| Widget::Slider { value: 40 }.init(el));
    use_widget(range, |el| Widget::RangeSlider { min: 25, max: 70 }.init(el));
    use_widget(autocomplete, |el| Widget::Autocomplete.init(el));

    let steps = [("completed", "Info"), ("active", "Shipping"), ("", "Pay")];
    let slider_labels = || view! { <div class="ds-slider__labels"><span>"0"</span><span>"100"</span></div> };

    view! {
        <Card>
            <CardTitle>"Advanced Inputs"</CardTitle>
            <div class="ds-button-group">
                {["Left", "Middle", "Right"]
                    .map(|label| view! { <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm>{label}</Button> })
                    .collect_view()}
            </div>
            <div class="ds-toggle-group">
                {["Day", "Week", "Month"]
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        view! { <button class="ds-toggle" data-state={if i == 0 { "on" } else { "off" }}>{*label}</button> }
                    })
                    .collect_view()}
            </div>
            <div class="ds-rating" aria-label="Rating">
                {(0..5)
                    .map(|i| view! { <span class="ds-rating__star">{if i < 3 { "★" } else { "☆" }}</span> })
                    .collect_view()}
            </div>
            <div class="ds-stepper">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(i, (state, label))| {
                        view! {
                            <div class="ds-step" data-state=(!state.is_empty()).then_some(*state)>
                                <span class="ds-step__dot">{i + 1}</span>
                                <span class="ds-step__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {slider_labels()}
            <div node_ref=slider class="ds-slider" data-ds-slider="">
                <div class="ds-slider__track">
                    <div class="ds-slider__range" data-ds-slider-range=""></div>
                </div>
                <div class="ds-slider__tooltip" data-ds-slider-tooltip=""></div>
                <div class="ds-slider__thumb" data-ds-slider-thumb="" style:width="16px" style:height="16px"></div>
            </div>
            {slider_labels()}
            <div node_ref=range class="ds-slider ds-slider--range" data-ds-slider="">
                <div class="ds-slider__track"></div>
                <div class="ds-slider__range" data-ds-slider-range=""></div>
                <div class="ds-slider__tooltip" data-ds-slider-tooltip-start=""></div>
                <div class="ds-slider__tooltip" data-ds-slider-tooltip-end=""></div>
                <div
                    class="ds-slider__thumb ds-slider__thumb--range"
                    data-ds-slider-thumb-start=""
                    style:width="16px"
                    style:height="16px"
                ></div>
                <div
                    class="ds-slider__thumb ds-slider__thumb--range"
                    data-ds-slider-thumb-end=""
                    style:width="16px"
                    style:height="16px"
                ></div>
            </div>
            <div node_ref=autocomplete class="ds-autocomplete">
                <input class="ds-input" placeholder="Search..." data-ds-autocomplete-input="" />
                <div class="ds-autocomplete__list" data-ds-autocomplete-list="">
                    <button class="ds-autocomplete__item" data-ds-autocomplete-item="">"Option A"</button>
                    <button class="ds-autocomplete__item" data-ds-autocomplete-item="">"Option B"</button>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub(crate) fn FeedbackCard() -> impl IntoView {
    view! {
        <Card>
            <CardTitle>"Feedback"</CardTitle>
            <Alert class="ds-alert--success">
                <span class="ds-alert__icon">"✓"</span>
                <AlertDescription>"Success message"</AlertDescription>
            </Alert>
            <div class="ds-progress-circular" aria-label="Loading">
                <span class="ds-progress-circular__ring"></span>
                <span class="ds-progress-circular__value"></span>
            </div>
            <div class="ds-skeleton" style:height="16px" style:width="160px"></div>
        </Card>
    }
}
