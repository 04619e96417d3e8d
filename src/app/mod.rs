use crate::bridge::MODULE_NAME;
use crate::pages::PlaygroundPage;
use crate::state::{AppContext, AppState};
use crate::uikit;
use leptos::prelude::*;

const RENDER_ERROR: &str = "Rust render error";

/// One report per boundary trip: every caught error, newest last.
fn render_error_detail<I, E>(errors: I) -> String
where
    I: IntoIterator<Item = E>,
    E: std::fmt::Display,
{
    errors
        .into_iter()
        .map(|e| e.to_string())
        .filter(|e| !e.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // Render errors are reported and the module renders nothing, leaving the
    // rest of the host shell intact.
    view! {
        <ErrorBoundary fallback=|errors| {
            let detail = render_error_detail(
                errors.get_untracked().into_iter().map(|(_, error)| error),
            );
            tracing::error!(module = MODULE_NAME, %detail, "render error");
            uikit::report_error("error", RENDER_ERROR, &detail);
        }>
            <PlaygroundPage />
        </ErrorBoundary>
    }
}
