use crate::overlay::Disposer;

/// Current time as an ISO-8601 UTC string (`2026-01-02T03:04:05.678Z`).
pub(crate) fn iso_now() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Set `document.title` until the returned disposer runs, then put the
/// previous title back.
pub(crate) fn set_document_title(title: &str) -> Disposer {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Disposer::noop();
    };
    let previous = document.title();
    document.set_title(title);
    Disposer::new(move || document.set_title(&previous))
}

pub(crate) fn shared_message_update(now_iso: &str) -> String {
    format!("Rust updated {now_iso}")
}

pub(crate) fn saved_label(saved_at: Option<&str>) -> String {
    match saved_at {
        Some(iso) => format!("Saved {iso}"),
        None => "Not saved yet".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_message_update() {
        assert_eq!(
            shared_message_update("2026-01-02T03:04:05.678Z"),
            "Rust updated 2026-01-02T03:04:05.678Z"
        );
    }

    #[test]
    fn test_saved_label() {
        assert_eq!(saved_label(None), "Not saved yet");
        assert_eq!(
            saved_label(Some("2026-01-02T03:04:05.678Z")),
            "Saved 2026-01-02T03:04:05.678Z"
        );
    }
}
