use serde::{Deserialize, Serialize};

/// Tuning for the inline editor overlay.
///
/// Every field defaults individually, so a partial `window.ENV.INLINE_EDITOR`
/// object only overrides what it names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Delay between the last pin signal clearing and the overlay closing.
    pub hide_delay_ms: u32,
    /// A pointer release this soon after a hover-enter still counts as hovering.
    pub hover_grace_ms: u32,
    /// Host-node checks before mounting is abandoned.
    pub max_mount_attempts: u32,
    pub edge_margin_px: f64,
    pub overlay_width_px: f64,
    pub vertical_offset_px: f64,

    pub character_limit: u32,
    pub placeholder: String,
    pub toolbar_items: Vec<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 120,
            hover_grace_ms: 250,
            max_mount_attempts: 5,
            edge_margin_px: 16.0,
            overlay_width_px: 360.0,
            vertical_offset_px: 8.0,
            character_limit: 400,
            placeholder: "Edit text...".to_string(),
            toolbar_items: ["bold", "italic", "underline", "fontSize", "textColor", "clear"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
