use super::config::OverlayConfig;

/// Viewport-relative bounding box, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

/// Page-relative placement of the overlay's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Place the overlay just below `rect`, keeping its left edge inside the viewport.
///
/// The upper clamp is applied last, so on viewports narrower than
/// `edge_margin + overlay_width` the overlay hugs the right edge instead.
pub fn overlay_position(rect: &Rect, viewport: &Viewport, config: &OverlayConfig) -> Position {
    let left = (rect.left + viewport.scroll_x)
        .max(config.edge_margin_px)
        .min(viewport.width - config.overlay_width_px);
    let top = rect.bottom + viewport.scroll_y + config.vertical_offset_px;

    Position { left, top }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_at(left: f64, bottom: f64) -> Rect {
        Rect {
            left,
            top: bottom - 20.0,
            right: left + 80.0,
            bottom,
        }
    }

    #[test]
    fn test_left_clamped_to_right_edge() {
        let vp = Viewport {
            width: 400.0,
            ..Default::default()
        };
        let pos = overlay_position(&rect_at(300.0, 50.0), &vp, &OverlayConfig::default());
        assert_eq!(pos.left, 40.0);
        assert_eq!(pos.top, 58.0);
    }

    #[test]
    fn test_left_clamped_to_margin() {
        let vp = Viewport {
            width: 1200.0,
            ..Default::default()
        };
        let pos = overlay_position(&rect_at(2.0, 10.0), &vp, &OverlayConfig::default());
        assert_eq!(pos.left, 16.0);
    }

    #[test]
    fn test_scroll_offsets_applied() {
        let vp = Viewport {
            width: 1200.0,
            scroll_x: 30.0,
            scroll_y: 500.0,
        };
        let pos = overlay_position(&rect_at(100.0, 40.0), &vp, &OverlayConfig::default());
        assert_eq!(pos.left, 130.0);
        assert_eq!(pos.top, 548.0);
    }

    #[test]
    fn test_narrow_viewport_prefers_right_edge() {
        let vp = Viewport {
            width: 300.0,
            ..Default::default()
        };
        let pos = overlay_position(&rect_at(100.0, 40.0), &vp, &OverlayConfig::default());
        assert_eq!(pos.left, -60.0);
    }
}
