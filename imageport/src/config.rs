// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use imageport_event_state::autoscroll::AutoScrollConfig;
use imageport_render::ViewportStyle;
use imageport_view2d::MIN_EXTENT;
use kurbo::Point;

/// Tunables for an [`crate::ImageViewport`].
///
/// Distances are normalized: viewport units for zoom and auto-scroll, canvas
/// units for the minimap and the loupe.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Zoom amount per wheel notch.
    pub wheel_zoom_step: f64,
    /// Zoom amount per click with the zoom-in or zoom-out action.
    pub click_zoom_step: f64,
    /// Edge auto-scroll margin, step and interval.
    pub auto_scroll: AutoScrollConfig,
    /// Smallest viewport side.
    pub min_extent: f64,
    /// Top-left corner of the minimap.
    pub minimap_origin: Point,
    /// Side of the minimap.
    pub minimap_size: f64,
    /// Whether the minimap starts out visible.
    pub minimap_visible: bool,
    /// Side of the loupe.
    pub loupe_size: f64,
    /// How far around the pointer the loupe magnifies.
    pub loupe_margin: f64,
    /// Stacking order of the zoom rectangle.
    pub zoom_rect_z_index: f64,
    /// Placeholder drawn behind the render stack, if any.
    pub loading_text: Option<String>,
    /// Colors and strokes.
    pub style: ViewportStyle,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_step: 0.05,
            click_zoom_step: 0.2,
            auto_scroll: AutoScrollConfig::default(),
            min_extent: MIN_EXTENT,
            minimap_origin: Point::new(0.845, 0.845),
            minimap_size: 0.15,
            minimap_visible: true,
            loupe_size: 0.4,
            loupe_margin: 0.05,
            zoom_rect_z_index: 100.0,
            loading_text: Some("loading...".to_string()),
            style: ViewportStyle::default(),
        }
    }
}
