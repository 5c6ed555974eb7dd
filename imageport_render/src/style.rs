// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Stroke;
use peniko::Color;

/// Colors and strokes for an inset view such as the minimap or the loupe.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Fill behind the inset content.
    pub background: Color,
    /// Outline of the inset itself.
    pub frame_color: Color,
    /// Stroke for the outline of the inset.
    pub frame_stroke: Stroke,
    /// Color of the marker for the current viewport, if the inset draws one.
    pub marker_color: Color,
    /// Stroke for the viewport marker.
    pub marker_stroke: Stroke,
}

impl OverlayStyle {
    /// Minimap defaults: dark backdrop, grey frame, yellow viewport marker.
    #[must_use]
    pub fn minimap() -> Self {
        Self {
            background: Color::from_rgba8(0x20, 0x20, 0x20, 0xd0),
            frame_color: Color::from_rgba8(0x80, 0x80, 0x80, 0xff),
            frame_stroke: Stroke::new(1.0),
            marker_color: Color::from_rgba8(0xff, 0xd0, 0x00, 0xff),
            marker_stroke: Stroke::new(1.5),
        }
    }

    /// Loupe defaults: opaque black backdrop and a white frame.
    #[must_use]
    pub fn loupe() -> Self {
        Self {
            background: Color::BLACK,
            frame_color: Color::WHITE,
            frame_stroke: Stroke::new(2.0),
            marker_color: Color::TRANSPARENT,
            marker_stroke: Stroke::new(0.0),
        }
    }
}

/// Everything the viewport paints that is not a render element.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportStyle {
    /// Color the surface is cleared with before each frame.
    pub background: Color,
    /// Color of the loading message.
    pub loading_text_color: Color,
    /// Font size of the loading message, in pixels.
    pub loading_font_size: f64,
    /// Minimap appearance.
    pub minimap: OverlayStyle,
    /// Loupe appearance.
    pub loupe: OverlayStyle,
    /// Outline color of the zoom rectangle.
    pub zoom_rect_color: Color,
    /// Outline stroke of the zoom rectangle.
    pub zoom_rect_stroke: Stroke,
}

impl Default for ViewportStyle {
    fn default() -> Self {
        let mut zoom_rect_stroke = Stroke::new(2.0);
        zoom_rect_stroke.dash_pattern.push(3.0);
        zoom_rect_stroke.dash_pattern.push(1.0);
        Self {
            background: Color::BLACK,
            loading_text_color: Color::WHITE,
            loading_font_size: 20.0,
            minimap: OverlayStyle::minimap(),
            loupe: OverlayStyle::loupe(),
            zoom_rect_color: Color::BLACK,
            zoom_rect_stroke,
        }
    }
}
