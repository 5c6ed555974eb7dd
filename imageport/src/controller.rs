// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::time::Duration;

use imageport_event_state::action::{Action, ActionContext};
use imageport_event_state::autoscroll::AutoScroll;
use imageport_event_state::pointer::{PointerButton, PointerEvent};
use imageport_event_state::press::PressState;
use imageport_render::{
    ElementRef, Loupe, Minimap, RenderElement, RenderStack, Surface, ZoomRectangle,
};
use imageport_view2d::{CoordinateTransform, Extent, Space, ViewportState};
use kurbo::{Point, Rect};

use crate::ViewportConfig;

/// Everything an image viewport owns except its callback registry.
///
/// Callbacks receive `&mut ViewportCore` so they can pan, zoom, or edit the
/// render stack while the registry itself stays borrowed for dispatch.
///
/// Methods that change what is visible redraw the surface before returning.
/// The `on_pointer_*` handlers do not; they are meant to run inside
/// [`crate::ImageViewport::handle_event`], which redraws once after every
/// handler has run.
pub struct ViewportCore<S> {
    surface: S,
    config: ViewportConfig,
    state: ViewportState,
    stack: RenderStack,
    ctx: ActionContext,
    press: PressState,
    auto_scroll: AutoScroll,
    zoom_rect: Option<ZoomRectangle>,
    minimap: Minimap,
    loupe: Loupe,
}

impl<S: core::fmt::Debug> core::fmt::Debug for ViewportCore<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportCore")
            .field("surface", &self.surface)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("stack", &self.stack)
            .field("ctx", &self.ctx)
            .field("press", &self.press)
            .field("auto_scroll", &self.auto_scroll)
            .field("zoom_rect", &self.zoom_rect)
            .field("minimap", &self.minimap)
            .field("loupe", &self.loupe)
            .finish()
    }
}

impl<S: Surface> ViewportCore<S> {
    pub(crate) fn new(surface: S, config: ViewportConfig) -> Self {
        let mut minimap = Minimap::new(config.minimap_origin, config.minimap_size);
        minimap.set_visible(config.minimap_visible);
        Self {
            surface,
            state: ViewportState::new().with_min_extent(config.min_extent),
            stack: RenderStack::new(),
            ctx: ActionContext::new(),
            press: PressState::default(),
            auto_scroll: AutoScroll::new(config.auto_scroll),
            zoom_rect: None,
            minimap,
            loupe: Loupe::new(config.loupe_size, config.loupe_margin),
            config,
        }
    }

    /// The surface drawn on.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    ///
    /// Call [`ViewportCore::redraw`] after resizing it.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Transform for the current viewport, valid area and surface geometry.
    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        self.state
            .transform(self.surface.buffer_size(), self.surface.display_size())
            .with_surface_origin(self.surface.page_offset())
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Extent {
        self.state.get()
    }

    /// Requests a new viewport; it is clamped square and into the image.
    ///
    /// Returns the viewport actually applied.
    pub fn set_viewport(&mut self, candidate: Extent) -> Extent {
        let applied = self.state.set(candidate);
        self.redraw();
        applied
    }

    /// Shows the whole image.
    pub fn reset_viewport(&mut self) {
        self.state.reset();
        self.redraw();
    }

    /// Returns `true` unless the whole image is shown.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state.is_zoomed()
    }

    /// Region of the surface covered by the image.
    #[must_use]
    pub fn valid_area(&self) -> Extent {
        self.state.valid_area()
    }

    /// Places the image inside `area`, canvas-normalized.
    pub fn set_valid_area(&mut self, area: Extent) {
        self.state.set_valid_area(area);
        self.redraw();
    }

    // -------------------------------------------------------------------------
    // Coordinates
    // -------------------------------------------------------------------------

    /// Position of `page_pos` relative to the surface, in displayed pixels.
    #[must_use]
    pub fn absolute_coordinates(&self, page_pos: Point) -> Point {
        self.transform().surface_position(page_pos)
    }

    /// Position of `page_pos` in normalized coordinates relative to `space`.
    #[must_use]
    pub fn relative_coordinates(&self, page_pos: Point, space: Space) -> Point {
        self.transform().event_position(page_pos, space)
    }

    // -------------------------------------------------------------------------
    // Render stack
    // -------------------------------------------------------------------------

    /// The elements drawn each frame.
    #[must_use]
    pub fn render_stack(&self) -> &RenderStack {
        &self.stack
    }

    /// Adds `element` unless already present. Redraws if it was added.
    pub fn add_render_element(&mut self, element: ElementRef) -> bool {
        let added = self.stack.insert(element);
        if added {
            self.redraw();
        }
        added
    }

    /// Position of `element` in render order.
    #[must_use]
    pub fn index_of_render_element(&self, element: &ElementRef) -> Option<usize> {
        self.stack.index_of(element)
    }

    /// Replaces the element at `index` and redraws.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn update_render_element(&mut self, index: usize, element: ElementRef) {
        self.stack.update(index, element);
        self.redraw();
    }

    /// Removes `element` if present. Redraws only if it was removed.
    pub fn remove_render_element(&mut self, element: &ElementRef) -> bool {
        let removed = self.stack.remove(element);
        if removed {
            self.redraw();
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Overlays and action
    // -------------------------------------------------------------------------

    /// Returns `true` if the minimap is enabled.
    #[must_use]
    pub fn minimap_visible(&self) -> bool {
        self.minimap.is_visible()
    }

    /// Enables or disables the minimap and redraws.
    pub fn set_minimap_visible(&mut self, visible: bool) {
        self.minimap.set_visible(visible);
        self.redraw();
    }

    /// Replaces the placeholder text drawn behind the render stack and redraws.
    ///
    /// The new text is visible through [`ViewportConfig::loading_text`].
    pub fn set_loading_text(&mut self, text: Option<String>) {
        self.config.loading_text = text;
        self.redraw();
    }

    /// The zoom rectangle of an ongoing zoom-to-area drag.
    #[must_use]
    pub fn zoom_rectangle(&self) -> Option<&ZoomRectangle> {
        self.zoom_rect.as_ref()
    }

    /// The loupe and its current position.
    #[must_use]
    pub fn loupe(&self) -> &Loupe {
        &self.loupe
    }

    /// Current action and flags.
    #[must_use]
    pub fn action_context(&self) -> &ActionContext {
        &self.ctx
    }

    /// Selects what pointer interactions do.
    pub fn set_action(&mut self, action: Action) {
        self.ctx.set_action(action);
        self.surface.set_cursor(self.ctx.default_cursor());
    }

    /// Keeps the action selected after each completed interaction.
    pub fn set_burst_mode(&mut self, burst: bool) {
        self.ctx.set_burst_mode(burst);
    }

    /// Enables or disables the loupe and redraws.
    pub fn set_loupe_visible(&mut self, visible: bool) {
        self.ctx.set_loupe_visible(visible);
        self.redraw();
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Draws a full frame.
    ///
    /// Order: background, loading text, render stack, zoom rectangle, minimap
    /// (only while zoomed), loupe (only while enabled and positioned).
    pub fn redraw(&mut self) {
        let transform = self.transform();
        let style = &self.config.style;
        let surface: &mut dyn Surface = &mut self.surface;
        surface.begin_frame();

        let size = surface.buffer_size();
        surface.fill_rect(Rect::from_origin_size(Point::ZERO, size), style.background);

        if let Some(text) = &self.config.loading_text {
            let font_size = style.loading_font_size;
            let width = surface.measure_text(text, font_size);
            let origin = Point::new(size.width / 2.0 - width / 2.0, size.height / 2.0);
            surface.fill_text(text, origin, font_size, style.loading_text_color);
        }

        self.stack.render(surface, &transform);

        if let Some(rect) = &self.zoom_rect {
            rect.render(surface, &transform);
        }

        if self.state.is_zoomed() && self.minimap.is_visible() {
            self.minimap
                .render(surface, &transform, &self.stack, &style.minimap);
        }

        if self.ctx.loupe_visible() {
            self.loupe.render(surface, &transform, &self.stack, &style.loupe);
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Records the pressed button and, for a primary press while zooming to
    /// an area, starts a zoom rectangle.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        let Some(button) = event.button else {
            return;
        };
        let transform = self.transform();
        let pos = transform.event_position(event.page_pos, Space::ValidArea);
        self.press.press(button, pos);

        if button == PointerButton::Primary && self.ctx.action() == Action::ZoomArea {
            let style = &self.config.style;
            let rect = ZoomRectangle::new(
                pos,
                self.config.zoom_rect_z_index,
                style.zoom_rect_color,
                style.zoom_rect_stroke.clone(),
            );
            self.zoom_rect = Some(rect);
            log::debug!("zoom rectangle started at {pos:?}");
        }
    }

    /// Moves the loupe, grows the zoom rectangle, and pans or auto-scrolls
    /// while a button is held.
    ///
    /// A move that starts an auto-scroll chain leaves
    /// [`ViewportCore::auto_scroll_alive`] set; the host then owes a
    /// [`ViewportCore::tick_auto_scroll`] call after the configured interval.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let transform = self.transform();
        self.loupe
            .track(transform.event_position(event.page_pos, Space::Canvas));

        if let Some(rect) = &mut self.zoom_rect {
            rect.on_pointer_move(event, &transform, true);
        }

        let pos = transform.event_position(event.page_pos, Space::ValidArea);
        let delta = self.press.move_to(pos);
        if let Some(button) = self.press.button() {
            if button == PointerButton::Secondary || self.ctx.action() == Action::Pan {
                if let Some(delta) = delta {
                    self.state.pan_by(delta);
                }
            } else if !self.auto_scroll.is_alive() {
                self.auto_scroll_step();
            }
        }

        self.surface.set_cursor(self.ctx.default_cursor());
    }

    /// Applies the click zoom or commits the zoom rectangle, then clears the
    /// press.
    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        self.press.release();
        let step = self.config.click_zoom_step;
        match self.ctx.action() {
            Action::ZoomIn => self.zoom_at(event.page_pos, -step),
            Action::ZoomOut => self.zoom_at(event.page_pos, step),
            Action::ZoomArea => {
                if let Some(rect) = &self.zoom_rect {
                    let extent = rect.extent();
                    if extent.has_area() {
                        let applied = self.state.set(extent);
                        log::debug!("zoomed to area {applied:?}");
                    } else {
                        log::debug!("discarded empty zoom rectangle");
                    }
                }
            }
            Action::None | Action::Pan => {}
        }
        self.surface.set_cursor(self.ctx.default_cursor());
        self.zoom_rect = None;
    }

    /// Commits any zoom rectangle, ends the press and hides the loupe.
    pub fn on_pointer_leave(&mut self, _event: &PointerEvent) {
        if let Some(rect) = self.zoom_rect.take() {
            let applied = self.state.set(rect.extent());
            log::debug!("pointer left during zoom drag, zoomed to {applied:?}");
        }
        self.press.cancel();
        self.loupe.hide();
    }

    /// Zooms in for a positive wheel delta and out otherwise, around the
    /// pointer.
    pub fn on_wheel(&mut self, event: &PointerEvent) {
        let step = self.config.wheel_zoom_step;
        let amount = if event.wheel_delta > 0.0 { -step } else { step };
        self.zoom_at(event.page_pos, amount);
    }

    /// Runs one auto-scroll iteration and redraws if it moved the view.
    ///
    /// Returns the delay before the next tick, or `None` once the chain has
    /// ended because the button was released or the pointer left the margin.
    pub fn tick_auto_scroll(&mut self) -> Option<Duration> {
        let next = self.auto_scroll_step();
        if next.is_some() {
            self.redraw();
        }
        next
    }

    /// Returns `true` while an auto-scroll chain expects further ticks.
    #[must_use]
    pub fn auto_scroll_alive(&self) -> bool {
        self.auto_scroll.is_alive()
    }

    pub(crate) fn finish_interaction(&mut self) {
        if self.ctx.finish_interaction() {
            log::debug!("action reset after interaction");
        }
    }

    fn auto_scroll_step(&mut self) -> Option<Duration> {
        let nudge = self
            .auto_scroll
            .tick(self.press.is_pressed(), self.press.last_pos())?;
        self.state.shift_by(nudge);
        Some(self.auto_scroll.interval())
    }

    fn zoom_at(&mut self, page_pos: Point, amount: f64) {
        let anchor = self.transform().event_position(page_pos, Space::ValidArea);
        self.state.zoom_about(anchor, amount);
    }
}
