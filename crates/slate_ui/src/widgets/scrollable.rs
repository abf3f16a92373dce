//! Scrollable container widget that allows vertical and/or horizontal
//! scrolling via the mouse wheel and scrollbars.
//!
//! This widget consists of:
//! - A content viewport with clipping
//! - Vertical and/or horizontal scrollbars with track and thumb
//! - Coordinate transformation for events forwarded to the child

use crate::constants::SCROLLBAR_HIT_SLOP;
use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Point, Size};
use crate::renderer::Renderer;
use crate::state::{ScrollAxis, ScrollState};
use crate::widget::Widget;

use super::config::{ScrollDirection, ScrollbarConfig};

/// A scrollable container that wraps a single child.
///
/// The viewport fills the available space; the child is laid out with
/// unbounded space along the scrollable axes. The scroll offset is kept
/// within `[0, max_scroll]` across layout passes, so shrinking content or
/// resizing the viewport never leaves the view stranded past the end.
pub struct Scrollable {
    child: Element,
    direction: ScrollDirection,
    state: ScrollState,
    config: ScrollbarConfig,
    /// Viewport size recorded by the last layout pass
    viewport: Size,
    /// Child content size recorded by the last layout pass
    content_size: Size,
}

impl Scrollable {
    /// Create a new scrollable container with a child element.
    pub fn new(child: Element) -> Self {
        Self {
            child,
            direction: ScrollDirection::Vertical,
            state: ScrollState::new(),
            config: ScrollbarConfig::default(),
            viewport: Size::ZERO,
            content_size: Size::ZERO,
        }
    }

    /// Set the scroll direction.
    pub fn direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the scrollbar configuration.
    pub fn config(mut self, config: ScrollbarConfig) -> Self {
        self.config = config;
        self
    }

    /// Current scroll offset (x, y).
    pub fn offset(&self) -> (f32, f32) {
        self.state.offset
    }

    /// Content size measured by the last layout pass.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Scroll to the given offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.state.scroll_to(x, y);
        self.clamp_offset();
    }

    /// Maximum scroll offset per axis for the last layout pass.
    pub fn max_scroll(&self) -> (f32, f32) {
        let x = if self.direction.has_horizontal() {
            (self.content_size.width - self.viewport.width).max(0.0)
        } else {
            0.0
        };
        let y = if self.direction.has_vertical() {
            (self.content_size.height - self.viewport.height).max(0.0)
        } else {
            0.0
        };
        (x, y)
    }

    fn clamp_offset(&mut self) {
        let (max_x, max_y) = self.max_scroll();
        self.state.offset.0 = self.state.offset.0.clamp(0.0, max_x);
        self.state.offset.1 = self.state.offset.1.clamp(0.0, max_y);
    }

    fn scrollbar_visible(&self, axis: ScrollAxis) -> bool {
        match axis {
            ScrollAxis::Vertical => {
                self.direction.has_vertical() && self.content_size.height > self.viewport.height
            }
            ScrollAxis::Horizontal => {
                self.direction.has_horizontal() && self.content_size.width > self.viewport.width
            }
        }
    }

    /// Scrollbar track along the right (vertical) or bottom (horizontal) edge.
    fn track(&self, bounds: Bounds, axis: ScrollAxis) -> Bounds {
        let config = &self.config;
        match axis {
            ScrollAxis::Vertical => Bounds::new(
                bounds.x + bounds.width - config.width - config.padding,
                bounds.y,
                config.width,
                bounds.height,
            ),
            ScrollAxis::Horizontal => Bounds::new(
                bounds.x,
                bounds.y + bounds.height - config.width - config.padding,
                bounds.width,
                config.width,
            ),
        }
    }

    fn thumb(&self, bounds: Bounds, axis: ScrollAxis) -> Bounds {
        let track = self.track(bounds, axis);
        match axis {
            ScrollAxis::Vertical => {
                let length = thumb_length(
                    track.height,
                    self.viewport.height,
                    self.content_size.height,
                    self.config.min_thumb_length,
                );
                let y = thumb_start(
                    track.y,
                    track.height,
                    length,
                    self.state.offset.1,
                    self.max_scroll().1,
                );
                Bounds::new(track.x, y, track.width, length)
            }
            ScrollAxis::Horizontal => {
                let length = thumb_length(
                    track.width,
                    self.viewport.width,
                    self.content_size.width,
                    self.config.min_thumb_length,
                );
                let x = thumb_start(
                    track.x,
                    track.width,
                    length,
                    self.state.offset.0,
                    self.max_scroll().0,
                );
                Bounds::new(x, track.y, length, track.height)
            }
        }
    }

    /// Track bounds grown by a few pixels for easier clicking.
    fn track_hit_bounds(&self, bounds: Bounds, axis: ScrollAxis) -> Bounds {
        let track = self.track(bounds, axis);
        match axis {
            ScrollAxis::Vertical => Bounds::new(
                track.x - SCROLLBAR_HIT_SLOP,
                track.y,
                track.width + SCROLLBAR_HIT_SLOP * 2.0,
                track.height,
            ),
            ScrollAxis::Horizontal => Bounds::new(
                track.x,
                track.y - SCROLLBAR_HIT_SLOP,
                track.width,
                track.height + SCROLLBAR_HIT_SLOP * 2.0,
            ),
        }
    }

    fn draw_scrollbar(&self, renderer: &mut Renderer, bounds: Bounds, axis: ScrollAxis) {
        let track = self.track(bounds, axis);
        renderer.fill_rect(track, self.config.track_color);

        let thumb_color = if self.state.drag.is_dragging(axis) {
            self.config.thumb_active_color
        } else {
            self.config.thumb_color
        };
        renderer.fill_rect(self.thumb(bounds, axis), thumb_color);
    }

    /// Map a pressed/dragged position along the track to a new offset.
    fn drag_to_offset(&self, bounds: Bounds, axis: ScrollAxis, thumb_pos: f32) -> f32 {
        let track = self.track(bounds, axis);
        match axis {
            ScrollAxis::Vertical => {
                let thumb = self.thumb(bounds, axis);
                offset_for_thumb(thumb_pos, track.y, track.height, thumb.height, self.max_scroll().1)
            }
            ScrollAxis::Horizontal => {
                let thumb = self.thumb(bounds, axis);
                offset_for_thumb(thumb_pos, track.x, track.width, thumb.width, self.max_scroll().0)
            }
        }
    }

    fn child_bounds(&self, bounds: Bounds) -> Bounds {
        Bounds::new(
            bounds.x,
            bounds.y,
            self.content_size.width,
            self.content_size.height,
        )
    }

    fn forward_to_child(&mut self, event: &Event, bounds: Bounds) -> bool {
        let translated = event.translated(self.state.offset.0, self.state.offset.1);
        let child_bounds = self.child_bounds(bounds);
        self.child.on_event(&translated, child_bounds)
    }

    fn handle_press(&mut self, position: Point, bounds: Bounds) -> bool {
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            if !self.scrollbar_visible(axis) || !self.track_hit_bounds(bounds, axis).contains(position) {
                continue;
            }
            let thumb = self.thumb(bounds, axis);
            let (pos, start, thumb_len) = match axis {
                ScrollAxis::Vertical => (position.y, thumb.y, thumb.height),
                ScrollAxis::Horizontal => (position.x, thumb.x, thumb.width),
            };
            let grab = if pos >= start && pos <= start + thumb_len {
                // Grabbed the thumb: keep the point under the cursor fixed
                pos - start
            } else {
                // Track click: jump so the thumb centers on the cursor
                let grab = thumb_len / 2.0;
                let offset = self.drag_to_offset(bounds, axis, pos - grab);
                match axis {
                    ScrollAxis::Vertical => self.state.offset.1 = offset,
                    ScrollAxis::Horizontal => self.state.offset.0 = offset,
                }
                grab
            };
            self.state.drag.start_drag(axis, grab);
            log::debug!("scrollbar drag start: {axis:?}, grab={grab:.1}");
            return true;
        }

        if bounds.contains(position) {
            return self.forward_to_child(
                &Event::MousePressed {
                    button: MouseButton::Left,
                    position,
                },
                bounds,
            );
        }
        false
    }

    fn handle_move(&mut self, position: Point, bounds: Bounds) -> bool {
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            let Some(grab) = self.state.drag.grab(axis) else {
                continue;
            };
            let pos = match axis {
                ScrollAxis::Vertical => position.y,
                ScrollAxis::Horizontal => position.x,
            };
            let offset = self.drag_to_offset(bounds, axis, pos - grab);
            match axis {
                ScrollAxis::Vertical => self.state.offset.1 = offset,
                ScrollAxis::Horizontal => self.state.offset.0 = offset,
            }
            return true;
        }
        self.forward_to_child(&Event::MouseMoved { position }, bounds)
    }
}

impl Widget for Scrollable {
    fn layout(&mut self, available: Size) -> Size {
        // The viewport fills the available space; an unbounded axis (nested
        // inside another scrollable) collapses to zero.
        let viewport = Size::new(
            if available.width.is_finite() {
                available.width
            } else {
                0.0
            },
            if available.height.is_finite() {
                available.height
            } else {
                0.0
            },
        );

        let child_available = Size::new(
            if self.direction.has_horizontal() {
                f32::INFINITY
            } else {
                viewport.width
            },
            if self.direction.has_vertical() {
                f32::INFINITY
            } else {
                viewport.height
            },
        );

        self.content_size = self.child.layout(child_available);
        self.viewport = viewport;
        // A resize can leave the offset past the end of the content
        self.clamp_offset();

        log::debug!(
            "scrollable layout: viewport={:?}, content={:?}, offset={:?}",
            self.viewport,
            self.content_size,
            self.state.offset
        );

        viewport
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.push_clip(bounds);
        renderer.push_scroll_offset_x(self.state.offset.0);
        renderer.push_scroll_offset_y(self.state.offset.1);
        self.child.draw(renderer, self.child_bounds(bounds));
        renderer.pop_scroll_offset_y();
        renderer.pop_scroll_offset_x();
        renderer.pop_clip();

        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            if self.scrollbar_visible(axis) {
                self.draw_scrollbar(renderer, bounds, axis);
            }
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> bool {
        match event {
            Event::MouseWheel { delta, position } if bounds.contains(*position) => {
                let before = self.state.offset;
                if self.direction.has_vertical() {
                    self.state.scroll_by(0.0, -delta);
                } else if self.direction.has_horizontal() {
                    self.state.scroll_by(-delta, 0.0);
                }
                self.clamp_offset();
                if self.state.offset != before {
                    true
                } else {
                    self.forward_to_child(event, bounds)
                }
            }
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => self.handle_press(*position, bounds),
            Event::MouseMoved { position } => self.handle_move(*position, bounds),
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => {
                if self.state.drag.is_dragging(ScrollAxis::Vertical)
                    || self.state.drag.is_dragging(ScrollAxis::Horizontal)
                {
                    log::debug!("scrollbar drag end");
                    self.state.drag.stop_drag();
                    true
                } else {
                    self.forward_to_child(event, bounds)
                }
            }
            _ => self.forward_to_child(event, bounds),
        }
    }
}

/// Helper function to create a scrollable container.
pub fn scrollable(child: Element) -> Scrollable {
    Scrollable::new(child)
}

/// Thumb length proportional to the visible fraction of the content, with a
/// minimum so it stays grabbable.
fn thumb_length(track_len: f32, viewport_len: f32, content_len: f32, min_len: f32) -> f32 {
    if content_len <= 0.0 {
        return track_len;
    }
    (viewport_len / content_len * track_len)
        .max(min_len)
        .min(track_len)
}

/// Thumb start position for a given scroll offset.
fn thumb_start(track_start: f32, track_len: f32, thumb_len: f32, offset: f32, max_scroll: f32) -> f32 {
    let ratio = if max_scroll > 0.0 {
        (offset / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    };
    track_start + ratio * (track_len - thumb_len)
}

/// Inverse of `thumb_start`: scroll offset for a thumb position, clamped to
/// the scrollable range.
fn offset_for_thumb(
    thumb_pos: f32,
    track_start: f32,
    track_len: f32,
    thumb_len: f32,
    max_scroll: f32,
) -> f32 {
    let range = track_len - thumb_len;
    if range <= 0.0 {
        return 0.0;
    }
    ((thumb_pos - track_start) / range * max_scroll).clamp(0.0, max_scroll)
}
