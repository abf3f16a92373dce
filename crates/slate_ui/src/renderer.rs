//! Draw command recording.
//!
//! Widgets draw through the [`Renderer`], which records a flat list of
//! commands for the frame. Clipping and scroll offsets are resolved at record
//! time, so the rasterizer only ever sees screen-space rectangles.

use crate::layout::{Bounds, Size};

/// A draw command to be executed when the frame is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Bounds, color: Color },
}

/// Records draw commands for one frame.
pub struct Renderer {
    frame: Bounds,
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Bounds>,
    scroll_x: Vec<f32>,
    scroll_y: Vec<f32>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            frame: Bounds::ZERO,
            commands: Vec::new(),
            clip_stack: Vec::new(),
            scroll_x: Vec::new(),
            scroll_y: Vec::new(),
        }
    }

    /// Start a new frame of the given size, discarding the previous frame's
    /// commands. Everything recorded afterwards is clipped to the frame.
    pub fn begin_frame(&mut self, size: Size) {
        self.frame = Bounds::at_origin(size);
        self.commands.clear();
        self.clip_stack.clear();
        self.scroll_x.clear();
        self.scroll_y.clear();
    }

    /// The commands recorded since the last `begin_frame`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, rect: Bounds, color: Color) {
        let rect = self.offset(rect).intersect(&self.current_clip());
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Clip subsequent commands to the given rectangle (intersected with the
    /// current clip). Must be balanced with `pop_clip`.
    pub fn push_clip(&mut self, bounds: Bounds) {
        let clip = self.offset(bounds).intersect(&self.current_clip());
        self.clip_stack.push(clip);
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            log::warn!("pop_clip without matching push_clip");
        }
    }

    /// Shift subsequent commands left by `offset` pixels.
    pub fn push_scroll_offset_x(&mut self, offset: f32) {
        self.scroll_x.push(offset);
    }

    pub fn pop_scroll_offset_x(&mut self) {
        if self.scroll_x.pop().is_none() {
            log::warn!("pop_scroll_offset_x without matching push");
        }
    }

    /// Shift subsequent commands up by `offset` pixels.
    pub fn push_scroll_offset_y(&mut self, offset: f32) {
        self.scroll_y.push(offset);
    }

    pub fn pop_scroll_offset_y(&mut self) {
        if self.scroll_y.pop().is_none() {
            log::warn!("pop_scroll_offset_y without matching push");
        }
    }

    fn current_clip(&self) -> Bounds {
        *self.clip_stack.last().unwrap_or(&self.frame)
    }

    fn offset(&self, rect: Bounds) -> Bounds {
        let dx: f32 = self.scroll_x.iter().sum();
        let dy: f32 = self.scroll_y.iter().sum();
        Bounds::new(rect.x - dx, rect.y - dy, rect.width, rect.height)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from 8-bit channel values.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}
