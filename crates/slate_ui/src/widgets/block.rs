//! Solid color block widget

use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

/// A solid color rectangle. Used for list rows, headers and separators.
pub struct Block {
    color: Color,
    width: Length,
    height: Length,
}

impl Block {
    /// Create a new block with the given color, filling the available space.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl Widget for Block {
    fn layout(&mut self, available: Size) -> Size {
        // A block has no intrinsic content; Shrink and unbounded Fill are zero.
        Size::new(
            self.width.resolve(available.width, 0.0),
            self.height.resolve(available.height, 0.0),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.fill_rect(bounds, self.color);
    }
}

/// Helper function to create a block.
pub fn block(color: Color) -> Block {
    Block::new(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_resolves_to_available() {
        let mut block = Block::new(Color::WHITE);
        assert_eq!(block.layout(Size::new(120.0, 40.0)), Size::new(120.0, 40.0));
    }

    #[test]
    fn fixed_height_keeps_units() {
        let mut block = Block::new(Color::WHITE).height(Length::Units(48.0));
        assert_eq!(block.layout(Size::new(120.0, 600.0)), Size::new(120.0, 48.0));
    }

    #[test]
    fn unbounded_fill_collapses_to_zero() {
        let mut block = Block::new(Color::WHITE);
        let size = block.layout(Size::new(120.0, f32::INFINITY));
        assert_eq!(size.height, 0.0);
    }
}
