//! Column layout widget

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

/// A vertical column layout widget
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
    padding: Padding,
    width: Length,
    height: Length,
    /// Cached child bounds from layout, relative to the column origin
    child_bounds: Vec<Bounds>,
}

impl Column {
    /// Create a new column with the given children
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            children,
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Shrink,
            height: Length::Shrink,
            child_bounds: Vec::new(),
        }
    }

    /// Set spacing between children
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set padding around the column
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
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

impl Widget for Column {
    fn layout(&mut self, available: Size) -> Size {
        let inner = Size::new(
            (available.width - self.padding.horizontal()).max(0.0),
            (available.height - self.padding.vertical()).max(0.0),
        );

        // First pass: measure all children
        let mut max_width: f32 = 0.0;
        for child in &mut self.children {
            let child_size = child.layout(inner);
            max_width = max_width.max(child_size.width);
        }

        // Second pass: assign positions
        self.child_bounds.clear();
        let mut y = self.padding.top;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                y += self.spacing;
            }
            let child_size = child.cached_size();
            self.child_bounds.push(Bounds::new(
                self.padding.left,
                y,
                child_size.width,
                child_size.height,
            ));
            y += child_size.height;
        }

        let content_width = max_width + self.padding.horizontal();
        let content_height = y + self.padding.bottom;

        Size::new(
            self.width.resolve(available.width, content_width),
            self.height.resolve(available.height, content_height),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (child, rel) in self.children.iter().zip(&self.child_bounds) {
            child.draw(
                renderer,
                Bounds::new(bounds.x + rel.x, bounds.y + rel.y, rel.width, rel.height),
            );
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> bool {
        for (child, rel) in self.children.iter_mut().zip(&self.child_bounds) {
            let child_bounds =
                Bounds::new(bounds.x + rel.x, bounds.y + rel.y, rel.width, rel.height);
            // Presses and wheel events are positional; moves and releases are
            // forwarded everywhere so in-flight drags can finish.
            let hit = match event {
                Event::MousePressed { position, .. } | Event::MouseWheel { position, .. } => {
                    child_bounds.contains(*position)
                }
                _ => true,
            };
            if hit && child.on_event(event, child_bounds) {
                return true;
            }
        }
        false
    }
}

/// Helper function to create a column.
pub fn column(children: Vec<Element>) -> Column {
    Column::new(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use crate::widgets::Block;

    fn fixed_block(width: f32, height: f32) -> Element {
        Element::new(
            Block::new(Color::WHITE)
                .width(Length::Units(width))
                .height(Length::Units(height)),
        )
    }

    #[test]
    fn stacks_children_with_spacing() {
        let mut column =
            Column::new(vec![fixed_block(100.0, 40.0), fixed_block(80.0, 40.0)]).spacing(10.0);
        let size = column.layout(Size::new(200.0, 200.0));
        assert_eq!(size, Size::new(100.0, 90.0));
        assert_eq!(column.child_bounds[0], Bounds::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(column.child_bounds[1], Bounds::new(0.0, 50.0, 80.0, 40.0));
    }

    #[test]
    fn padding_offsets_children() {
        let mut column = Column::new(vec![fixed_block(50.0, 20.0)])
            .spacing(0.0)
            .padding(Padding::uniform(8.0));
        let size = column.layout(Size::new(200.0, 200.0));
        assert_eq!(size, Size::new(66.0, 36.0));
        assert_eq!(column.child_bounds[0], Bounds::new(8.0, 8.0, 50.0, 20.0));
    }

    #[test]
    fn unbounded_height_measures_content() {
        let mut column =
            Column::new(vec![fixed_block(50.0, 600.0), fixed_block(50.0, 600.0)]).spacing(4.0);
        let size = column.layout(Size::new(100.0, f32::INFINITY));
        assert_eq!(size, Size::new(50.0, 1204.0));
    }
}
