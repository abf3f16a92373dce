//! Scrollable list demo component

use crate::component::ComponentView;
use crate::constants::{HEADER, ROW_EVEN, ROW_ODD};
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widgets::{Block, Column, Scrollable};

const ROW_COUNT: usize = 40;
const ROW_HEIGHT: f32 = 48.0;
const HEADER_HEIGHT: f32 = 64.0;
const ROW_SPACING: f32 = 4.0;

/// A vertically scrollable list of colored rows.
///
/// Construct it with default state and feed viewport sizes through
/// [`ComponentView::update`]; the component fills whatever it is given.
pub struct ScrollableDemoView {
    root: Element,
    frame: Bounds,
}

impl ScrollableDemoView {
    pub fn new() -> Self {
        let mut rows = Vec::with_capacity(ROW_COUNT + 1);
        rows.push(Element::new(
            Block::new(HEADER).height(Length::Units(HEADER_HEIGHT)),
        ));
        for i in 0..ROW_COUNT {
            let color = if i % 2 == 0 { ROW_EVEN } else { ROW_ODD };
            rows.push(Element::new(
                Block::new(color).height(Length::Units(ROW_HEIGHT)),
            ));
        }

        let list = Column::new(rows)
            .spacing(ROW_SPACING)
            .padding(Padding::uniform(8.0))
            .width(Length::Fill);

        Self {
            root: Element::new(Scrollable::new(Element::new(list))),
            frame: Bounds::ZERO,
        }
    }
}

impl Default for ScrollableDemoView {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentView for ScrollableDemoView {
    fn update(&mut self, viewport: Size) {
        let size = self.root.layout(viewport);
        self.frame = Bounds::at_origin(size);
        log::debug!("scrollable demo update: viewport={viewport:?}, frame={:?}", self.frame);
    }

    fn frame(&self) -> Bounds {
        self.frame
    }

    fn draw(&self, renderer: &mut Renderer) {
        self.root.draw(renderer, self.frame);
    }

    fn on_event(&mut self, event: &Event) -> bool {
        self.root.on_event(event, self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_fills_viewport() {
        let mut demo = ScrollableDemoView::new();
        demo.update(Size::new(320.0, 568.0));
        assert_eq!(demo.frame(), Bounds::new(0.0, 0.0, 320.0, 568.0));
    }

    #[test]
    fn frame_contained_for_all_sizes() {
        let mut demo = ScrollableDemoView::new();
        for (width, height) in [
            (320.0, 568.0),
            (568.0, 320.0),
            (100.0, 100.0),
            (1920.0, 1080.0),
            (1.0, 1.0),
        ] {
            demo.update(Size::new(width, height));
            let frame = demo.frame();
            assert!(frame.width <= width, "width {} > {width}", frame.width);
            assert!(frame.height <= height, "height {} > {height}", frame.height);
        }
    }

    #[test]
    fn update_is_idempotent() {
        let mut demo = ScrollableDemoView::new();
        demo.update(Size::new(320.0, 568.0));
        let first = demo.frame();

        let mut renderer = Renderer::new();
        renderer.begin_frame(Size::new(320.0, 568.0));
        demo.draw(&mut renderer);
        let commands = renderer.commands().to_vec();

        for _ in 0..5 {
            demo.update(Size::new(320.0, 568.0));
        }
        assert_eq!(demo.frame(), first);

        renderer.begin_frame(Size::new(320.0, 568.0));
        demo.draw(&mut renderer);
        assert_eq!(renderer.commands(), commands.as_slice());
    }

    #[test]
    fn rotation_relayouts() {
        let mut demo = ScrollableDemoView::new();
        demo.update(Size::new(320.0, 568.0));
        demo.update(Size::new(568.0, 320.0));
        assert_eq!(demo.frame(), Bounds::new(0.0, 0.0, 568.0, 320.0));
    }
}
