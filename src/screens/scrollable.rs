//! Demo screen hosting a single scrollable list component.

use std::cell::RefCell;
use std::rc::Rc;

use slate_ui::demos::ScrollableDemoView;
use slate_ui::{ComponentView, Screen, Size, View};

/// Shows one scrollable component that fills the screen and follows its
/// size across resizes.
pub struct ScrollableScreen {
    scrollable: Rc<RefCell<ScrollableDemoView>>,
}

impl ScrollableScreen {
    pub fn new() -> Self {
        Self {
            scrollable: Rc::new(RefCell::new(ScrollableDemoView::new())),
        }
    }
}

impl Default for ScrollableScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ScrollableScreen {
    fn on_load(&mut self, root: &mut View) {
        root.add_subview(self.scrollable.clone());
    }

    fn on_layout(&mut self, size: Size) {
        self.scrollable.borrow_mut().update(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_ui::{Bounds, ComponentView, Renderer, ScreenHost};

    #[test]
    fn load_attaches_exactly_one_component() {
        let mut host = ScreenHost::new(ScrollableScreen::new(), Size::new(320.0, 568.0));
        host.load();
        assert_eq!(host.root().subview_count(), 1);

        // A second load must not attach a duplicate
        host.load();
        assert_eq!(host.root().subview_count(), 1);
    }

    #[test]
    fn component_fills_bounds_after_load() {
        let screen = ScrollableScreen::new();
        let component = screen.scrollable.clone();

        let mut host = ScreenHost::new(screen, Size::new(320.0, 568.0));
        host.load();

        assert_eq!(
            component.borrow().frame(),
            Bounds::new(0.0, 0.0, 320.0, 568.0)
        );
    }

    #[test]
    fn rotation_relayouts_without_reattachment() {
        let screen = ScrollableScreen::new();
        let component = screen.scrollable.clone();

        let mut host = ScreenHost::new(screen, Size::new(320.0, 568.0));
        host.load();

        host.resize(Size::new(568.0, 320.0));

        assert_eq!(host.root().subview_count(), 1);
        assert_eq!(
            component.borrow().frame(),
            Bounds::new(0.0, 0.0, 568.0, 320.0)
        );
    }

    #[test]
    fn repeated_layout_passes_are_idempotent() {
        let screen = ScrollableScreen::new();
        let component = screen.scrollable.clone();

        let mut host = ScreenHost::new(screen, Size::new(320.0, 568.0));
        host.load();

        let mut renderer = Renderer::new();
        renderer.begin_frame(Size::new(320.0, 568.0));
        host.draw(&mut renderer);
        let first_frame = component.borrow().frame();
        let first_commands = renderer.commands().to_vec();

        for _ in 0..10 {
            host.layout();
        }

        assert_eq!(component.borrow().frame(), first_frame);
        renderer.begin_frame(Size::new(320.0, 568.0));
        host.draw(&mut renderer);
        assert_eq!(renderer.commands(), first_commands.as_slice());
    }

    #[test]
    fn frame_contained_for_all_sizes() {
        let screen = ScrollableScreen::new();
        let component = screen.scrollable.clone();

        let mut host = ScreenHost::new(screen, Size::new(320.0, 568.0));
        host.load();

        for (width, height) in [(640.0, 480.0), (1920.0, 1080.0), (50.0, 50.0)] {
            host.resize(Size::new(width, height));
            let frame = component.borrow().frame();
            assert!(frame.width <= width);
            assert!(frame.height <= height);
        }
    }
}
