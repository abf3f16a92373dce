//! View hierarchy
//!
//! A [`View`] is a screen's root: it tracks the current bounds and the
//! components attached to it, and fans out drawing and events.

use std::rc::Rc;

use crate::component::SharedComponent;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The root view of a screen.
pub struct View {
    bounds: Bounds,
    subviews: Vec<SharedComponent>,
}

impl View {
    /// Create a root view of the given size, positioned at the origin.
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Bounds::at_origin(size),
            subviews: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_size(&mut self, size: Size) {
        self.bounds = Bounds::at_origin(size);
    }

    /// Attach a component. Attaching the same component twice is ignored,
    /// so one attachment cannot become several.
    pub fn add_subview(&mut self, component: SharedComponent) {
        if self.subviews.iter().any(|s| Rc::ptr_eq(s, &component)) {
            log::warn!("ignoring duplicate subview attachment");
            return;
        }
        self.subviews.push(component);
    }

    /// Number of attached components.
    pub fn subview_count(&self) -> usize {
        self.subviews.len()
    }

    /// Draw all attached components in attachment order.
    pub fn draw(&self, renderer: &mut Renderer) {
        for subview in &self.subviews {
            subview.borrow().draw(renderer);
        }
    }

    /// Dispatch an event, topmost component first. Returns true if any
    /// component handled it.
    pub fn dispatch_event(&mut self, event: &Event) -> bool {
        for subview in self.subviews.iter().rev() {
            if subview.borrow_mut().on_event(event) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::component::ComponentView;

    #[derive(Default)]
    struct Probe {
        frame: Bounds,
        events: usize,
        handles: bool,
    }

    impl ComponentView for Probe {
        fn update(&mut self, viewport: Size) {
            self.frame = Bounds::at_origin(viewport);
        }

        fn frame(&self) -> Bounds {
            self.frame
        }

        fn draw(&self, _renderer: &mut Renderer) {}

        fn on_event(&mut self, _event: &Event) -> bool {
            self.events += 1;
            self.handles
        }
    }

    #[test]
    fn add_subview_attaches_once() {
        let mut view = View::new(Size::new(320.0, 568.0));
        let probe = Rc::new(RefCell::new(Probe::default()));

        view.add_subview(probe.clone());
        assert_eq!(view.subview_count(), 1);

        view.add_subview(probe);
        assert_eq!(view.subview_count(), 1);
    }

    #[test]
    fn dispatch_stops_at_first_handler() {
        let mut view = View::new(Size::new(320.0, 568.0));
        let bottom = Rc::new(RefCell::new(Probe::default()));
        let top = Rc::new(RefCell::new(Probe {
            handles: true,
            ..Probe::default()
        }));
        view.add_subview(bottom.clone());
        view.add_subview(top.clone());

        let event = Event::MouseMoved {
            position: crate::layout::Point::ZERO,
        };
        assert!(view.dispatch_event(&event));
        // Topmost component saw the event; the one below it did not
        assert_eq!(top.borrow().events, 1);
        assert_eq!(bottom.borrow().events, 0);
    }

    #[test]
    fn set_size_updates_bounds() {
        let mut view = View::new(Size::new(320.0, 568.0));
        view.set_size(Size::new(568.0, 320.0));
        assert_eq!(view.bounds().size(), Size::new(568.0, 320.0));
    }
}
