//! Screen lifecycle
//!
//! A [`Screen`] bridges two host lifecycle events to the components it owns:
//! it attaches them to the root view when the screen loads, and forwards the
//! root view's size to them on every layout pass. [`ScreenHost`] owns the
//! screen and its root view and drives those events.

use crate::event::Event;
use crate::layout::Size;
use crate::renderer::Renderer;
use crate::view::View;

/// Lifecycle contract for one screen.
pub trait Screen {
    /// Called exactly once, after the root view exists. Build components and
    /// attach them to the root view here.
    fn on_load(&mut self, root: &mut View);

    /// Called on every layout pass with the root view's current size.
    /// Runs many times, so it must be cheap and idempotent.
    fn on_layout(&mut self, size: Size);
}

/// Owns a screen and its root view, and turns host events into the screen's
/// lifecycle callbacks. A screen is either unloaded or loaded; `load` is the
/// only transition and happens once.
pub struct ScreenHost<S: Screen> {
    screen: S,
    root: View,
    loaded: bool,
}

impl<S: Screen> ScreenHost<S> {
    /// Create a host with a root view of the given size. The root view
    /// exists before any lifecycle callback fires.
    pub fn new(screen: S, size: Size) -> Self {
        Self {
            screen,
            root: View::new(size),
            loaded: false,
        }
    }

    /// Load the screen: run `on_load` followed by an initial layout pass, so
    /// every component has a frame before the first draw. Calling `load`
    /// again is a no-op.
    pub fn load(&mut self) {
        if self.loaded {
            log::debug!("load: screen already loaded");
            return;
        }
        self.loaded = true;
        log::info!("loading screen");
        self.screen.on_load(&mut self.root);
        self.layout();
    }

    /// Run a layout pass: read the root view's current size and hand it to
    /// the screen. Ignored until the screen has loaded.
    pub fn layout(&mut self) {
        if !self.loaded {
            log::warn!("layout pass before load; ignoring");
            return;
        }
        let size = self.root.bounds().size();
        log::debug!("layout pass: {size:?}");
        self.screen.on_layout(size);
    }

    /// Host bounds change: update the root view and relayout.
    pub fn resize(&mut self, size: Size) {
        self.root.set_size(size);
        self.layout();
    }

    /// Draw the view hierarchy.
    pub fn draw(&self, renderer: &mut Renderer) {
        self.root.draw(renderer);
    }

    /// Dispatch an event through the view hierarchy. Returns true if a
    /// redraw is needed.
    pub fn dispatch_event(&mut self, event: &Event) -> bool {
        self.root.dispatch_event(event)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn root(&self) -> &View {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records lifecycle calls for assertions.
    #[derive(Default)]
    struct Recorder {
        loads: usize,
        layouts: Vec<Size>,
    }

    struct RecordingScreen {
        recorder: Rc<RefCell<Recorder>>,
    }

    impl Screen for RecordingScreen {
        fn on_load(&mut self, _root: &mut View) {
            self.recorder.borrow_mut().loads += 1;
        }

        fn on_layout(&mut self, size: Size) {
            self.recorder.borrow_mut().layouts.push(size);
        }
    }

    fn host_with_recorder(size: Size) -> (ScreenHost<RecordingScreen>, Rc<RefCell<Recorder>>) {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let host = ScreenHost::new(
            RecordingScreen {
                recorder: recorder.clone(),
            },
            size,
        );
        (host, recorder)
    }

    #[test]
    fn load_runs_once_and_layouts() {
        let (mut host, recorder) = host_with_recorder(Size::new(320.0, 568.0));
        assert!(!host.is_loaded());

        host.load();
        host.load();

        assert!(host.is_loaded());
        assert_eq!(recorder.borrow().loads, 1);
        assert_eq!(recorder.borrow().layouts, vec![Size::new(320.0, 568.0)]);
    }

    #[test]
    fn resize_forwards_new_size() {
        let (mut host, recorder) = host_with_recorder(Size::new(320.0, 568.0));
        host.load();

        host.resize(Size::new(568.0, 320.0));

        assert_eq!(host.root().bounds().size(), Size::new(568.0, 320.0));
        assert_eq!(
            recorder.borrow().layouts,
            vec![Size::new(320.0, 568.0), Size::new(568.0, 320.0)]
        );
    }

    #[test]
    fn layout_before_load_is_ignored() {
        let (mut host, recorder) = host_with_recorder(Size::new(320.0, 568.0));
        host.layout();
        assert!(recorder.borrow().layouts.is_empty());
    }
}
