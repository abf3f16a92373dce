//! Component contract consumed by screens and the view hierarchy.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// A reusable, self-contained piece of UI that owns its widget tree and
/// interaction state.
///
/// Components are constructed with default state, attached to a
/// [`View`](crate::View) and told about viewport changes through
/// [`update`](ComponentView::update). Everything else (drawing, events)
/// flows through the view hierarchy.
pub trait ComponentView {
    /// Recompute the component's layout to fit the given viewport size.
    ///
    /// Called on every layout pass, so it must be cheap and idempotent.
    /// After `update(viewport)` the component's frame never exceeds
    /// `viewport` in either dimension.
    fn update(&mut self, viewport: Size);

    /// The frame occupied after the last `update`.
    fn frame(&self) -> Bounds;

    /// Draw the component at its current frame.
    fn draw(&self, renderer: &mut Renderer);

    /// Handle an event. Returns true if a redraw is needed.
    fn on_event(&mut self, event: &Event) -> bool {
        let _ = event;
        false
    }
}

/// Shared handle to a component.
///
/// The owning screen keeps one handle and the view hierarchy another;
/// `Rc` rather than `Arc` because the host contract is main-thread-only.
pub type SharedComponent = Rc<RefCell<dyn ComponentView>>;
