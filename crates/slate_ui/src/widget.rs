//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The core widget trait that all UI elements implement
pub trait Widget {
    /// Calculate the size this widget occupies given the available space.
    /// Finite available dimensions are upper bounds on the returned size.
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event. Returns true if widget state changed and a redraw
    /// is needed.
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> bool {
        let _ = (event, bounds);
        false
    }
}
