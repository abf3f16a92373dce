//! Widget state types for stateful widgets

/// Axis a scrollbar drag operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Scroll thumb drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollDragState {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging the scrollbar thumb, with the offset within the thumb where
    /// the drag started
    Dragging { axis: ScrollAxis, grab: f32 },
}

impl ScrollDragState {
    /// Check if currently dragging the given axis
    pub fn is_dragging(&self, axis: ScrollAxis) -> bool {
        matches!(self, ScrollDragState::Dragging { axis: a, .. } if *a == axis)
    }

    /// Get the grab offset if dragging the given axis
    pub fn grab(&self, axis: ScrollAxis) -> Option<f32> {
        match self {
            ScrollDragState::Dragging { axis: a, grab } if *a == axis => Some(*grab),
            _ => None,
        }
    }

    /// Start dragging with the given grab offset within the thumb
    pub fn start_drag(&mut self, axis: ScrollAxis, grab: f32) {
        *self = ScrollDragState::Dragging { axis, grab };
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = ScrollDragState::Idle;
    }
}

/// State for scrollable containers
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Scroll offset (x, y)
    pub offset: (f32, f32),
    /// Drag interaction state for the scrollbar thumb
    pub(crate) drag: ScrollDragState,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll to a specific offset
    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.offset = (x, y);
    }

    /// Scroll by a delta
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_transitions() {
        let mut drag = ScrollDragState::default();
        assert!(!drag.is_dragging(ScrollAxis::Vertical));

        drag.start_drag(ScrollAxis::Vertical, 12.0);
        assert!(drag.is_dragging(ScrollAxis::Vertical));
        assert!(!drag.is_dragging(ScrollAxis::Horizontal));
        assert_eq!(drag.grab(ScrollAxis::Vertical), Some(12.0));
        assert_eq!(drag.grab(ScrollAxis::Horizontal), None);

        drag.stop_drag();
        assert!(!drag.is_dragging(ScrollAxis::Vertical));
    }

    #[test]
    fn scroll_by_accumulates() {
        let mut state = ScrollState::new();
        state.scroll_by(5.0, 10.0);
        state.scroll_by(0.0, 10.0);
        assert_eq!(state.offset, (5.0, 20.0));

        state.scroll_to(0.0, 3.0);
        assert_eq!(state.offset, (0.0, 3.0));
    }
}
