use crate::layout::Point;

/// Events that widgets can respond to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// Mouse wheel scrolled. Positive delta scrolls up, in pixels.
    MouseWheel { delta: f32, position: Point },
}

impl Event {
    /// The screen position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            Event::MousePressed { position, .. }
            | Event::MouseReleased { position, .. }
            | Event::MouseMoved { position }
            | Event::MouseWheel { position, .. } => *position,
        }
    }

    /// The same event with its position translated by the given delta.
    /// Used by scroll containers to map screen space into content space.
    pub fn translated(&self, dx: f32, dy: f32) -> Event {
        let shift = |p: &Point| Point::new(p.x + dx, p.y + dy);
        match self {
            Event::MousePressed { button, position } => Event::MousePressed {
                button: *button,
                position: shift(position),
            },
            Event::MouseReleased { button, position } => Event::MouseReleased {
                button: *button,
                position: shift(position),
            },
            Event::MouseMoved { position } => Event::MouseMoved {
                position: shift(position),
            },
            Event::MouseWheel { delta, position } => Event::MouseWheel {
                delta: *delta,
                position: shift(position),
            },
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
