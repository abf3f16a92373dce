//! slate_ui - a small retained-component UI framework
//!
//! Screens implement [`Screen`] and compose [`ComponentView`]s; the
//! application shell drives the lifecycle (load once, layout on every
//! resize) and presents frames through a CPU surface.

mod application;
mod component;
mod constants;
mod element;
mod event;
mod layout;
mod raster;
mod renderer;
mod screen;
mod state;
mod view;
mod widget;
mod widgets;

pub mod demos;

pub use application::{Error, Settings};
pub use component::{ComponentView, SharedComponent};
pub use element::Element;
pub use event::{Event, MouseButton};
pub use layout::{Bounds, Length, Padding, Point, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use screen::{Screen, ScreenHost};
pub use state::{ScrollAxis, ScrollDragState, ScrollState};
pub use view::View;
pub use widget::Widget;

// Re-export widgets
pub use widgets::{block, column, scrollable, Block, Column, ScrollDirection, Scrollable, ScrollbarConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Error, Settings};
    pub use crate::component::{ComponentView, SharedComponent};
    pub use crate::element::Element;
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{Bounds, Length, Padding, Point, Size};
    pub use crate::renderer::{Color, Renderer};
    pub use crate::screen::{Screen, ScreenHost};
    pub use crate::view::View;
    pub use crate::widget::Widget;
    pub use crate::widgets::{block, column, scrollable};
}

/// Run a screen with default settings
pub fn run<S: Screen + 'static>(screen: S) -> Result<(), Error> {
    application::run(screen, Settings::default())
}

/// Run a screen with custom settings
pub fn run_with_settings<S: Screen + 'static>(screen: S, settings: Settings) -> Result<(), Error> {
    application::run(screen, settings)
}
