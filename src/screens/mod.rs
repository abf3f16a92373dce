//! Demo screens

mod scrollable;

pub use scrollable::ScrollableScreen;
