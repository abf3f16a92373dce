//! Reusable demo components for the sample screens

mod scrollable;

pub use scrollable::ScrollableDemoView;
