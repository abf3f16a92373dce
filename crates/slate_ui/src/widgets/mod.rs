// Widget implementations

mod block;
mod column;
mod config;
mod scrollable;

pub use block::{block, Block};
pub use column::{column, Column};
pub use config::{ScrollDirection, ScrollbarConfig};
pub use scrollable::{scrollable, Scrollable};
