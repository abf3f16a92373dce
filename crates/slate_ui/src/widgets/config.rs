//! Shared widget configuration types

use crate::constants::{
    MIN_THUMB_LENGTH, SCROLLBAR_PADDING, SCROLLBAR_THUMB, SCROLLBAR_THUMB_ACTIVE, SCROLLBAR_TRACK,
    SCROLLBAR_WIDTH,
};
use crate::renderer::Color;

/// Which axes a scrollable container scrolls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

impl ScrollDirection {
    pub fn has_vertical(&self) -> bool {
        matches!(self, ScrollDirection::Vertical | ScrollDirection::Both)
    }

    pub fn has_horizontal(&self) -> bool {
        matches!(self, ScrollDirection::Horizontal | ScrollDirection::Both)
    }
}

/// Scrollbar appearance configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScrollbarConfig {
    /// Thickness of track and thumb
    pub width: f32,
    /// Gap between the scrollbar and the viewport edge
    pub padding: f32,
    /// Minimum thumb length
    pub min_thumb_length: f32,
    pub track_color: Color,
    pub thumb_color: Color,
    pub thumb_active_color: Color,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            width: SCROLLBAR_WIDTH,
            padding: SCROLLBAR_PADDING,
            min_thumb_length: MIN_THUMB_LENGTH,
            track_color: SCROLLBAR_TRACK,
            thumb_color: SCROLLBAR_THUMB,
            thumb_active_color: SCROLLBAR_THUMB_ACTIVE,
        }
    }
}
