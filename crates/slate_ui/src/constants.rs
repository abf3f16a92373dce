//! Centralized constants for slate_ui
//!
//! Metrics and palette shared across widgets and the application shell.

use crate::renderer::Color;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in a Column
pub const DEFAULT_SPACING: f32 = 8.0;

/// Pixels scrolled per mouse wheel line
pub const WHEEL_LINE_HEIGHT: f32 = 20.0;

// =============================================================================
// Scrollbars
// =============================================================================

/// Scrollbar thickness
pub const SCROLLBAR_WIDTH: f32 = 8.0;

/// Gap between the scrollbar and the viewport edge
pub const SCROLLBAR_PADDING: f32 = 2.0;

/// Minimum thumb length so it stays grabbable with long content
pub const MIN_THUMB_LENGTH: f32 = 24.0;

/// Extra pixels around the scrollbar that still count as a hit
pub const SCROLLBAR_HIT_SLOP: f32 = 4.0;

// =============================================================================
// Palette
// =============================================================================

pub const BACKGROUND: Color = Color::rgb(0.08, 0.09, 0.11);

pub const HEADER: Color = Color::rgb(0.22, 0.45, 0.70);
pub const ROW_EVEN: Color = Color::rgb(0.16, 0.17, 0.20);
pub const ROW_ODD: Color = Color::rgb(0.20, 0.21, 0.25);

pub const SCROLLBAR_TRACK: Color = Color::new(1.0, 1.0, 1.0, 0.06);
pub const SCROLLBAR_THUMB: Color = Color::new(1.0, 1.0, 1.0, 0.30);
pub const SCROLLBAR_THUMB_ACTIVE: Color = Color::new(1.0, 1.0, 1.0, 0.50);
