// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Fade and hold durations
//! - **Style**: Toast colors and geometry
//! - **Layout**: Long-text wrapping metrics

use crate::ui::design_tokens::{radius, sizing, spacing, typography};

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Duration of the fade-in and fade-out animations (in milliseconds).
pub const DEFAULT_FADE_MS: u64 = 130;

/// Minimum fade duration (in milliseconds).
pub const MIN_FADE_MS: u64 = 10;

/// Maximum fade duration (in milliseconds).
pub const MAX_FADE_MS: u64 = 2_000;

/// How long a toast stays fully visible (in milliseconds).
pub const DEFAULT_HOLD_MS: u64 = 3_000;

/// Minimum hold duration (in milliseconds).
pub const MIN_HOLD_MS: u64 = 500;

/// Maximum hold duration (in milliseconds).
pub const MAX_HOLD_MS: u64 = 60_000;

// ==========================================================================
// Style Defaults
// ==========================================================================

/// Text color as RGBA components in `0.0..=1.0`.
pub const DEFAULT_TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Background color as RGBA components in `0.0..=1.0`.
pub const DEFAULT_BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.6];

pub const DEFAULT_CORNER_RADIUS: f32 = radius::TOAST;
pub const MAX_CORNER_RADIUS: f32 = 100.0;

/// Height of a single-line toast.
pub const DEFAULT_TOAST_HEIGHT: f32 = sizing::TOAST_HEIGHT;
pub const MIN_TOAST_HEIGHT: f32 = 16.0;
pub const MAX_TOAST_HEIGHT: f32 = 200.0;

pub const DEFAULT_SIDE_MARGIN: f32 = sizing::TOAST_SIDE_MARGIN;
pub const MAX_SIDE_MARGIN: f32 = 200.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Messages longer than this many characters are wrapped.
pub const DEFAULT_MULTILINE_THRESHOLD: usize = 40;
pub const MIN_MULTILINE_THRESHOLD: usize = 1;
pub const MAX_MULTILINE_THRESHOLD: usize = 500;

/// Maximum number of lines of a wrapped toast.
pub const DEFAULT_MAX_LINES: usize = 4;
pub const MIN_MAX_LINES: usize = 1;
pub const MAX_MAX_LINES: usize = 12;

pub const DEFAULT_GLYPH_WIDTH: f32 = typography::TOAST_GLYPH_WIDTH;
pub const MIN_GLYPH_WIDTH: f32 = 1.0;
pub const MAX_GLYPH_WIDTH: f32 = 64.0;

pub const DEFAULT_LINE_HEIGHT: f32 = typography::TOAST_LINE_HEIGHT;
pub const MIN_LINE_HEIGHT: f32 = 4.0;
pub const MAX_LINE_HEIGHT: f32 = 128.0;

pub const DEFAULT_TEXT_PADDING: f32 = spacing::XS;
pub const MAX_TEXT_PADDING: f32 = 64.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timing validation
    assert!(MIN_FADE_MS > 0);
    assert!(DEFAULT_FADE_MS >= MIN_FADE_MS);
    assert!(DEFAULT_FADE_MS <= MAX_FADE_MS);
    assert!(MIN_HOLD_MS > 0);
    assert!(DEFAULT_HOLD_MS >= MIN_HOLD_MS);
    assert!(DEFAULT_HOLD_MS <= MAX_HOLD_MS);

    // Style validation
    assert!(DEFAULT_TOAST_HEIGHT >= MIN_TOAST_HEIGHT);
    assert!(DEFAULT_TOAST_HEIGHT <= MAX_TOAST_HEIGHT);
    assert!(DEFAULT_SIDE_MARGIN <= MAX_SIDE_MARGIN);
    assert!(DEFAULT_CORNER_RADIUS <= MAX_CORNER_RADIUS);

    // Layout validation
    assert!(DEFAULT_MULTILINE_THRESHOLD >= MIN_MULTILINE_THRESHOLD);
    assert!(DEFAULT_MULTILINE_THRESHOLD <= MAX_MULTILINE_THRESHOLD);
    assert!(DEFAULT_MAX_LINES >= MIN_MAX_LINES);
    assert!(DEFAULT_MAX_LINES <= MAX_MAX_LINES);
    assert!(DEFAULT_GLYPH_WIDTH >= MIN_GLYPH_WIDTH);
    assert!(DEFAULT_LINE_HEIGHT >= MIN_LINE_HEIGHT);
    assert!(DEFAULT_TEXT_PADDING <= MAX_TEXT_PADDING);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_FADE_MS, 130);
        assert_eq!(DEFAULT_HOLD_MS, 3_000);
        assert!(DEFAULT_FADE_MS < DEFAULT_HOLD_MS);
    }

    #[test]
    fn layout_defaults_are_valid() {
        assert_eq!(DEFAULT_MULTILINE_THRESHOLD, 40);
        assert_eq!(DEFAULT_MAX_LINES, 4);
    }

    #[test]
    fn default_colors_are_normalized() {
        for component in DEFAULT_TEXT_COLOR.iter().chain(DEFAULT_BACKGROUND_COLOR.iter()) {
            assert!((0.0..=1.0).contains(component));
        }
    }
}
