// SPDX-License-Identifier: MPL-2.0
//! Toast placement and text layout.
//!
//! The frame of a toast spans the host surface minus its side margins. Its
//! vertical position is either pinned to the top of the surface or derived
//! from a placement rectangle supplied by the caller. Long messages are
//! word-wrapped and the frame grows to fit them.

use super::notification::ToastStyle;
use crate::ui::design_tokens::{spacing, typography};
use iced::{Point, Rectangle, Size};

/// Text metrics used to wrap long messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Messages with more characters than this are wrapped.
    pub multiline_threshold: usize,
    /// Maximum number of wrapped lines.
    pub max_lines: usize,
    pub glyph_width: f32,
    pub line_height: f32,
    /// Inner padding between the toast edge and its text, on every side.
    pub text_padding: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            multiline_threshold: 40,
            max_lines: 4,
            glyph_width: typography::TOAST_GLYPH_WIDTH,
            line_height: typography::TOAST_LINE_HEIGHT,
            text_padding: spacing::XS,
        }
    }
}

impl LayoutMetrics {
    /// Number of characters that fit on one line of a toast `width` wide.
    #[must_use]
    pub fn columns(&self, width: f32) -> usize {
        let usable = width - 2.0 * self.text_padding;
        if !usable.is_finite() || usable <= 0.0 || self.glyph_width <= 0.0 {
            return 1;
        }
        ((usable / self.glyph_width).floor() as usize).max(1)
    }

    #[must_use]
    pub fn is_multiline(&self, text: &str) -> bool {
        text.chars().count() > self.multiline_threshold
    }
}

/// Resolved position and content of a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastLayout {
    /// Frame in host surface coordinates.
    pub frame: Rectangle,
    /// Lines to draw, top to bottom.
    pub lines: Vec<String>,
    pub multiline: bool,
    /// Horizontal inset of the text used when wrapping; the renderer must
    /// pad by the same amount.
    pub text_padding: f32,
}

/// Returns `true` for rectangles that cannot anchor a toast.
#[must_use]
pub fn is_degenerate(rect: &Rectangle) -> bool {
    let finite = rect.x.is_finite()
        && rect.y.is_finite()
        && rect.width.is_finite()
        && rect.height.is_finite();

    !finite || rect.width <= 0.0 || rect.height <= 0.0
}

/// Vertical offset of a toast anchored to `placement`.
///
/// A high toast sits at the top of the surface. Otherwise it sits at the
/// vertical middle of the placement, raised by an eighth of its height.
#[must_use]
pub fn anchor_y(placement: &Rectangle, place_high: bool) -> f32 {
    if place_high {
        0.0
    } else {
        placement.y + placement.height / 2.0 - placement.height / 8.0
    }
}

/// Computes the frame and wrapped lines of a toast.
#[must_use]
pub fn layout(
    text: &str,
    style: &ToastStyle,
    metrics: &LayoutMetrics,
    surface_width: f32,
    placement: &Rectangle,
    place_high: bool,
) -> ToastLayout {
    let x = style.side_margin;

    if !surface_width.is_finite() || (!place_high && is_degenerate(placement)) {
        log::warn!(
            "degenerate toast geometry (surface width {surface_width}, placement {placement:?}); \
             drawing a zero-size toast"
        );
        return ToastLayout {
            frame: Rectangle::new(Point::new(x, 0.0), Size::ZERO),
            lines: vec![text.to_owned()],
            multiline: false,
            text_padding: metrics.text_padding,
        };
    }

    let width = (surface_width - 2.0 * style.side_margin).max(0.0);
    let y = anchor_y(placement, place_high);

    let multiline = metrics.is_multiline(text);
    let (lines, height) = if multiline {
        let lines = wrap(text, metrics.columns(width), metrics.max_lines);
        let content = lines.len() as f32 * metrics.line_height + 2.0 * metrics.text_padding;
        (lines, content.max(style.height))
    } else {
        (vec![text.to_owned()], style.height)
    };

    ToastLayout {
        frame: Rectangle::new(Point::new(x, y), Size::new(width, height)),
        lines,
        multiline,
        text_padding: metrics.text_padding,
    }
}

/// Greedy word wrap into at most `max_lines` lines of `columns` characters.
///
/// Words longer than a line are split. If the text does not fit, the last
/// line ends with an ellipsis.
#[must_use]
pub fn wrap(text: &str, columns: usize, max_lines: usize) -> Vec<String> {
    let columns = columns.max(1);
    let max_lines = max_lines.max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > columns {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(columns);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        if chars.is_empty() {
            continue;
        }

        if current_len > 0 && current_len + 1 + chars.len() > columns {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            ellipsize(last, columns);
        }
    }

    lines
}

fn ellipsize(line: &mut String, columns: usize) {
    let mut chars: Vec<char> = line.chars().collect();
    chars.truncate(columns.saturating_sub(1));
    while chars.last().is_some_and(|c| c.is_whitespace()) {
        chars.pop();
    }
    chars.push('…');
    *line = chars.into_iter().collect();
}
