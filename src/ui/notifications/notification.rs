// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the immutable `ToastMessage` posted by callers and the
//! `ToastStyle` that controls how it is drawn.

use crate::ui::design_tokens::{opacity, palette, radius, sizing};
use iced::Color;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual attributes of a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub text_color: Color,
    pub background: Color,
    pub corner_radius: f32,
    /// Height of a single-line toast.
    pub height: f32,
    /// Gap between the toast and the left/right edges of the host surface.
    pub side_margin: f32,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            text_color: palette::WHITE,
            background: Color {
                a: opacity::TOAST_BACKGROUND,
                ..palette::BLACK
            },
            corner_radius: radius::TOAST,
            height: sizing::TOAST_HEIGHT,
            side_margin: sizing::TOAST_SIDE_MARGIN,
        }
    }
}

/// A message to be shown as a toast.
///
/// Messages are immutable once built; the notifier owns them from `enqueue`
/// until the toast has faded out. A clone is a new toast with its own id.
#[derive(Debug)]
pub struct ToastMessage {
    id: ToastId,
    text: String,
    style: ToastStyle,
}

impl Clone for ToastMessage {
    fn clone(&self) -> Self {
        Self::with_style(self.text.clone(), self.style)
    }
}

impl ToastMessage {
    /// Creates a toast with the default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_style(text, ToastStyle::default())
    }

    /// Creates a toast with an explicit style.
    pub fn with_style(text: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            id: ToastId::new(),
            text: text.into(),
            style,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn style(&self) -> &ToastStyle {
        &self.style
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the text in characters, not bytes.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = ToastMessage::new("Sabaton added to your schedule");
        let b = ToastMessage::new("Sabaton added to your schedule");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn cloned_message_gets_its_own_id() {
        let original = ToastMessage::new("Set times posted");
        let copy = original.clone();

        assert_ne!(original.id(), copy.id());
        assert_eq!(original.text(), copy.text());
        assert_eq!(original.style(), copy.style());
    }

    #[test]
    fn default_style_is_white_on_translucent_black() {
        let style = ToastStyle::default();
        assert_eq!(style.text_color, palette::WHITE);
        assert_eq!(style.background.r, 0.0);
        assert!(style.background.a < 1.0);
        assert_eq!(style.height, sizing::TOAST_HEIGHT);
    }

    #[test]
    fn char_count_counts_scalars_not_bytes() {
        let message = ToastMessage::new("Mötley Crüe");
        assert_eq!(message.char_count(), 11);
        assert!(message.text().len() > 11);
    }

    #[test]
    fn empty_text_is_detected() {
        assert!(ToastMessage::new("").is_empty());
        assert!(!ToastMessage::new(" ").is_empty());
    }
}
