// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the attached notification.
//!
//! The toast is drawn as a rounded card positioned absolutely over the
//! window, with its colors scaled by the current fade opacity.

use super::geometry::ToastLayout;
use super::host::PresentedToast;
use super::notification::ToastStyle;
use super::overlay::OverlayHost;
use crate::ui::design_tokens::typography;
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at its frame.
    pub fn view<'a, Message: 'a>(toast: &'a PresentedToast, opacity: f32) -> Element<'a, Message> {
        let style = toast.style;
        let frame = toast.layout.frame;
        let text_color = with_opacity(style.text_color, opacity);

        let lines: Vec<Element<'a, Message>> = toast
            .layout
            .lines
            .iter()
            .map(|line| {
                Text::new(line.as_str())
                    .size(typography::TOAST)
                    .color(text_color)
                    .into()
            })
            .collect();
        let lines = Column::with_children(lines).align_x(alignment::Horizontal::Center);

        let card = Container::new(lines)
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .padding(card_padding(&toast.layout))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| toast_container_style(&style, opacity));

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: frame.y,
                right: 0.0,
                bottom: 0.0,
                left: frame.x,
            })
            .into()
    }

    /// Renders the overlay layer: the attached toast, or nothing.
    pub fn view_overlay<'a, Message: 'a>(host: &'a OverlayHost, now: Instant) -> Element<'a, Message> {
        match host.attached() {
            Some(toast) => Self::view(toast, host.opacity_at(now)),
            // Return an empty container that takes no space
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }
}

/// Inner padding of the card. Matches the inset the lines were wrapped for;
/// vertical space is handled by centering inside the frame height.
fn card_padding(layout: &ToastLayout) -> Padding {
    Padding {
        top: 0.0,
        right: layout.text_padding,
        bottom: 0.0,
        left: layout.text_padding,
    }
}

/// Style function for the toast card.
fn toast_container_style(style: &ToastStyle, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_opacity(style.background, opacity))),
        border: Border {
            radius: style.corner_radius.into(),
            ..Border::default()
        },
        text_color: Some(with_opacity(style.text_color, opacity)),
        ..container::Style::default()
    }
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::notifications::geometry::{self, LayoutMetrics};
    use iced::{Point, Rectangle, Size};

    #[test]
    fn card_padding_matches_wrap_metrics() {
        let metrics = LayoutMetrics {
            text_padding: 3.0,
            ..LayoutMetrics::default()
        };
        let layout = geometry::layout(
            "Priorities synced",
            &ToastStyle::default(),
            &metrics,
            320.0,
            &Rectangle::new(Point::ORIGIN, Size::new(320.0, 64.0)),
            false,
        );

        let padding = card_padding(&layout);
        assert_abs_diff_eq!(padding.left, metrics.text_padding);
        assert_abs_diff_eq!(padding.right, metrics.text_padding);
        assert_abs_diff_eq!(padding.top, 0.0);
    }

    #[test]
    fn container_style_scales_background_alpha() {
        let style = ToastStyle::default();
        let rendered = toast_container_style(&style, 0.5);

        match rendered.background {
            Some(Background::Color(color)) => {
                assert_abs_diff_eq!(color.a, style.background.a * 0.5);
            }
            other => panic!("expected color background, got {other:?}"),
        }
        assert_abs_diff_eq!(rendered.border.radius.top_left, style.corner_radius);
    }

    #[test]
    fn opacity_is_clamped() {
        let color = with_opacity(Color::WHITE, 3.0);
        assert_abs_diff_eq!(color.a, 1.0);
        let color = with_opacity(Color::WHITE, -1.0);
        assert_abs_diff_eq!(color.a, 0.0);
    }
}
