// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo window.
//!
//! The controls sit in a centered column; the toast overlay is stacked on top
//! so it can be positioned anywhere inside the window.

use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{OverlayHost, Phase, Toast};
use iced::{
    alignment::Vertical,
    widget::{button, checkbox, text_input, Column, Container, Row, Stack, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub draft: &'a str,
    pub place_high: bool,
    pub phase: Phase,
    pub queued: usize,
    pub host: &'a OverlayHost,
    pub now: Instant,
}

/// Renders the controls with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("Toast notifier").size(typography::TITLE_MD);

    let input = text_input("Message to post", ctx.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::Post)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let place_high = checkbox(ctx.place_high)
        .label("Pin to the top")
        .on_toggle(Message::PlaceHighToggled);

    let buttons = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("Post"))
                .on_press(Message::Post)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT)),
        )
        .push(
            button(Text::new("Post burst"))
                .on_press(Message::PostBurst)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT)),
        );

    let status = Text::new(status_line(ctx.phase, ctx.queued)).size(typography::BODY);

    let controls = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(title)
        .push(input)
        .push(place_high)
        .push(buttons)
        .push(status);

    let content = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill);

    Stack::new()
        .push(content)
        .push(Toast::view_overlay(ctx.host, ctx.now))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Human readable summary of the notifier state.
pub fn status_line(phase: Phase, queued: usize) -> String {
    let phase = match phase {
        Phase::Idle => "idle",
        Phase::FadingIn => "fading in",
        Phase::Holding => "holding",
        Phase::FadingOut => "fading out",
    };
    format!("Phase: {phase} | Queued: {queued}")
}
