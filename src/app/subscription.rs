// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval between animation ticks while a toast is on screen or queued.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Forwards window resizes so the overlay host keeps accurate bounds.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Creates a periodic tick subscription for toast fades and timers.
///
/// Ticks only run while the notifier has work, so an idle window stays idle.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
