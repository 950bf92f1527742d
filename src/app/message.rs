// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use iced::Size;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The message text field was edited.
    DraftChanged(String),
    PlaceHighToggled(bool),
    /// Post the current draft as a toast.
    Post,
    /// Post several toasts at once to exercise the backlog.
    PostBurst,
    Tick(Instant), // Periodic tick driving fades and timers
    WindowResized(Size),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TONS_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Messages posted as toasts right after startup, in order.
    pub messages: Vec<String>,
}
