// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the toast notifier into an iced window.
//!
//! `App` owns a [`Manager`] driving an [`OverlayHost`] and a [`TimerQueue`].
//! Ticks feed due wake-ups back into the manager; the view stacks the
//! attached toast over a few controls for posting messages.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::notifications::{
    Host, MainWindow, Manager, OverlayHost, TimerQueue, ToastMessage, ToastStyle,
};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Messages posted by the "Post burst" button.
const BURST: [&str; 4] = [
    "Added to your schedule",
    "Priorities synced",
    "Reminder set for the keynote",
    "This one is long enough to wrap across several lines of the toast card",
];

/// Root Iced application state.
pub struct App {
    notifier: Manager<OverlayHost, TimerQueue>,
    toast_style: ToastStyle,
    theme_mode: ThemeMode,
    draft: String,
    place_high: bool,
    /// Time of the latest tick, used to sample fade opacity.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.notifier.phase())
            .field("queued", &self.notifier.queued_count())
            .field("draft", &self.draft)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 568;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and posts the startup messages.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = Self::with_config(&config, default_window_size());

        if let Some(warning) = config_warning {
            app.post(warning, false);
        }
        for text in flags.messages {
            app.post(text, false);
        }

        (app, Task::none())
    }

    fn with_config(config: &config::Config, window_size: Size) -> Self {
        let host = OverlayHost::new(window_size);
        Self {
            notifier: Manager::with_settings(
                host,
                TimerQueue::default(),
                config.notifier_settings(),
            ),
            toast_style: config.toast_style(),
            theme_mode: config.general.theme_mode,
            draft: String::new(),
            place_high: false,
            now: Instant::now(),
        }
    }

    /// Posts a toast anchored to the window as it is sized right now.
    fn post(&mut self, text: impl Into<String>, place_high: bool) {
        let message = ToastMessage::with_style(text, self.toast_style);
        let placement = self.notifier.host().bounds(&MainWindow);
        let outcome = self
            .notifier
            .enqueue(message, MainWindow, Some(placement), place_high);
        log::debug!("posted toast: {outcome:?}");
    }

    fn title(&self) -> String {
        match self.notifier.queued_count() {
            0 => "Tons Toast".to_string(),
            queued => format!("Tons Toast ({queued} queued)"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifier.has_toasts()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DraftChanged(draft) => self.draft = draft,
            Message::PlaceHighToggled(place_high) => self.place_high = place_high,
            Message::Post => {
                let text = std::mem::take(&mut self.draft);
                self.post(text, self.place_high);
            }
            Message::PostBurst => {
                for text in BURST {
                    self.post(text, self.place_high);
                }
            }
            Message::Tick(now) => self.tick(now),
            Message::WindowResized(size) => self.notifier.host_mut().resize(size),
        }
        Task::none()
    }

    fn tick(&mut self, now: Instant) {
        self.now = now;
        let due = self.notifier.scheduler_mut().take_due(now);
        for wakeup in due {
            self.notifier.drive(wakeup);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            draft: &self.draft,
            place_high: self.place_high,
            phase: self.notifier.phase(),
            queued: self.notifier.queued_count(),
            host: self.notifier.host(),
            now: self.now,
        })
    }
}
