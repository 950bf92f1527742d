// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Short status messages ("Added to your schedule", "Priorities synced") are
//! shown one at a time over a host surface. Each toast fades in, holds for a
//! few seconds, fades out and makes room for the next queued message.
//!
//! # Components
//!
//! - [`notification`] - `ToastMessage`, `ToastStyle` and `ToastId`
//! - [`lifecycle`] - Pure `Idle -> FadingIn -> Holding -> FadingOut` state machine
//! - [`geometry`] - Frame placement and long-text wrapping
//! - [`host`] - `Host` and `Scheduler` traits the manager drives
//! - `manager` - `Manager` owning the FIFO backlog and the display slot
//! - [`overlay`] - Iced window host and tick-driven timer queue
//! - `toast` - Toast widget rendering the attached notification
//!
//! # Usage
//!
//! ```
//! use iced::Size;
//! use tons_toast::ui::notifications::{Manager, MainWindow, OverlayHost, TimerQueue, ToastMessage};
//!
//! let host = OverlayHost::new(Size::new(320.0, 568.0));
//! let mut manager = Manager::new(host, TimerQueue::default());
//!
//! manager.enqueue(ToastMessage::new("Added to your schedule"), MainWindow, None, false);
//! assert!(manager.has_toasts());
//!
//! // On every tick, feed due timers back in:
//! // for wakeup in manager.scheduler_mut().take_due(now) { manager.drive(wakeup); }
//! ```

pub mod geometry;
pub mod host;
pub mod lifecycle;
mod manager;
pub mod notification;
pub mod overlay;
mod toast;

#[cfg(test)]
pub(crate) mod testing;

pub use geometry::{LayoutMetrics, ToastLayout};
pub use host::{Host, PresentedToast, Scheduler, Wakeup};
pub use lifecycle::{Phase, Timing};
pub use manager::{Enqueued, Manager, Settings};
pub use notification::{ToastId, ToastMessage, ToastStyle};
pub use overlay::{MainWindow, OverlayHost, TimerQueue};
pub use toast::Toast;
