// SPDX-License-Identifier: MPL-2.0
//! Collaborators the notifier drives.
//!
//! The notifier never touches a window or a clock directly. A [`Host`] owns
//! the surfaces toasts are attached to and a [`Scheduler`] delivers timed
//! [`Wakeup`]s back to [`Manager::drive`](super::Manager::drive).

use super::geometry::ToastLayout;
use super::lifecycle::{Event, Fade};
use super::notification::{ToastId, ToastStyle};
use iced::Rectangle;
use std::fmt;
use std::time::Duration;

/// A toast as handed to the host for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedToast {
    pub id: ToastId,
    pub style: ToastStyle,
    pub layout: ToastLayout,
}

/// Owner of the surfaces toasts are drawn on.
///
/// `attach` and `detach` are called exactly once each per displayed toast.
/// Surfaces must stay valid from `enqueue` until their toast is detached.
pub trait Host {
    /// Handle identifying one surface (a window, a view, a test fixture).
    type Surface: Clone + fmt::Debug;

    /// Current bounds of `surface`.
    fn bounds(&self, surface: &Self::Surface) -> Rectangle;

    /// Adds `toast` to `surface`, fully transparent.
    fn attach(&mut self, surface: &Self::Surface, toast: &PresentedToast);

    /// Starts an opacity animation on an attached toast.
    fn fade(&mut self, surface: &Self::Surface, id: ToastId, fade: Fade);

    /// Removes a toast from `surface`.
    fn detach(&mut self, surface: &Self::Surface, id: ToastId);
}

/// A lifecycle event addressed to one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wakeup {
    pub toast: ToastId,
    pub event: Event,
}

/// Delivers wake-ups after a delay.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, wakeup: Wakeup);
}
