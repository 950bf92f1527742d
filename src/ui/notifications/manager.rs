// SPDX-License-Identifier: MPL-2.0
//! Toast queueing and lifecycle management.
//!
//! The `Manager` shows at most one toast at a time. Messages posted while a
//! toast is on screen wait in a FIFO backlog and are shown, one after the
//! other, as each predecessor fades out. All mutation goes through `&mut self`;
//! callers on other threads hand their messages to the UI thread first.

use super::geometry::{self, LayoutMetrics};
use super::host::{Host, PresentedToast, Scheduler, Wakeup};
use super::lifecycle::{self, Effect, Event, Phase, Timing};
use super::notification::{ToastId, ToastMessage};
use iced::Rectangle;
use std::collections::VecDeque;

/// Tunables applied to every toast the manager starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub timing: Timing,
    pub metrics: LayoutMetrics,
}

/// Outcome of [`Manager::enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueued {
    /// Empty text; nothing happened.
    Ignored,
    /// Display started immediately.
    Showing(ToastId),
    /// Waiting behind the current toast. `position` is 1-based.
    Queued { id: ToastId, position: usize },
}

#[derive(Debug)]
struct Pending<S> {
    message: ToastMessage,
    surface: S,
    placement: Rectangle,
}

#[derive(Debug)]
struct Showing<S> {
    toast: PresentedToast,
    surface: S,
    phase: Phase,
}

/// Owns the toast backlog and the single display slot.
#[derive(Debug)]
pub struct Manager<H: Host, C: Scheduler> {
    host: H,
    scheduler: C,
    settings: Settings,
    /// Messages waiting for the display slot, oldest first.
    queue: VecDeque<Pending<H::Surface>>,
    /// The toast in the display slot, if any.
    showing: Option<Showing<H::Surface>>,
    /// Placement resolved by the most recent enqueue.
    last_placement: Option<Rectangle>,
}

impl<H: Host, C: Scheduler> Manager<H, C> {
    /// Creates an idle manager with default timing and text metrics.
    pub fn new(host: H, scheduler: C) -> Self {
        Self::with_settings(host, scheduler, Settings::default())
    }

    pub fn with_settings(host: H, scheduler: C, settings: Settings) -> Self {
        Self {
            host,
            scheduler,
            settings,
            queue: VecDeque::new(),
            showing: None,
            last_placement: None,
        }
    }

    /// Posts a message.
    ///
    /// Without an explicit `placement` the last resolved placement is reused,
    /// falling back to the bounds of `surface`. If the display slot is free
    /// the toast starts fading in right away, pinned to the top of the surface
    /// when `place_high` is set. Otherwise it joins the backlog, and will be
    /// shown anchored to its placement whatever `place_high` said.
    pub fn enqueue(
        &mut self,
        message: ToastMessage,
        surface: H::Surface,
        placement: Option<Rectangle>,
        place_high: bool,
    ) -> Enqueued {
        if message.is_empty() {
            log::debug!("ignoring toast with empty text");
            return Enqueued::Ignored;
        }

        let placement = placement
            .or(self.last_placement)
            .unwrap_or_else(|| self.host.bounds(&surface));
        self.last_placement = Some(placement);

        let id = message.id();
        let pending = Pending {
            message,
            surface,
            placement,
        };

        if self.showing.is_none() {
            self.start(pending, place_high);
            Enqueued::Showing(id)
        } else {
            self.queue.push_back(pending);
            let position = self.queue.len();
            log::debug!("toast {id:?} queued at position {position}");
            Enqueued::Queued { id, position }
        }
    }

    /// Feeds a scheduled wake-up back into the lifecycle.
    ///
    /// Wake-ups for a toast that is no longer in the display slot are dropped.
    pub fn drive(&mut self, wakeup: Wakeup) {
        let current = self.showing.as_ref().map(|s| s.toast.id);
        if current == Some(wakeup.toast) {
            self.step(wakeup.event);
        } else {
            log::debug!("dropping stale wake-up {wakeup:?}");
        }
    }

    /// Current lifecycle phase of the display slot.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.showing.as_ref().map_or(Phase::Idle, |s| s.phase)
    }

    /// The toast in the display slot.
    #[must_use]
    pub fn current(&self) -> Option<&PresentedToast> {
        self.showing.as_ref().map(|s| &s.toast)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether a toast is showing or waiting.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.showing.is_some() || !self.queue.is_empty()
    }

    #[must_use]
    pub fn last_placement(&self) -> Option<Rectangle> {
        self.last_placement
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings. A toast already on screen keeps its layout;
    /// its remaining timers use the new timing.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut C {
        &mut self.scheduler
    }

    /// Lays out `pending` and moves it into the display slot.
    fn start(&mut self, pending: Pending<H::Surface>, place_high: bool) {
        let bounds = self.host.bounds(&pending.surface);
        let style = *pending.message.style();
        let layout = geometry::layout(
            pending.message.text(),
            &style,
            &self.settings.metrics,
            bounds.width,
            &pending.placement,
            place_high,
        );

        self.showing = Some(Showing {
            toast: PresentedToast {
                id: pending.message.id(),
                style,
                layout,
            },
            surface: pending.surface,
            phase: Phase::Idle,
        });
        self.step(Event::Start);
    }

    fn step(&mut self, event: Event) {
        let Some((id, phase)) = self.showing.as_ref().map(|s| (s.toast.id, s.phase)) else {
            return;
        };
        let Some(step) = lifecycle::transition(phase, event, &self.settings.timing) else {
            log::debug!("toast {id:?}: ignoring {event:?} while {phase:?}");
            return;
        };

        log::debug!("toast {id:?}: {phase:?} -> {:?}", step.phase);
        if let Some(showing) = self.showing.as_mut() {
            showing.phase = step.phase;
        }

        for effect in step.effects {
            self.apply(id, effect);
        }
    }

    fn apply(&mut self, id: ToastId, effect: Effect) {
        match effect {
            Effect::Attach => {
                if let Some(showing) = &self.showing {
                    self.host.attach(&showing.surface, &showing.toast);
                }
            }
            Effect::Fade(fade) => {
                if let Some(showing) = &self.showing {
                    self.host.fade(&showing.surface, id, fade);
                }
            }
            Effect::Schedule { delay, event } => {
                self.scheduler.schedule(delay, Wakeup { toast: id, event });
            }
            Effect::Detach => {
                if let Some(showing) = &self.showing {
                    self.host.detach(&showing.surface, id);
                }
            }
            Effect::Advance => {
                self.showing = None;
                if let Some(next) = self.queue.pop_front() {
                    self.start(next, false);
                }
            }
        }
    }
}
