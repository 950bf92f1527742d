// SPDX-License-Identifier: MPL-2.0
//! Window-backed [`Host`] and tick-driven [`Scheduler`].
//!
//! `OverlayHost` keeps the attached toast and its running fade so the view can
//! compute the current opacity on every frame. `TimerQueue` stores deadlines
//! that the application drains from its periodic `Tick` message.

use super::host::{Host, PresentedToast, Scheduler, Wakeup};
use super::lifecycle::Fade;
use super::notification::ToastId;
use iced::{Point, Rectangle, Size};
use std::time::{Duration, Instant};

/// The application's main window, the only surface of an [`OverlayHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MainWindow;

#[derive(Debug, Clone)]
struct Attached {
    toast: PresentedToast,
    fade: Fade,
    fade_started: Instant,
}

/// Draws toasts over the main window.
#[derive(Debug)]
pub struct OverlayHost {
    size: Size,
    attached: Option<Attached>,
}

impl OverlayHost {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            attached: None,
        }
    }

    /// Records a new window size. An attached toast keeps its frame.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn attached(&self) -> Option<&PresentedToast> {
        self.attached.as_ref().map(|a| &a.toast)
    }

    /// Opacity of the attached toast at `now`; zero when nothing is attached.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        self.attached.as_ref().map_or(0.0, |a| {
            a.fade
                .opacity_at(now.saturating_duration_since(a.fade_started))
        })
    }
}

impl Host for OverlayHost {
    type Surface = MainWindow;

    fn bounds(&self, _surface: &MainWindow) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.size)
    }

    fn attach(&mut self, _surface: &MainWindow, toast: &PresentedToast) {
        if let Some(previous) = &self.attached {
            log::warn!(
                "attaching toast {:?} over {:?}, which was never detached",
                toast.id,
                previous.toast.id
            );
        }
        self.attached = Some(Attached {
            toast: toast.clone(),
            fade: Fade::fade_out(Duration::ZERO),
            fade_started: Instant::now(),
        });
    }

    fn fade(&mut self, _surface: &MainWindow, id: ToastId, fade: Fade) {
        match self.attached.as_mut() {
            Some(attached) if attached.toast.id == id => {
                attached.fade = fade;
                attached.fade_started = Instant::now();
            }
            _ => log::debug!("fade requested for unattached toast {id:?}"),
        }
    }

    fn detach(&mut self, _surface: &MainWindow, id: ToastId) {
        if self.attached.as_ref().is_some_and(|a| a.toast.id == id) {
            self.attached = None;
        }
    }
}

/// Pending wake-ups ordered by deadline.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(Instant, Wakeup)>,
}

impl TimerQueue {
    /// Removes and returns every wake-up due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Wakeup> {
        let split = self.pending.partition_point(|(deadline, _)| *deadline <= now);
        self.pending
            .drain(..split)
            .map(|(_, wakeup)| wakeup)
            .collect()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn insert(&mut self, deadline: Instant, wakeup: Wakeup) {
        // Equal deadlines keep insertion order.
        let index = self.pending.partition_point(|(d, _)| *d <= deadline);
        self.pending.insert(index, (deadline, wakeup));
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) {
        self.insert(Instant::now() + delay, wakeup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::notifications::geometry::ToastLayout;
    use crate::ui::notifications::lifecycle::Event;
    use crate::ui::notifications::notification::ToastStyle;

    fn presented(id: ToastId) -> PresentedToast {
        PresentedToast {
            id,
            style: ToastStyle::default(),
            layout: ToastLayout {
                frame: Rectangle::new(Point::new(20.0, 0.0), Size::new(280.0, 35.0)),
                lines: vec!["Saved".to_owned()],
                multiline: false,
                text_padding: 8.0,
            },
        }
    }

    fn wakeup(event: Event) -> Wakeup {
        Wakeup {
            toast: ToastId::new(),
            event,
        }
    }

    #[test]
    fn bounds_follow_window_size() {
        let mut host = OverlayHost::new(Size::new(800.0, 600.0));
        host.resize(Size::new(1024.0, 768.0));
        assert_eq!(
            host.bounds(&MainWindow),
            Rectangle::new(Point::ORIGIN, Size::new(1024.0, 768.0))
        );
    }

    #[test]
    fn attached_toast_starts_transparent() {
        let mut host = OverlayHost::new(Size::new(320.0, 568.0));
        let id = ToastId::new();
        host.attach(&MainWindow, &presented(id));

        assert_eq!(host.attached().map(|t| t.id), Some(id));
        assert_abs_diff_eq!(host.opacity_at(Instant::now()), 0.0);
    }

    #[test]
    fn fade_in_reaches_full_opacity() {
        let mut host = OverlayHost::new(Size::new(320.0, 568.0));
        let id = ToastId::new();
        host.attach(&MainWindow, &presented(id));
        host.fade(&MainWindow, id, Fade::fade_in(Duration::from_millis(130)));

        let later = Instant::now() + Duration::from_secs(1);
        assert_abs_diff_eq!(host.opacity_at(later), 1.0);
    }

    #[test]
    fn fade_for_other_toast_is_ignored() {
        let mut host = OverlayHost::new(Size::new(320.0, 568.0));
        host.attach(&MainWindow, &presented(ToastId::new()));
        host.fade(&MainWindow, ToastId::new(), Fade::fade_in(Duration::ZERO));

        assert_abs_diff_eq!(host.opacity_at(Instant::now() + Duration::from_secs(1)), 0.0);
    }

    #[test]
    fn detach_clears_only_matching_toast() {
        let mut host = OverlayHost::new(Size::new(320.0, 568.0));
        let id = ToastId::new();
        host.attach(&MainWindow, &presented(id));

        host.detach(&MainWindow, ToastId::new());
        assert!(host.attached().is_some());

        host.detach(&MainWindow, id);
        assert!(host.attached().is_none());
        assert_abs_diff_eq!(host.opacity_at(Instant::now()), 0.0);
    }

    #[test]
    fn timer_queue_returns_only_due_wakeups() {
        let mut timers = TimerQueue::default();
        let soon = wakeup(Event::FadeInFinished);
        let late = wakeup(Event::HoldElapsed);
        timers.schedule(Duration::from_secs(60), late);
        timers.schedule(Duration::from_millis(10), soon);

        let now = Instant::now() + Duration::from_secs(1);
        assert_eq!(timers.take_due(now), vec![soon]);
        assert!(!timers.is_empty());

        let much_later = Instant::now() + Duration::from_secs(120);
        assert_eq!(timers.take_due(much_later), vec![late]);
        assert!(timers.is_empty());
    }

    #[test]
    fn timer_queue_orders_by_deadline() {
        let mut timers = TimerQueue::default();
        let a = wakeup(Event::HoldElapsed);
        let b = wakeup(Event::FadeInFinished);
        timers.schedule(Duration::from_secs(3), a);
        timers.schedule(Duration::from_millis(130), b);

        assert!(timers.next_deadline().is_some());
        let due = timers.take_due(Instant::now() + Duration::from_secs(10));
        assert_eq!(due, vec![b, a]);
    }
}
