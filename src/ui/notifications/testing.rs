// SPDX-License-Identifier: MPL-2.0
//! In-memory host and scheduler for notifier tests.

use super::host::{Host, PresentedToast, Scheduler, Wakeup};
use super::lifecycle::Fade;
use super::notification::ToastId;
use iced::{Point, Rectangle, Size};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Attach {
        surface: &'static str,
        toast: ToastId,
        frame: Rectangle,
    },
    Fade {
        surface: &'static str,
        toast: ToastId,
        fade: Fade,
    },
    Detach {
        surface: &'static str,
        toast: ToastId,
    },
}

/// Records every call; all surfaces share the same bounds.
#[derive(Debug)]
pub struct RecordingHost {
    pub bounds: Rectangle,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(width, height)),
            calls: Vec::new(),
        }
    }

    /// IDs of attached toasts, in attach order.
    pub fn attached(&self) -> Vec<ToastId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Attach { toast, .. } => Some(*toast),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    type Surface = &'static str;

    fn bounds(&self, _surface: &Self::Surface) -> Rectangle {
        self.bounds
    }

    fn attach(&mut self, surface: &Self::Surface, toast: &PresentedToast) {
        self.calls.push(HostCall::Attach {
            surface: *surface,
            toast: toast.id,
            frame: toast.layout.frame,
        });
    }

    fn fade(&mut self, surface: &Self::Surface, id: ToastId, fade: Fade) {
        self.calls.push(HostCall::Fade {
            surface: *surface,
            toast: id,
            fade,
        });
    }

    fn detach(&mut self, surface: &Self::Surface, id: ToastId) {
        self.calls.push(HostCall::Detach {
            surface: *surface,
            toast: id,
        });
    }
}

/// Holds wake-ups until a test fires them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: VecDeque<(Duration, Wakeup)>,
}

impl ManualScheduler {
    pub fn pop(&mut self) -> Option<(Duration, Wakeup)> {
        self.pending.pop_front()
    }

    pub fn peek(&self) -> Option<&(Duration, Wakeup)> {
        self.pending.front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) {
        self.pending.push_back((delay, wakeup));
    }
}
