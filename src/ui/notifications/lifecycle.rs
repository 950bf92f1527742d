// SPDX-License-Identifier: MPL-2.0
//! Display lifecycle of a single toast.
//!
//! A toast moves through `Idle -> FadingIn -> Holding -> FadingOut -> Idle`.
//! [`transition`] is a pure function from the current phase and an event to
//! the next phase plus the effects the notifier must carry out. It knows
//! nothing about surfaces or clocks, so every path can be tested directly.

use std::time::Duration;

/// Lifecycle phase of the notifier's display slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing on screen.
    #[default]
    Idle,
    /// Opacity animating 0 → 1.
    FadingIn,
    /// Fully visible, waiting for the hold timer.
    Holding,
    /// Opacity animating 1 → 0.
    FadingOut,
}

impl Phase {
    /// Returns `true` while a toast occupies the display slot.
    #[must_use]
    pub fn is_showing(self) -> bool {
        self != Phase::Idle
    }
}

/// Inputs that advance the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A message was taken for display.
    Start,
    FadeInFinished,
    HoldElapsed,
    FadeOutFinished,
}

/// An opacity animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

impl Fade {
    #[must_use]
    pub fn fade_in(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration,
        }
    }

    #[must_use]
    pub fn fade_out(duration: Duration) -> Self {
        Self {
            from: 1.0,
            to: 0.0,
            duration,
        }
    }

    /// Opacity after `elapsed` has passed since the animation started.
    #[must_use]
    pub fn opacity_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * progress
    }
}

/// Side effects requested by a transition, in execution order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Add the toast to its host surface.
    Attach,
    /// Start an opacity animation on the attached toast.
    Fade(Fade),
    /// Deliver `event` back to the notifier after `delay`.
    Schedule { delay: Duration, event: Event },
    /// Remove the toast from its host surface.
    Detach,
    /// Release the display slot and start the next queued message, if any.
    Advance,
}

/// Animation and hold durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub fade: Duration,
    pub hold: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(130),
            hold: Duration::from_secs(3),
        }
    }
}

/// Result of a valid transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub phase: Phase,
    pub effects: Vec<Effect>,
}

/// Advances the lifecycle.
///
/// Returns `None` when `event` has no meaning in `phase`; the caller leaves
/// its state untouched in that case.
#[must_use]
pub fn transition(phase: Phase, event: Event, timing: &Timing) -> Option<Step> {
    let step = match (phase, event) {
        (Phase::Idle, Event::Start) => Step {
            phase: Phase::FadingIn,
            effects: vec![
                Effect::Attach,
                Effect::Fade(Fade::fade_in(timing.fade)),
                Effect::Schedule {
                    delay: timing.fade,
                    event: Event::FadeInFinished,
                },
            ],
        },
        (Phase::FadingIn, Event::FadeInFinished) => Step {
            phase: Phase::Holding,
            effects: vec![Effect::Schedule {
                delay: timing.hold,
                event: Event::HoldElapsed,
            }],
        },
        (Phase::Holding, Event::HoldElapsed) => Step {
            phase: Phase::FadingOut,
            effects: vec![
                Effect::Fade(Fade::fade_out(timing.fade)),
                Effect::Schedule {
                    delay: timing.fade,
                    event: Event::FadeOutFinished,
                },
            ],
        },
        (Phase::FadingOut, Event::FadeOutFinished) => Step {
            phase: Phase::Idle,
            effects: vec![Effect::Detach, Effect::Advance],
        },
        _ => return None,
    };

    Some(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn start_attaches_and_fades_in() {
        let timing = Timing::default();
        let step = transition(Phase::Idle, Event::Start, &timing).expect("valid transition");

        assert_eq!(step.phase, Phase::FadingIn);
        assert_eq!(
            step.effects,
            vec![
                Effect::Attach,
                Effect::Fade(Fade::fade_in(Duration::from_millis(130))),
                Effect::Schedule {
                    delay: Duration::from_millis(130),
                    event: Event::FadeInFinished,
                },
            ]
        );
    }

    #[test]
    fn full_cycle_visits_every_phase_once() {
        let timing = Timing::default();
        let events = [
            Event::Start,
            Event::FadeInFinished,
            Event::HoldElapsed,
            Event::FadeOutFinished,
        ];

        let mut phase = Phase::Idle;
        let mut visited = Vec::new();
        for event in events {
            phase = transition(phase, event, &timing)
                .expect("cycle event should apply")
                .phase;
            visited.push(phase);
        }

        assert_eq!(
            visited,
            vec![
                Phase::FadingIn,
                Phase::Holding,
                Phase::FadingOut,
                Phase::Idle
            ]
        );
    }

    #[test]
    fn hold_uses_configured_duration() {
        let timing = Timing {
            fade: Duration::from_millis(50),
            hold: Duration::from_secs(7),
        };
        let step = transition(Phase::FadingIn, Event::FadeInFinished, &timing).unwrap();
        assert_eq!(
            step.effects,
            vec![Effect::Schedule {
                delay: Duration::from_secs(7),
                event: Event::HoldElapsed,
            }]
        );
    }

    #[test]
    fn fade_out_ends_with_detach_then_advance() {
        let step = transition(Phase::FadingOut, Event::FadeOutFinished, &Timing::default()).unwrap();
        assert_eq!(step.phase, Phase::Idle);
        assert_eq!(step.effects, vec![Effect::Detach, Effect::Advance]);
    }

    #[test]
    fn out_of_order_events_are_rejected() {
        let timing = Timing::default();
        assert!(transition(Phase::Idle, Event::HoldElapsed, &timing).is_none());
        assert!(transition(Phase::FadingIn, Event::Start, &timing).is_none());
        assert!(transition(Phase::Holding, Event::FadeInFinished, &timing).is_none());
        assert!(transition(Phase::FadingOut, Event::HoldElapsed, &timing).is_none());
    }

    #[test]
    fn fade_interpolates_and_clamps() {
        let fade = Fade::fade_in(Duration::from_millis(100));
        assert_abs_diff_eq!(fade.opacity_at(Duration::ZERO), 0.0);
        assert_abs_diff_eq!(fade.opacity_at(Duration::from_millis(50)), 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(fade.opacity_at(Duration::from_millis(500)), 1.0);

        let out = Fade::fade_out(Duration::from_millis(100));
        assert_abs_diff_eq!(out.opacity_at(Duration::from_millis(25)), 0.75, epsilon = 1e-4);
    }

    #[test]
    fn only_idle_is_not_showing() {
        assert!(!Phase::Idle.is_showing());
        assert!(Phase::FadingIn.is_showing());
        assert!(Phase::Holding.is_showing());
        assert!(Phase::FadingOut.is_showing());
    }
}
