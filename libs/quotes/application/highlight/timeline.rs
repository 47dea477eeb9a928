//! Per-cell highlight state machine
//!
//! ```text
//! Idle ──trigger──▶ Attacking ──attack elapsed──▶ Decaying ──decay elapsed──▶ Idle
//!                      ▲                              │
//!                      └───────────trigger────────────┘
//! ```
//!
//! Attack ramps linearly from the phase at trigger time to ±1, decay ramps
//! linearly from ±1 back to 0. A trigger during either stage restarts the
//! attack from the current phase.

use crate::domain::Direction;
use std::time::{Duration, Instant};

/// Durations of the two stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub attack: Duration,
    pub decay: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            attack: Duration::from_millis(500),
            decay: Duration::from_millis(2000),
        }
    }
}

impl AnimationTiming {
    pub fn new(attack: Duration, decay: Duration) -> Self {
        Self { attack, decay }
    }

    pub fn total(&self) -> Duration {
        self.attack + self.decay
    }
}

/// Current stage of a timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Idle,
    Attacking {
        from: f64,
        target: f64,
        started: Instant,
    },
    Decaying {
        from: f64,
        started: Instant,
    },
}

/// One cell's animation
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    stage: Stage,
    /// Value that started the running animation
    pending_value: Option<f64>,
    /// Value of the last animation that ran to completion
    settled_value: Option<f64>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            pending_value: None,
            settled_value: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.stage, Stage::Idle)
    }

    pub fn settled_value(&self) -> Option<f64> {
        self.settled_value
    }

    /// Start (or supersede) an animation towards `direction`
    ///
    /// `Unchanged` leaves the timeline alone.
    pub fn trigger(
        &mut self,
        direction: Direction,
        value: Option<f64>,
        now: Instant,
        timing: &AnimationTiming,
    ) {
        if !direction.is_change() {
            return;
        }

        let from = self.phase(now, timing);
        self.stage = Stage::Attacking {
            from,
            target: direction.signed_magnitude(),
            started: now,
        };
        self.pending_value = value;
    }

    /// Phase value at `now`, in [-1, 1]
    ///
    /// Pure with respect to the stored stage, so it may be called at any
    /// frame rate between `advance` calls.
    pub fn phase(&self, now: Instant, timing: &AnimationTiming) -> f64 {
        match self.stage {
            Stage::Idle => 0.0,
            Stage::Attacking {
                from,
                target,
                started,
            } => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed < timing.attack {
                    lerp(from, target, progress(elapsed, timing.attack))
                } else {
                    decay_phase(target, elapsed - timing.attack, timing.decay)
                }
            }
            Stage::Decaying { from, started } => {
                decay_phase(from, now.saturating_duration_since(started), timing.decay)
            }
        }
    }

    /// Move through finished stages
    ///
    /// Returns `true` when the timeline reached `Idle` during this call.
    pub fn advance(&mut self, now: Instant, timing: &AnimationTiming) -> bool {
        if let Stage::Attacking {
            target, started, ..
        } = self.stage
        {
            if now.saturating_duration_since(started) >= timing.attack {
                self.stage = Stage::Decaying {
                    from: target,
                    started: started + timing.attack,
                };
            }
        }

        if let Stage::Decaying { started, .. } = self.stage {
            if now.saturating_duration_since(started) >= timing.decay {
                self.stage = Stage::Idle;
                if let Some(value) = self.pending_value.take() {
                    self.settled_value = Some(value);
                }
                return true;
            }
        }

        false
    }
}

fn decay_phase(from: f64, elapsed: Duration, decay: Duration) -> f64 {
    if elapsed >= decay {
        0.0
    } else {
        lerp(from, 0.0, progress(elapsed, decay))
    }
}

fn progress(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_is_zero() {
        let timeline = Timeline::new();
        assert_eq!(timeline.phase(Instant::now(), &AnimationTiming::default()), 0.0);
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_attack_then_decay() {
        let timing = AnimationTiming::default();
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.trigger(Direction::Up, Some(105.0), t0, &timing);

        assert!((timeline.phase(t0, &timing) - 0.0).abs() < EPS);
        assert!((timeline.phase(t0 + ms(250), &timing) - 0.5).abs() < EPS);
        assert!((timeline.phase(t0 + ms(500), &timing) - 1.0).abs() < EPS);
        assert!((timeline.phase(t0 + ms(1500), &timing) - 0.5).abs() < EPS);
        assert_eq!(timeline.phase(t0 + ms(2500), &timing), 0.0);
    }

    #[test]
    fn test_down_is_negative() {
        let timing = AnimationTiming::default();
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.trigger(Direction::Down, None, t0, &timing);
        assert!((timeline.phase(t0 + ms(500), &timing) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_unchanged_does_not_trigger() {
        let timing = AnimationTiming::default();
        let mut timeline = Timeline::new();
        timeline.trigger(Direction::Unchanged, Some(1.0), Instant::now(), &timing);
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_supersede_starts_from_current_phase() {
        let timing = AnimationTiming::default();
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.trigger(Direction::Up, Some(1.0), t0, &timing);

        // Halfway through decay the phase is 0.5; reverse direction
        let t1 = t0 + ms(1500);
        timeline.trigger(Direction::Down, Some(0.5), t1, &timing);

        match timeline.stage() {
            Stage::Attacking { from, target, .. } => {
                assert!((from - 0.5).abs() < EPS);
                assert_eq!(target, -1.0);
            }
            other => panic!("expected attacking, got {:?}", other),
        }
        assert!((timeline.phase(t1 + ms(250), &timing) - (-0.25)).abs() < EPS);
        assert!((timeline.phase(t1 + ms(500), &timing) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_advance_transitions_and_settles() {
        let timing = AnimationTiming::default();
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.trigger(Direction::Up, Some(105.0), t0, &timing);

        assert!(!timeline.advance(t0 + ms(100), &timing));
        assert!(matches!(timeline.stage(), Stage::Attacking { .. }));

        assert!(!timeline.advance(t0 + ms(600), &timing));
        assert!(matches!(timeline.stage(), Stage::Decaying { .. }));
        assert_eq!(timeline.settled_value(), None);

        assert!(timeline.advance(t0 + ms(2500), &timing));
        assert!(timeline.is_idle());
        assert_eq!(timeline.settled_value(), Some(105.0));
    }

    #[test]
    fn test_advance_skips_whole_animation() {
        let timing = AnimationTiming::default();
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.trigger(Direction::Down, Some(7.0), t0, &timing);

        assert!(timeline.advance(t0 + ms(10_000), &timing));
        assert!(timeline.is_idle());
        assert_eq!(timeline.settled_value(), Some(7.0));
    }

    #[test]
    fn test_superseded_value_never_settles() {
        let timing = AnimationTiming::default();
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.trigger(Direction::Up, Some(1.0), t0, &timing);
        timeline.trigger(Direction::Up, Some(2.0), t0 + ms(300), &timing);

        timeline.advance(t0 + ms(5000), &timing);
        assert_eq!(timeline.settled_value(), Some(2.0));
    }
}
