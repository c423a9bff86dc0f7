//! Time-based tweens and the per-element motion state machine.
//!
//! An element is `Idle` at rest, `Entering` while it fades in after mount,
//! `Active` while moving between targets, and `Exiting` while fading out.
//! Timestamps are animation-frame milliseconds; a tween starts on the
//! first frame that samples it.

use crate::motion::easing::Easing;
use crate::motion::transform::VisualTransform;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: VisualTransform,
    to: VisualTransform,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

impl Tween {
    pub fn new(from: VisualTransform, to: VisualTransform, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            started_at: None,
        }
    }

    pub fn target(&self) -> VisualTransform {
        self.to
    }

    /// Value at `now` and whether the tween has finished.
    pub fn sample(&mut self, now: f64) -> (VisualTransform, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = ((now - started_at) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp(&self.to, self.easing.apply(t)), false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    Active,
    Exiting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionState {
    phase: Phase,
    current: VisualTransform,
    tween: Option<Tween>,
}

impl MotionState {
    pub fn at_rest(transform: VisualTransform) -> Self {
        Self {
            phase: Phase::Idle,
            current: transform,
            tween: None,
        }
    }

    /// Starts invisible at `target` and fades in.
    pub fn entering(target: VisualTransform, duration_ms: f64, easing: Easing) -> Self {
        let hidden = target.with_opacity(0.0);
        Self {
            phase: Phase::Entering,
            current: hidden,
            tween: Some(Tween::new(hidden, target, duration_ms, easing)),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> VisualTransform {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Heads for `target` from wherever the element is right now.
    pub fn retarget(&mut self, target: VisualTransform, duration_ms: f64, easing: Easing) {
        let heading = self.tween.as_ref().map(Tween::target).unwrap_or(self.current);
        if heading == target {
            return;
        }
        self.tween = Some(Tween::new(self.current, target, duration_ms, easing));
        if self.phase != Phase::Entering {
            self.phase = Phase::Active;
        }
    }

    /// Jumps without animating.
    pub fn snap(&mut self, target: VisualTransform) {
        self.current = target;
        self.tween = None;
        self.phase = Phase::Idle;
    }

    pub fn exit(&mut self, duration_ms: f64, easing: Easing) {
        let hidden = self.current.with_opacity(0.0);
        self.tween = Some(Tween::new(self.current, hidden, duration_ms, easing));
        self.phase = Phase::Exiting;
    }

    pub fn tick(&mut self, now: f64) -> VisualTransform {
        if let Some(tween) = self.tween.as_mut() {
            let (value, done) = tween.sample(now);
            self.current = value;
            if done {
                self.tween = None;
                self.phase = Phase::Idle;
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: VisualTransform = VisualTransform::new(0.0, 0.0, 1.0, 0.0, 1.0);
    const B: VisualTransform = VisualTransform::new(100.0, -40.0, 0.8, 3.0, 1.0);
    const C: VisualTransform = VisualTransform::new(-60.0, 20.0, 0.9, -2.0, 1.0);

    #[test]
    fn tween_starts_on_first_sample() {
        let mut tween = Tween::new(A, B, 800.0, Easing::Linear);
        assert_eq!(tween.sample(5_000.0), (A, false));
        let (mid, done) = tween.sample(5_400.0);
        assert!(!done);
        assert!((mid.x - 50.0).abs() < 1e-9);
        assert_eq!(tween.sample(5_800.0), (B, true));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tween = Tween::new(A, B, 0.0, Easing::OutCubic);
        assert_eq!(tween.sample(1.0), (B, true));
    }

    #[test]
    fn enter_then_rest() {
        let mut motion = MotionState::entering(B, 800.0, Easing::OutCubic);
        assert_eq!(motion.phase(), Phase::Entering);
        assert_eq!(motion.tick(0.0).opacity, 0.0);
        motion.tick(400.0);
        assert_eq!(motion.phase(), Phase::Entering);
        assert_eq!(motion.tick(800.0), B);
        assert_eq!(motion.phase(), Phase::Idle);
        assert!(!motion.is_animating());
    }

    #[test]
    fn retarget_mid_flight_continues_from_current_sample() {
        let mut motion = MotionState::at_rest(A);
        motion.retarget(B, 800.0, Easing::Linear);
        assert_eq!(motion.phase(), Phase::Active);
        motion.tick(0.0);
        let halfway = motion.tick(400.0);

        motion.retarget(C, 800.0, Easing::Linear);
        assert_eq!(motion.tick(1_000.0), halfway);
        assert_eq!(motion.tick(1_800.0), C);
        assert_eq!(motion.phase(), Phase::Idle);
    }

    #[test]
    fn retarget_to_same_destination_is_ignored() {
        let mut motion = MotionState::at_rest(A);
        motion.retarget(A, 800.0, Easing::Linear);
        assert_eq!(motion.phase(), Phase::Idle);
        assert!(!motion.is_animating());

        motion.retarget(B, 800.0, Easing::Linear);
        motion.tick(0.0);
        motion.tick(200.0);
        let before = motion.clone();
        motion.retarget(B, 800.0, Easing::Linear);
        assert_eq!(motion, before);
    }

    #[test]
    fn exit_fades_out_in_place() {
        let mut motion = MotionState::at_rest(B);
        motion.exit(600.0, Easing::Linear);
        assert_eq!(motion.phase(), Phase::Exiting);
        motion.tick(0.0);
        let gone = motion.tick(600.0);
        assert_eq!(gone, B.with_opacity(0.0));
        assert_eq!(motion.phase(), Phase::Idle);
    }

    #[test]
    fn snap_stops_any_tween() {
        let mut motion = MotionState::at_rest(A);
        motion.retarget(B, 800.0, Easing::Linear);
        motion.snap(C);
        assert_eq!(motion.tick(10.0), C);
        assert_eq!(motion.phase(), Phase::Idle);
    }
}
