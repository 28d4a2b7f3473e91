//! Cosmetic, timer-driven effects.
//!
//! Success overlays, confetti bursts, and floating counter numbers are
//! purely observational: they are scheduled independently of the state
//! controller, expire on their own after a fixed duration, and can be
//! cancelled early. Nothing in this module holds a reference to the app
//! state, so an effect can never race with or block a state transition.

use std::time::{Duration, Instant};

/// How long the success overlay stays up before auto-dismissing.
pub const OVERLAY_DURATION: Duration = Duration::from_millis(2000);
/// How long the confetti burst runs.
pub const CONFETTI_DURATION: Duration = Duration::from_millis(3000);
/// How long a floating counter number takes to reach its target.
pub const FLOATING_DURATION: Duration = Duration::from_millis(1200);

/// The kinds of effect the UI can show.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    /// Full-screen celebratory overlay with a headline and optional detail.
    SuccessOverlay {
        message: String,
        sub_message: Option<String>,
    },
    /// Confetti burst after a claimed reward.
    Confetti,
    /// A "+5" style label floating from a button to a counter.
    FloatingNumber { label: String },
}

impl EffectKind {
    /// The fixed lifetime of this kind of effect.
    pub fn duration(&self) -> Duration {
        match self {
            EffectKind::SuccessOverlay { .. } => OVERLAY_DURATION,
            EffectKind::Confetti => CONFETTI_DURATION,
            EffectKind::FloatingNumber { .. } => FLOATING_DURATION,
        }
    }
}

/// Handle for cancelling a scheduled effect early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(u64);

/// An effect that is currently running.
#[derive(Debug, Clone)]
pub struct ScheduledEffect {
    pub id: EffectId,
    pub kind: EffectKind,
    started_at: Instant,
    duration: Duration,
}

impl ScheduledEffect {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.started_at) >= self.duration
    }
}

/// Schedules effects and prunes the ones whose time is up.
///
/// The runner is polled: the UI calls [`tick`](Self::tick) once per frame
/// (or timer callback) and renders whatever is still active.
#[derive(Debug, Default)]
pub struct EffectRunner {
    active: Vec<ScheduledEffect>,
    next_id: u64,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an effect with its default duration.
    pub fn spawn(&mut self, kind: EffectKind) -> EffectId {
        let duration = kind.duration();
        self.spawn_with_duration(kind, duration)
    }

    /// Schedule an effect with an explicit duration.
    pub fn spawn_with_duration(&mut self, kind: EffectKind, duration: Duration) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.active.push(ScheduledEffect {
            id,
            kind,
            started_at: Instant::now(),
            duration,
        });
        id
    }

    /// Cancel an effect early. Returns whether it was still active.
    pub fn cancel(&mut self, id: EffectId) -> bool {
        let before = self.active.len();
        self.active.retain(|e| e.id != id);
        self.active.len() != before
    }

    /// Drop every effect whose lifetime has elapsed as of `now`.
    pub fn tick(&mut self, now: Instant) {
        self.active.retain(|e| !e.is_expired(now));
    }

    /// Effects still running, in spawn order.
    pub fn active(&self) -> &[ScheduledEffect] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> EffectKind {
        EffectKind::SuccessOverlay {
            message: "Amazing Job!".to_string(),
            sub_message: Some("You earned 5 hearts!".to_string()),
        }
    }

    #[test]
    fn test_spawned_effects_are_active() {
        let mut runner = EffectRunner::new();
        runner.spawn(overlay());
        runner.spawn(EffectKind::Confetti);
        assert_eq!(runner.active().len(), 2);
    }

    #[test]
    fn test_effects_expire_independently() {
        let mut runner = EffectRunner::new();
        runner.spawn(overlay());
        runner.spawn(EffectKind::Confetti);

        let now = Instant::now();
        runner.tick(now);
        assert_eq!(runner.active().len(), 2);

        // Past the overlay's lifetime but within the confetti's.
        runner.tick(now + OVERLAY_DURATION + Duration::from_millis(100));
        assert_eq!(runner.active().len(), 1);
        assert_eq!(runner.active()[0].kind, EffectKind::Confetti);

        runner.tick(now + CONFETTI_DURATION + Duration::from_millis(100));
        assert!(runner.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut runner = EffectRunner::new();
        let id = runner.spawn(EffectKind::FloatingNumber {
            label: "+5".to_string(),
        });
        assert!(runner.cancel(id));
        assert!(runner.is_empty());
        assert!(!runner.cancel(id));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut runner = EffectRunner::new();
        let a = runner.spawn(EffectKind::Confetti);
        let b = runner.spawn(EffectKind::Confetti);
        assert_ne!(a, b);
    }

    #[test]
    fn test_durations_match_the_ui_timings() {
        assert_eq!(overlay().duration(), Duration::from_millis(2000));
        assert_eq!(EffectKind::Confetti.duration(), Duration::from_millis(3000));
        assert_eq!(
            EffectKind::FloatingNumber {
                label: "+1".to_string()
            }
            .duration(),
            Duration::from_millis(1200)
        );
    }
}
