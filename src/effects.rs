//! Decorative screen effects: the confetti particle field, the staged
//! reveal sequencer, and the welcome auto-advance timer.
//!
//! Everything here is pure over elapsed time. Screens own the `Instant`
//! captured at mount; dropping the screen state drops the clock, which
//! is what cancels a pending timer.

use std::time::{Duration, Instant};

use eframe::egui::Color32;

/// Horizontal particle position bounds, percent of screen width.
pub const X_MIN_PERCENT: f32 = 15.0;
pub const X_MAX_PERCENT: f32 = 85.0;

/// Entrance delay upper bound (exclusive), seconds.
pub const DELAY_MAX_SECS: f32 = 1.5;

/// Fall duration bounds, seconds.
pub const FALL_MIN_SECS: f32 = 2.5;
pub const FALL_MAX_SECS: f32 = 4.5;

/// Particle size bounds, logical points.
pub const SIZE_MIN: f32 = 6.0;
pub const SIZE_MAX: f32 = 14.0;

/// Spin rate bound (absolute), radians per second.
pub const SPIN_MAX: f32 = 4.0;

/// Fixed confetti palette.
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(244, 114, 182), // pink
    Color32::from_rgb(96, 165, 250),  // blue
    Color32::from_rgb(251, 191, 36),  // amber
    Color32::from_rgb(52, 211, 153),  // emerald
    Color32::from_rgb(167, 139, 250), // violet
    Color32::from_rgb(248, 113, 113), // red
];

/// Shape of one confetti particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Circle,
    Square,
    Streamer,
}

const SHAPES: [ParticleShape; 3] = [
    ParticleShape::Circle,
    ParticleShape::Square,
    ParticleShape::Streamer,
];

/// One confetti particle descriptor. Immutable after generation;
/// rendering derives the current pose from elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Horizontal position, percent of screen width.
    pub x_percent: f32,
    /// Seconds after mount before the particle starts falling.
    pub delay_secs: f32,
    /// Seconds the fall takes from top to bottom.
    pub fall_secs: f32,
    /// Signed spin rate, radians per second.
    pub spin: f32,
    /// Edge length / diameter in logical points.
    pub size: f32,
    pub color: Color32,
    pub shape: ParticleShape,
}

impl Particle {
    /// Fall progress in `[0, 1]` at `elapsed` seconds after mount, or
    /// `None` while the particle is still waiting or already finished.
    pub fn fall_progress(&self, elapsed_secs: f32) -> Option<f32> {
        let t = (elapsed_secs - self.delay_secs) / self.fall_secs;
        (0.0..=1.0).contains(&t).then_some(t)
    }

    /// Current rotation angle in radians.
    pub fn angle(&self, elapsed_secs: f32) -> f32 {
        self.spin * elapsed_secs
    }
}

fn rand_range(lo: f32, hi: f32) -> f32 {
    lo + fastrand::f32() * (hi - lo)
}

/// Generate a fresh particle field of exactly `count` descriptors, each
/// independently randomized within the module bounds. Cannot fail;
/// re-invocation yields a different but statistically similar set.
pub fn spawn_particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x_percent: rand_range(X_MIN_PERCENT, X_MAX_PERCENT),
            delay_secs: fastrand::f32() * DELAY_MAX_SECS,
            fall_secs: rand_range(FALL_MIN_SECS, FALL_MAX_SECS),
            spin: rand_range(-SPIN_MAX, SPIN_MAX),
            size: rand_range(SIZE_MIN, SIZE_MAX),
            color: PALETTE[fastrand::usize(..PALETTE.len())],
            shape: SHAPES[fastrand::usize(..SHAPES.len())],
        })
        .collect()
}

/// Visual groups revealed in order on the congratulations screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Icon,
    Text,
    Button,
}

impl RevealStage {
    pub const ALL: [RevealStage; 3] = [RevealStage::Icon, RevealStage::Text, RevealStage::Button];

    fn index(self) -> usize {
        match self {
            RevealStage::Icon => 0,
            RevealStage::Text => 1,
            RevealStage::Button => 2,
        }
    }
}

/// Seconds each group takes to fade in once its offset passes.
pub const REVEAL_FADE_SECS: f32 = 0.4;

/// Staged reveal: each group becomes visible at a fixed offset from
/// mount and stays visible. Visibility is a pure function of elapsed
/// time, so a stage can never flip back to hidden.
#[derive(Debug, Clone, Copy)]
pub struct RevealSequence {
    offsets_secs: [f32; 3],
}

impl RevealSequence {
    pub fn new(offsets_secs: [f32; 3]) -> Self {
        Self { offsets_secs }
    }

    /// Whether a stage's group has started appearing.
    pub fn visible(&self, stage: RevealStage, elapsed_secs: f32) -> bool {
        elapsed_secs >= self.offsets_secs[stage.index()]
    }

    /// Fade-in amount for a stage in `[0, 1]` (0 = hidden, 1 = settled).
    pub fn fade(&self, stage: RevealStage, elapsed_secs: f32) -> f32 {
        let since = elapsed_secs - self.offsets_secs[stage.index()];
        (since / REVEAL_FADE_SECS).clamp(0.0, 1.0)
    }

    /// Whether every group is fully settled.
    pub fn settled(&self, elapsed_secs: f32) -> bool {
        elapsed_secs >= self.offsets_secs[2] + REVEAL_FADE_SECS
    }
}

/// One-shot deadline for the welcome screen. Owned by the screen state;
/// a screen switch drops it before it can be observed as due again.
#[derive(Debug)]
pub struct AutoAdvance {
    started: Instant,
    delay: Duration,
}

impl AutoAdvance {
    pub fn new(delay: Duration) -> Self {
        Self {
            started: Instant::now(),
            delay,
        }
    }

    /// Whether the deadline has passed as of `now`.
    pub fn due_at(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.delay
    }

    pub fn due(&self) -> bool {
        self.due_at(Instant::now())
    }

    /// Time left until the deadline (zero once due). Used to schedule
    /// the next repaint instead of spinning.
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_exact_count_and_bounds() {
        let particles = spawn_particles(500);
        assert_eq!(particles.len(), 500);

        for p in &particles {
            assert!((X_MIN_PERCENT..=X_MAX_PERCENT).contains(&p.x_percent));
            assert!(p.delay_secs >= 0.0 && p.delay_secs < DELAY_MAX_SECS);
            assert!((FALL_MIN_SECS..=FALL_MAX_SECS).contains(&p.fall_secs));
            assert!(p.spin.abs() <= SPIN_MAX);
            assert!((SIZE_MIN..=SIZE_MAX).contains(&p.size));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_spawn_zero_and_one() {
        assert!(spawn_particles(0).is_empty());
        assert_eq!(spawn_particles(1).len(), 1);
    }

    #[test]
    fn test_two_spawns_differ() {
        let a = spawn_particles(60);
        let b = spawn_particles(60);
        // 60 independently randomized f32 positions colliding across two
        // sets is vanishingly unlikely.
        let identical = a
            .iter()
            .zip(&b)
            .all(|(x, y)| x.x_percent == y.x_percent && x.delay_secs == y.delay_secs);
        assert!(!identical);
    }

    #[test]
    fn test_fall_progress_window() {
        let p = Particle {
            x_percent: 50.0,
            delay_secs: 1.0,
            fall_secs: 2.0,
            spin: 0.0,
            size: 10.0,
            color: PALETTE[0],
            shape: ParticleShape::Circle,
        };
        assert_eq!(p.fall_progress(0.5), None);
        assert_eq!(p.fall_progress(1.0), Some(0.0));
        assert_eq!(p.fall_progress(2.0), Some(0.5));
        assert_eq!(p.fall_progress(3.0), Some(1.0));
        assert_eq!(p.fall_progress(3.1), None);
    }

    #[test]
    fn test_reveal_stages_appear_in_order() {
        let seq = RevealSequence::new([0.1, 0.8, 1.5]);

        assert!(!seq.visible(RevealStage::Icon, 0.0));

        // Between the first two offsets only the icon shows.
        assert!(seq.visible(RevealStage::Icon, 0.5));
        assert!(!seq.visible(RevealStage::Text, 0.5));
        assert!(!seq.visible(RevealStage::Button, 0.5));

        assert!(seq.visible(RevealStage::Text, 1.0));
        assert!(!seq.visible(RevealStage::Button, 1.0));

        assert!(seq.visible(RevealStage::Button, 1.5));
        assert!(seq.settled(2.0));
    }

    #[test]
    fn test_reveal_visibility_is_monotonic() {
        let seq = RevealSequence::new(crate::config::TimingConfig::default().reveal_offsets_secs);
        for stage in RevealStage::ALL {
            let mut seen = false;
            for step in 0..40 {
                let visible = seq.visible(stage, step as f32 * 0.1);
                assert!(!(seen && !visible), "stage reverted to hidden");
                seen = visible;
            }
            assert!(seen, "stage never became visible");
        }
    }

    #[test]
    fn test_reveal_fade_clamped() {
        let seq = RevealSequence::new([0.1, 0.8, 1.5]);
        assert_eq!(seq.fade(RevealStage::Icon, 0.0), 0.0);
        assert_eq!(seq.fade(RevealStage::Icon, 10.0), 1.0);
        let mid = seq.fade(RevealStage::Icon, 0.1 + REVEAL_FADE_SECS / 2.0);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_auto_advance_deadline() {
        let timer = AutoAdvance::new(Duration::from_secs(3));
        let start = timer.started;

        assert!(!timer.due_at(start));
        assert!(!timer.due_at(start + Duration::from_millis(2999)));
        assert!(timer.due_at(start + Duration::from_secs(3)));
        assert!(timer.due_at(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_auto_advance_remaining_never_underflows() {
        let timer = AutoAdvance::new(Duration::ZERO);
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert!(timer.due());
    }
}
