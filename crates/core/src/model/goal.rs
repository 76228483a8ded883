use std::time::Duration;

/// Length of the gauge counter animation.
pub const GOAL_RAMP_DURATION_MS: u64 = 1_500;
/// Frame rate the gauge counter is stepped at.
pub const GOAL_RAMP_FPS: u64 = 60;

//
// ─── WEEKLY GOAL ───────────────────────────────────────────────────────────────
//

/// Minutes studied this week against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyGoal {
    goal_minutes: u32,
    achieved_minutes: u32,
}

impl WeeklyGoal {
    #[must_use]
    pub const fn new(goal_minutes: u32, achieved_minutes: u32) -> Self {
        Self {
            goal_minutes,
            achieved_minutes,
        }
    }

    #[must_use]
    pub const fn goal_minutes(&self) -> u32 {
        self.goal_minutes
    }

    #[must_use]
    pub const fn achieved_minutes(&self) -> u32 {
        self.achieved_minutes
    }

    /// Rounded completion percentage, clamped to `0..=100`.
    ///
    /// A zero goal reports 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u8 {
        if self.goal_minutes == 0 {
            return 0;
        }
        let ratio = f64::from(self.achieved_minutes) / f64::from(self.goal_minutes);
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Fraction of the gauge arc to fill, in `0.0..=1.0`.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        if self.goal_minutes == 0 {
            return 0.0;
        }
        (f64::from(self.achieved_minutes) / f64::from(self.goal_minutes)).clamp(0.0, 1.0)
    }

    /// The trophy badge is shown once the learner is past 80%.
    #[must_use]
    pub fn trophy_earned(&self) -> bool {
        self.percentage() > 80
    }
}

//
// ─── RAMP ──────────────────────────────────────────────────────────────────────
//

/// Frame-by-frame counter that climbs from 0 to a target percentage.
///
/// Each call to `next` advances one frame. While the running value is below
/// the target the rounded-up value is yielded; the final frame yields the
/// target exactly, after which the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct GoalRamp {
    target: u8,
    increment: f64,
    current: f64,
    finished: bool,
}

impl GoalRamp {
    #[must_use]
    pub fn new(target: u8) -> Self {
        let frame_ms = 1_000.0 / GOAL_RAMP_FPS as f64;
        let steps = GOAL_RAMP_DURATION_MS as f64 / frame_ms;
        Self {
            target,
            increment: f64::from(target) / steps,
            current: 0.0,
            finished: false,
        }
    }

    #[must_use]
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Wall-clock delay between two frames.
    #[must_use]
    pub fn frame_interval() -> Duration {
        Duration::from_millis(1_000 / GOAL_RAMP_FPS)
    }
}

impl Iterator for GoalRamp {
    type Item = u8;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<u8> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            return Some(self.current.ceil() as u8);
        }
        self.finished = true;
        Some(self.target)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
