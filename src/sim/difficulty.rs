//! Dynamic difficulty
//!
//! Survival time maps to target spawn-rate and speed multipliers; the current
//! values chase those targets with exponential smoothing so difficulty never
//! jumps. Manual adjustments stack on top and are floored at `MIN_MANUAL`.

use crate::tuning::DifficultyTuning;

/// Floor for manual adjustment multipliers
pub const MIN_MANUAL: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Difficulty {
    smoothed_spawn: f32,
    smoothed_speed: f32,
    manual_spawn: f32,
    manual_speed: f32,
    tuning: DifficultyTuning,
}

impl Difficulty {
    pub fn new(tuning: DifficultyTuning) -> Self {
        Self {
            smoothed_spawn: 1.0,
            smoothed_speed: 1.0,
            manual_spawn: 1.0,
            manual_speed: 1.0,
            tuning,
        }
    }

    /// Target (spawn, speed) multipliers for a given survival time in seconds
    pub fn targets(&self, time_score: f32) -> (f32, f32) {
        let minutes = time_score / 60.0;
        (
            1.0 + minutes * self.tuning.spawn_rate_per_minute,
            1.0 + minutes * self.tuning.speed_per_minute,
        )
    }

    pub fn update(&mut self, dt: f32, time_score: f32) {
        let (target_spawn, target_speed) = self.targets(time_score);

        let smooth = if self.tuning.smoothing_window > 0.0 {
            (dt / self.tuning.smoothing_window).clamp(0.0, 1.0)
        } else {
            1.0
        };

        self.smoothed_spawn += (target_spawn - self.smoothed_spawn) * smooth;
        self.smoothed_speed += (target_speed - self.smoothed_speed) * smooth;
    }

    pub fn spawn_multiplier(&self) -> f32 {
        self.smoothed_spawn * self.manual_spawn
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.smoothed_speed * self.manual_speed
    }

    pub fn manual_spawn(&self) -> f32 {
        self.manual_spawn
    }

    pub fn manual_speed(&self) -> f32 {
        self.manual_speed
    }

    pub fn adjust_manual_spawn(&mut self, delta: f32) {
        self.manual_spawn = (self.manual_spawn + delta).max(MIN_MANUAL);
    }

    pub fn adjust_manual_speed(&mut self, delta: f32) {
        self.manual_speed = (self.manual_speed + delta).max(MIN_MANUAL);
    }

    pub fn reset_manual(&mut self) {
        self.manual_spawn = 1.0;
        self.manual_speed = 1.0;
    }

    pub fn reset(&mut self) {
        self.smoothed_spawn = 1.0;
        self.smoothed_speed = 1.0;
        self.reset_manual();
    }
}
