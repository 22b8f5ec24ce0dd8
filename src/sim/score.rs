//! Kill-streak combo and the run's score ledger

use crate::tuning::{ObstacleTuning, ScoreTuning};

/// Kill streak with a decaying window
#[derive(Debug, Clone)]
pub struct Combo {
    count: u32,
    timer: f32,
    window: f32,
    step: u32,
}

impl Combo {
    pub fn new(tuning: &ScoreTuning) -> Self {
        Self {
            count: 0,
            timer: 0.0,
            window: tuning.combo_window,
            step: tuning.combo_step.max(1),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// `1 + count / step`, never below 1
    pub fn multiplier(&self) -> u32 {
        1 + self.count / self.step
    }

    pub fn add_kill(&mut self) {
        self.count += 1;
        self.timer = self.window;
    }

    /// True when the last kill landed on a combo milestone
    pub fn at_milestone(&self) -> bool {
        self.count > 0 && self.count % self.step == 0
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
            if self.timer <= 0.0 {
                self.timer = 0.0;
                self.count = 0;
            }
        }
    }

    /// Remaining window for the HUD bar, 0..=1
    pub fn time_fraction(&self) -> f32 {
        if self.window <= 0.0 {
            return 0.0;
        }
        (self.timer / self.window).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.timer = 0.0;
    }
}

#[derive(Debug, Clone)]
pub struct ScoreLedger {
    pub time_score: f32,
    pub points: u64,
    pub high_score: u64,
    points_per_kill: u64,
}

impl ScoreLedger {
    pub fn new(tuning: &ScoreTuning, high_score: u64) -> Self {
        Self {
            time_score: 0.0,
            points: 0,
            high_score,
            points_per_kill: tuning.points_per_kill,
        }
    }

    pub fn add_kills(&mut self, kills: u32, multiplier: u32) {
        self.points += u64::from(kills) * u64::from(multiplier);
    }

    pub fn total(&self) -> u64 {
        self.time_score.max(0.0).floor() as u64 + self.points * self.points_per_kill
    }

    pub fn is_new_high(&self) -> bool {
        self.total() > self.high_score
    }

    /// Base obstacle fall speed for the current survival time
    pub fn base_obstacle_speed(&self, tuning: &ObstacleTuning) -> f32 {
        let divisor = if tuning.speed_score_divisor > 0.0 {
            tuning.speed_score_divisor
        } else {
            1.0
        };
        tuning.initial_speed + (self.time_score / divisor) * tuning.speed_increase
    }

    /// Clear the run; the high score carries over
    pub fn reset(&mut self) {
        self.time_score = 0.0;
        self.points = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_combo_scenario_five_kills_then_expiry() {
        let mut combo = Combo::new(&ScoreTuning::default());
        for _ in 0..5 {
            combo.add_kill();
            combo.update(0.1);
        }
        assert_eq!(combo.count(), 5);
        assert_eq!(combo.multiplier(), 2);

        for _ in 0..90 {
            combo.update(0.1);
        }
        assert_eq!(combo.count(), 0);

        combo.add_kill();
        assert_eq!(combo.count(), 1);
        assert_eq!(combo.multiplier(), 1);
    }

    #[test]
    fn test_combo_milestone() {
        let mut combo = Combo::new(&ScoreTuning::default());
        assert!(!combo.at_milestone());
        for i in 1..=10 {
            combo.add_kill();
            assert_eq!(combo.at_milestone(), i % 5 == 0);
        }
    }

    #[test]
    fn test_combo_time_fraction() {
        let mut combo = Combo::new(&ScoreTuning::default());
        assert_eq!(combo.time_fraction(), 0.0);
        combo.add_kill();
        assert_eq!(combo.time_fraction(), 1.0);
        combo.update(1.25);
        assert!((combo.time_fraction() - 0.5).abs() < 1e-6);
        combo.reset();
        assert_eq!(combo.count(), 0);
        assert_eq!(combo.time_fraction(), 0.0);
    }

    #[test]
    fn test_ledger_total() {
        let mut ledger = ScoreLedger::new(&ScoreTuning::default(), 100);
        ledger.time_score = 12.9;
        ledger.add_kills(1, 1);
        ledger.add_kills(2, 3);
        assert_eq!(ledger.points, 7);
        assert_eq!(ledger.total(), 12 + 70);
        assert!(!ledger.is_new_high());
        ledger.add_kills(1, 2);
        assert!(ledger.is_new_high());

        ledger.reset();
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.high_score, 100);
    }

    #[test]
    fn test_obstacle_speed_ramps() {
        let tuning = ObstacleTuning::default();
        let mut ledger = ScoreLedger::new(&ScoreTuning::default(), 0);
        assert_eq!(ledger.base_obstacle_speed(&tuning), 180.0);
        ledger.time_score = 10.0;
        assert_eq!(ledger.base_obstacle_speed(&tuning), 220.0);
    }

    proptest! {
        #[test]
        fn prop_multiplier_formula(
            events in prop::collection::vec((any::<bool>(), 0.0f32..1.0), 0..200)
        ) {
            let mut combo = Combo::new(&ScoreTuning::default());
            for (kill, dt) in events {
                if kill {
                    combo.add_kill();
                } else {
                    combo.update(dt);
                }
                prop_assert!(combo.multiplier() >= 1);
                prop_assert_eq!(combo.multiplier(), 1 + combo.count() / 5);
            }
        }
    }
}
