//! Timer-driven spawning of obstacles and power-ups

use rand::Rng;

use super::entities::{Obstacle, PowerUp};
use super::rect::Rect;
use crate::tuning::{ObstacleTuning, PowerUpTuning};

/// Obstacles appear this far above the visible area
const OBSTACLE_SPAWN_Y: f32 = -20.0;
/// Power-ups appear this far above the visible area
const POWERUP_SPAWN_Y: f32 = -30.0;

/// What one spawner step produced
#[derive(Debug, Default)]
pub struct SpawnBatch {
    pub obstacle: Option<Obstacle>,
    pub powerup: Option<PowerUp>,
}

#[derive(Debug, Clone)]
pub struct Spawner {
    obstacle_timer: f32,
    powerup_timer: f32,
    spawn_interval: f32,
    obstacles: ObstacleTuning,
    powerups: PowerUpTuning,
    arena_width: f32,
}

impl Spawner {
    pub fn new(obstacles: ObstacleTuning, powerups: PowerUpTuning, arena_width: f32) -> Self {
        Self {
            obstacle_timer: 0.0,
            powerup_timer: 0.0,
            spawn_interval: obstacles.initial_spawn_interval,
            obstacles,
            powerups,
            arena_width,
        }
    }

    /// Current effective obstacle interval (seconds)
    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// Effective interval for a survival time and difficulty spawn multiplier
    pub fn interval_for(&self, time_score: f32, spawn_multiplier: f32) -> f32 {
        let t = &self.obstacles;
        let base = (t.initial_spawn_interval - time_score / t.spawn_interval_divisor)
            .max(t.min_spawn_interval);
        (base / spawn_multiplier).max(t.min_spawn_interval)
    }

    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        time_score: f32,
        spawn_multiplier: f32,
        rng: &mut R,
    ) -> SpawnBatch {
        let mut batch = SpawnBatch::default();
        self.spawn_interval = self.interval_for(time_score, spawn_multiplier);

        self.obstacle_timer += dt;
        if self.obstacle_timer >= self.spawn_interval {
            self.obstacle_timer = 0.0;
            batch.obstacle = Some(self.roll_obstacle(rng));
        }

        self.powerup_timer += dt;
        if self.powerup_timer >= self.powerups.spawn_interval {
            self.powerup_timer = 0.0;
            if rng.random::<f32>() < self.powerups.spawn_chance {
                batch.powerup = Some(self.roll_powerup(rng));
            }
        }

        batch
    }

    fn roll_obstacle<R: Rng>(&self, rng: &mut R) -> Obstacle {
        let t = &self.obstacles;
        let width = random_in(rng, t.min_width, t.max_width);
        let x = random_in(rng, 0, self.arena_width as i32 - width);
        Obstacle {
            rect: Rect::new(x as f32, OBSTACLE_SPAWN_Y, width as f32, t.height),
        }
    }

    fn roll_powerup<R: Rng>(&self, rng: &mut R) -> PowerUp {
        let size = self.powerups.size;
        let x = random_in(rng, 0, (self.arena_width - size) as i32);
        let kind = self.powerups.weights.pick(rng.random::<f32>());
        PowerUp {
            rect: Rect::new(x as f32, POWERUP_SPAWN_Y, size, size),
            kind,
        }
    }

    pub fn reset(&mut self) {
        self.obstacle_timer = 0.0;
        self.powerup_timer = 0.0;
        self.spawn_interval = self.obstacles.initial_spawn_interval;
    }
}

/// Uniform integer in `[lo, hi)`, degrading to `lo` for an empty range
fn random_in<R: Rng>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
