//! Data-driven game balance
//!
//! A flat set of numeric and boolean knobs, loaded once at startup and then
//! treated as immutable by the simulation. Every group uses `#[serde(default)]`
//! so a JSON file only has to name the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::{Error, Result};
use crate::sim::PowerUpKind;

/// Playfield dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Player movement, weapons and dash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed in pixels per second
    pub speed: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    /// Upward bullet speed in pixels per second
    pub bullet_speed: f32,
    pub max_lives: u8,
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Seconds from one dash trigger until the next may start
    pub dash_cooldown: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 30.0,
            speed: 350.0,
            shoot_cooldown: 0.25,
            bullet_speed: 400.0,
            max_lives: 5,
            dash_speed: 800.0,
            dash_duration: 0.15,
            dash_cooldown: 1.5,
        }
    }
}

/// Falling obstacle spawning and speed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    pub initial_speed: f32,
    /// Speed gained per `speed_score_divisor` seconds survived
    pub speed_increase: f32,
    pub speed_score_divisor: f32,
    pub initial_spawn_interval: f32,
    pub min_spawn_interval: f32,
    /// Survival seconds per second of interval reduction
    pub spawn_interval_divisor: f32,
    pub min_width: i32,
    pub max_width: i32,
    pub height: f32,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            initial_speed: 180.0,
            speed_increase: 20.0,
            speed_score_divisor: 5.0,
            initial_spawn_interval: 1.0,
            min_spawn_interval: 0.35,
            spawn_interval_divisor: 30.0,
            min_width: 20,
            max_width: 110,
            height: 20.0,
        }
    }
}

/// Relative weights for the power-up type roll.
///
/// Resolved as cumulative thresholds in declaration order, so only the
/// proportions matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpWeights {
    pub alt_weapon: f32,
    pub shield: f32,
    pub extra_life: f32,
    pub slow: f32,
}

impl Default for PowerUpWeights {
    fn default() -> Self {
        Self {
            alt_weapon: 0.60,
            shield: 0.20,
            extra_life: 0.16,
            slow: 0.04,
        }
    }
}

impl PowerUpWeights {
    /// Map a uniform roll in `[0, 1)` to a power-up kind
    pub fn pick(&self, roll: f32) -> PowerUpKind {
        let table = [
            (PowerUpKind::AltWeapon, self.alt_weapon),
            (PowerUpKind::Shield, self.shield),
            (PowerUpKind::ExtraLife, self.extra_life),
            (PowerUpKind::Slow, self.slow),
        ];
        let total: f32 = table.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return PowerUpKind::AltWeapon;
        }

        let target = roll.clamp(0.0, 1.0) * total;
        let mut cumulative = 0.0;
        for (kind, weight) in table {
            cumulative += weight.max(0.0);
            if target < cumulative {
                return kind;
            }
        }
        // Roll of exactly 1.0 (or float drift) lands on the last non-empty bucket
        table
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|(k, _)| *k)
            .unwrap_or(PowerUpKind::AltWeapon)
    }
}

/// Power-up spawning and effect durations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpTuning {
    pub spawn_interval: f32,
    pub spawn_chance: f32,
    pub size: f32,
    pub fall_speed: f32,
    pub shield_duration: f32,
    pub slow_duration: f32,
    pub slow_multiplier: f32,
    pub alt_weapon_duration: f32,
    pub alt_weapon_bounces: u32,
    pub weights: PowerUpWeights,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            spawn_interval: 5.5,
            spawn_chance: 0.7,
            size: 22.0,
            fall_speed: 108.0,
            shield_duration: 6.0,
            slow_duration: 5.0,
            slow_multiplier: 0.6,
            alt_weapon_duration: 10.0,
            alt_weapon_bounces: 4,
            weights: PowerUpWeights::default(),
        }
    }
}

/// Time-driven difficulty ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    pub spawn_rate_per_minute: f32,
    pub speed_per_minute: f32,
    /// Seconds over which the multipliers close the gap to their target
    pub smoothing_window: f32,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            spawn_rate_per_minute: 0.25,
            speed_per_minute: 0.15,
            smoothing_window: 2.0,
        }
    }
}

/// Scoring and combo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTuning {
    pub points_per_kill: u64,
    pub combo_window: f32,
    /// Kills per +1 multiplier step
    pub combo_step: u32,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            points_per_kill: 10,
            combo_window: 2.5,
            combo_step: 5,
        }
    }
}

/// Feedback ("juice") knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JuiceTuning {
    pub slow_motion_on_kill: bool,
    pub slow_motion_duration: f32,
    pub slow_motion_scale: f32,

    pub screen_flash: bool,
    pub screen_flash_duration: f32,

    pub zoom_punch: bool,
    pub zoom_punch_amount: f32,
    pub zoom_punch_duration: f32,

    pub popup_animation: bool,
    pub popup_bounce_scale: f32,

    pub dash_particles: bool,
    pub dash_particle_count: usize,

    pub impact_particle_count: usize,
    pub smash_particle_count: usize,
    pub pickup_particle_count: usize,
    pub shield_particle_count: usize,
    pub hit_particle_count: usize,
    pub max_particles: usize,

    pub kill_trauma: f32,
    pub smash_trauma: f32,
    pub shield_trauma: f32,
    pub hit_trauma: f32,
}

impl Default for JuiceTuning {
    fn default() -> Self {
        Self {
            slow_motion_on_kill: true,
            slow_motion_duration: 0.08,
            slow_motion_scale: 0.3,

            screen_flash: true,
            screen_flash_duration: 0.1,

            zoom_punch: true,
            zoom_punch_amount: 0.05,
            zoom_punch_duration: 0.15,

            popup_animation: true,
            popup_bounce_scale: 1.3,

            dash_particles: true,
            dash_particle_count: 8,

            impact_particle_count: 18,
            smash_particle_count: 24,
            pickup_particle_count: 15,
            shield_particle_count: 12,
            hit_particle_count: 18,
            max_particles: 1024,

            kill_trauma: 0.2,
            smash_trauma: 0.15,
            shield_trauma: 0.3,
            hit_trauma: 0.6,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub obstacles: ObstacleTuning,
    pub powerups: PowerUpTuning,
    pub difficulty: DifficultyTuning,
    pub score: ScoreTuning,
    pub juice: JuiceTuning,
}

impl Tuning {
    /// Parse tuning from a JSON string (missing fields keep their defaults)
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json).map_err(|e| Error::parse(path, e))
    }

    /// Load tuning, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON (handy for dumping a starting file)
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
