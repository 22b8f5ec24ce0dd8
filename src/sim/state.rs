//! Game state and core simulation types
//!
//! `GameState` is the explicit simulation context: every component the tick
//! drives lives here, together with the run's only random number generator.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::entities::{Entities, PowerUpKind};
use super::player::Player;
use super::powerups::PowerUpEffects;
use super::score::{Combo, ScoreLedger};
use super::spawner::Spawner;
use crate::audio::SoundEffect;
use crate::consts::PLAYER_BASELINE_OFFSET;
use crate::fx::Feedback;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Something that happened during a tick, for audio and the frame driver
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Fired,
    AltFired,
    /// A bullet destroyed an obstacle
    Killed { pos: Vec2, points: u64 },
    /// Bouncers smashed obstacles
    Smashed { count: u32 },
    Dashed,
    PowerUpCollected(PowerUpKind),
    ShieldAbsorbed { count: u32 },
    PlayerHit { lives_left: u8 },
    Combo { count: u32 },
    GameOver { score: u64 },
    NewHighScore { score: u64 },
    Restarted,
}

impl GameEvent {
    pub fn sound(&self) -> Option<SoundEffect> {
        Some(match self {
            GameEvent::Fired => SoundEffect::Fire,
            GameEvent::AltFired => SoundEffect::AltFire,
            GameEvent::Killed { .. } => SoundEffect::Explosion,
            GameEvent::Smashed { .. } => SoundEffect::Bounce,
            GameEvent::Dashed => SoundEffect::Dash,
            GameEvent::PowerUpCollected(_) => SoundEffect::PowerUp,
            GameEvent::ShieldAbsorbed { .. } => SoundEffect::ShieldHit,
            GameEvent::PlayerHit { .. } => SoundEffect::PlayerHit,
            GameEvent::Combo { .. } => SoundEffect::Combo,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
            GameEvent::NewHighScore { .. } => SoundEffect::HighScore,
            GameEvent::Restarted => return None,
        })
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub entities: Entities,
    pub spawner: Spawner,
    pub difficulty: Difficulty,
    pub combo: Combo,
    pub ledger: ScoreLedger,
    pub effects: PowerUpEffects,
    /// Cosmetic feedback (never read back by gameplay except the time scale)
    pub feedback: Feedback,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Runs started this session, including the first
    pub runs: u32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed, 0)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64, high_score: u64) -> Self {
        let (x, y) = player_start(&tuning);
        let popup_bounce = tuning
            .juice
            .popup_animation
            .then_some(tuning.juice.popup_bounce_scale);

        log::info!("New run, seed {seed}");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            player: Player::new(x, y, tuning.player.clone()),
            entities: Entities::new(),
            spawner: Spawner::new(
                tuning.obstacles.clone(),
                tuning.powerups.clone(),
                tuning.arena.width,
            ),
            difficulty: Difficulty::new(tuning.difficulty.clone()),
            combo: Combo::new(&tuning.score),
            ledger: ScoreLedger::new(&tuning.score, high_score),
            effects: PowerUpEffects::new(),
            feedback: Feedback::new(tuning.juice.max_particles, popup_bounce),
            events: Vec::new(),
            runs: 1,
            tuning,
        }
    }

    /// Start a fresh run; the high score and RNG stream carry over
    pub fn reset(&mut self) {
        let (x, y) = player_start(&self.tuning);
        self.phase = GamePhase::Playing;
        self.player.reset(x, y);
        self.entities.clear();
        self.spawner.reset();
        self.difficulty.reset();
        self.combo.reset();
        self.ledger.reset();
        self.effects.reset();
        self.feedback.reset();
        self.events.clear();
        self.runs += 1;
        log::info!("Restarted (run {})", self.runs);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u64 {
        self.ledger.total()
    }

    pub fn high_score(&self) -> u64 {
        self.ledger.high_score
    }

    /// Current obstacle fall speed with every multiplier applied
    pub fn obstacle_speed(&self) -> f32 {
        self.ledger.base_obstacle_speed(&self.tuning.obstacles)
            * self.difficulty.speed_multiplier()
            * self.effects.speed_multiplier()
    }

    /// One-line HUD summary
    pub fn hud_line(&self) -> String {
        let mut line = format!(
            "score {} | best {} | lives {}/{} | x{} combo {} | dash {:.0}%",
            self.score(),
            self.high_score(),
            self.player.lives,
            self.player.max_lives(),
            self.combo.multiplier(),
            self.combo.count(),
            self.player.dash_ready_fraction() * 100.0,
        );
        if self.effects.shield_active() {
            line.push_str(&format!(" | shield {:.1}s", self.effects.shield_remaining()));
        }
        if self.effects.slow_active() {
            line.push_str(" | slow");
        }
        if self.effects.alt_weapon_active() {
            line.push_str(" | bouncer");
        }
        if self.is_game_over() {
            line.push_str(" | GAME OVER");
        }
        line
    }
}

fn player_start(tuning: &Tuning) -> (f32, f32) {
    (
        tuning.arena.width / 2.0 - tuning.player.width / 2.0,
        tuning.arena.height - PLAYER_BASELINE_OFFSET,
    )
}
