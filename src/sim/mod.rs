//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Time only advances through the `dt` passed to `tick`
//! - One seeded RNG, owned by `GameState`, passed to whatever needs it
//! - Stable iteration order (newest-first collision passes)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entities;
pub mod player;
pub mod powerups;
pub mod rect;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{ContactReport, KillReport, PlayerContact};
pub use difficulty::Difficulty;
pub use entities::{Bouncer, Bullet, Entities, Obstacle, PowerUp, PowerUpKind};
pub use player::{Player, PlayerActions};
pub use powerups::PowerUpEffects;
pub use rect::Rect;
pub use score::{Combo, ScoreLedger};
pub use spawner::{SpawnBatch, Spawner};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Keys, TickInput, tick};
