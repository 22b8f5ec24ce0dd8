//! Dodge Blitz - A top-down dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, scoring)
//! - `fx`: Feedback systems driven by simulation events (particles, shake, popups)
//! - `game`: Frame driver wiring the simulation to its collaborators
//! - `highscores`: High score persistence
//! - `audio`: Fire-and-forget sound event sink
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod fx;
pub mod game;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use game::Game;
pub use highscores::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame delta used by the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest raw frame delta fed into a tick (prevents tunnelling after stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 1366.0;
    pub const ARENA_HEIGHT: f32 = 728.0;

    /// Player starts this far above the bottom edge
    pub const PLAYER_BASELINE_OFFSET: f32 = 100.0;

    /// Bouncing projectiles are culled once this far below the arena
    pub const BOUNCER_CULL_MARGIN: f32 = 200.0;
}
