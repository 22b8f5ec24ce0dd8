//! Frame driver
//!
//! Wires the simulation to its collaborators: clamps the frame delta, turns
//! held keys into edge-detected tick input, forwards events to audio and
//! persists a beaten high score.

use crate::audio::AudioSink;
use crate::consts::MAX_FRAME_DT;
use crate::highscores::HighScoreStore;
use crate::sim::{GameEvent, GameState, Keys, TickInput, tick};
use crate::tuning::Tuning;

/// Obstacles whose bottom edge is within this distance of the player are threats
const AUTOPILOT_DANGER_ZONE: f32 = 160.0;
/// Dash away when a threat is this close
const AUTOPILOT_DASH_ZONE: f32 = 60.0;

pub struct Game<S: HighScoreStore, A: AudioSink> {
    pub state: GameState,
    store: S,
    audio: A,
    prev_keys: Keys,
    /// Best score currently persisted
    stored_best: u64,
}

impl<S: HighScoreStore, A: AudioSink> Game<S, A> {
    pub fn new(tuning: Tuning, seed: u64, store: S, audio: A) -> Self {
        let stored_best = store.load();
        Self {
            state: GameState::with_tuning(tuning, seed, stored_best),
            store,
            audio,
            prev_keys: Keys::default(),
            stored_best,
        }
    }

    /// Run one tick for a frame of `raw_dt` seconds with `keys` held
    pub fn frame(&mut self, raw_dt: f32, keys: Keys) {
        let dt = raw_dt.clamp(0.0, MAX_FRAME_DT);
        let input = TickInput::from_keys(&keys, &self.prev_keys);
        self.prev_keys = keys;

        tick(&mut self.state, &input, dt);

        for event in &self.state.events {
            if let Some(sound) = event.sound() {
                self.audio.play(sound);
            }
            if let GameEvent::GameOver { score } = *event {
                if score > self.stored_best {
                    self.store.save(score);
                    self.stored_best = score;
                    log::info!("New high score {score} persisted");
                }
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

/// Scripted player: keeps firing, steps out from under falling obstacles,
/// dashes when one is about to land, and restarts after a game over
pub fn autopilot(state: &GameState) -> Keys {
    let mut keys = Keys {
        fire: true,
        ..Default::default()
    };
    if state.is_game_over() {
        keys.restart = true;
        return keys;
    }

    let player = &state.player.rect;
    let center = player.center().x;
    let threat = state
        .entities
        .obstacles
        .iter()
        .filter(|o| {
            o.rect.right() > player.left() - 10.0
                && o.rect.left() < player.right() + 10.0
                && o.rect.bottom() > player.top() - AUTOPILOT_DANGER_ZONE
                && o.rect.top() < player.bottom()
        })
        .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()));

    if let Some(threat) = threat {
        // Step toward the side with more room
        let go_left = if threat.rect.center().x > center {
            player.left() > 0.0
        } else {
            player.right() >= state.tuning.arena.width
        };
        keys.left = go_left;
        keys.right = !go_left;
        keys.dash = player.top() - threat.rect.bottom() < AUTOPILOT_DASH_ZONE;
        return keys;
    }

    // Line up under the lowest obstacle to shoot it
    if let Some(target) = state
        .entities
        .obstacles
        .iter()
        .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()))
    {
        let dx = target.rect.center().x - center;
        keys.left = dx < -5.0;
        keys.right = dx > 5.0;
    }
    keys
}
