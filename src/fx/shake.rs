//! Trauma-based screen shake
//!
//! Events add trauma in `[0, 1]`; trauma decays linearly and the render offset
//! scales with trauma squared, so small knocks barely move the camera while
//! big hits slam it.

use glam::Vec2;
use rand::Rng;

/// Largest offset in pixels at full trauma
pub const MAX_SHAKE: f32 = 10.0;
/// Trauma lost per second
pub const TRAUMA_DECAY: f32 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct ScreenShake {
    trauma: f32,
    offset: Vec2,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trauma(&mut self, amount: f32) {
        self.trauma = (self.trauma + amount).clamp(0.0, 1.0);
    }

    pub fn trauma(&self) -> f32 {
        self.trauma
    }

    /// Camera offset to apply this frame
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        if self.trauma > 0.0 {
            self.trauma = (self.trauma - TRAUMA_DECAY * dt).max(0.0);
            let shake = self.trauma * self.trauma * MAX_SHAKE;
            self.offset = Vec2::new(
                (rng.random::<f32>() * 2.0 - 1.0) * shake,
                (rng.random::<f32>() * 2.0 - 1.0) * shake,
            );
        } else {
            self.offset = Vec2::ZERO;
        }
    }

    pub fn reset(&mut self) {
        self.trauma = 0.0;
        self.offset = Vec2::ZERO;
    }
}
