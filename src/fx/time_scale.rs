//! Global time scaling for hit-stop
//!
//! The slow-motion timer runs on raw (unscaled) time so a hit-stop always
//! lasts the same wall-clock span regardless of its own scale.

#[derive(Debug, Clone)]
pub struct TimeScale {
    scale: f32,
    timer: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            scale: 1.0,
            timer: 0.0,
        }
    }
}

impl TimeScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale simulation time by `scale` for `duration` raw seconds
    ///
    /// A non-positive duration is ignored.
    pub fn apply_slow_motion(&mut self, scale: f32, duration: f32) {
        if duration <= 0.0 {
            return;
        }
        self.scale = scale;
        self.timer = duration;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_slowed(&self) -> bool {
        self.timer > 0.0
    }

    pub fn scaled_delta(&self, dt: f32) -> f32 {
        dt * self.scale
    }

    /// Advance the slow-motion timer by raw `dt`; snaps back to 1.0 on expiry
    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
            if self.timer <= 0.0 {
                self.timer = 0.0;
                self.scale = 1.0;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
