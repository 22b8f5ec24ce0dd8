//! Camera zoom punch on impactful events

#[derive(Debug, Clone, Default)]
pub struct ZoomPunch {
    amount: f32,
    timer: f32,
    duration: f32,
}

impl ZoomPunch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn punch(&mut self, amount: f32, duration: f32) {
        self.amount = amount;
        self.duration = duration;
        self.timer = duration;
    }

    /// Camera zoom factor (1.0 = none)
    pub fn zoom(&self) -> f32 {
        if self.timer <= 0.0 || self.duration <= 0.0 {
            return 1.0;
        }
        1.0 + self.amount * (self.timer / self.duration)
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
