//! Full-screen flash overlay

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashColor {
    #[default]
    White,
    Red,
}

/// Fire-and-forget overlay fading linearly from full to zero
#[derive(Debug, Clone, Default)]
pub struct ScreenFlash {
    timer: f32,
    duration: f32,
    color: FlashColor,
}

impl ScreenFlash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash(&mut self, color: FlashColor, duration: f32) {
        self.color = color;
        self.duration = duration;
        self.timer = duration;
    }

    pub fn is_flashing(&self) -> bool {
        self.timer > 0.0
    }

    pub fn color(&self) -> FlashColor {
        self.color
    }

    /// Overlay opacity in `[0, 1]`
    pub fn alpha(&self) -> f32 {
        if self.timer <= 0.0 || self.duration <= 0.0 {
            return 0.0;
        }
        (self.timer / self.duration).clamp(0.0, 1.0)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_fade() {
        let mut flash = ScreenFlash::new();
        assert_eq!(flash.alpha(), 0.0);
        flash.flash(FlashColor::White, 0.1);
        assert_eq!(flash.alpha(), 1.0);
        flash.update(0.05);
        assert!((flash.alpha() - 0.5).abs() < 1e-5);
        flash.update(0.05);
        assert_eq!(flash.alpha(), 0.0);
        assert!(!flash.is_flashing());
    }

    #[test]
    fn test_zero_duration_never_shows() {
        let mut flash = ScreenFlash::new();
        flash.flash(FlashColor::Red, 0.0);
        assert_eq!(flash.alpha(), 0.0);
    }
}
