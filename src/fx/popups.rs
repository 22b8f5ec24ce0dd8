//! Floating score text

use glam::Vec2;

/// Seconds a popup stays on screen
pub const POPUP_LIFE: f32 = 1.5;
/// Initial upward drift in pixels/s
pub const POPUP_RISE_SPEED: f32 = 50.0;
/// Downward pull on the drift in pixels/s²
pub const POPUP_GRAVITY: f32 = 20.0;
/// Fraction of a combo popup's life spent on the scale pop
pub const POP_PHASE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupColor {
    White,
    Yellow,
    Orange,
}

#[derive(Debug, Clone)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub vel: Vec2,
    pub text: String,
    pub color: PopupColor,
    pub life: f32,
    pub max_life: f32,
    /// Render scale, animated for combo popups
    pub scale: f32,
    pub is_combo: bool,
}

impl ScorePopup {
    fn new(pos: Vec2, text: String, color: PopupColor, is_combo: bool) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, -POPUP_RISE_SPEED),
            text,
            color,
            life: POPUP_LIFE,
            max_life: POPUP_LIFE,
            scale: 1.0,
            is_combo,
        }
    }

    /// 0 at spawn, 1 at expiry
    pub fn progress(&self) -> f32 {
        (1.0 - self.life / self.max_life).clamp(0.0, 1.0)
    }

    /// Opacity for rendering
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    fn update(&mut self, dt: f32, bounce_scale: Option<f32>) {
        self.pos += self.vel * dt;
        self.vel.y += POPUP_GRAVITY * dt;
        self.life -= dt;

        if let (true, Some(peak)) = (self.is_combo, bounce_scale) {
            self.scale = pop_scale(self.progress(), peak);
        }
    }
}

/// Scale curve for the combo pop: eases out to `peak` and settles back to 1
/// within the first `POP_PHASE` of the lifetime
pub fn pop_scale(progress: f32, peak: f32) -> f32 {
    if progress >= POP_PHASE {
        return 1.0;
    }
    let t = (progress / POP_PHASE).clamp(0.0, 1.0);
    1.0 + (peak - 1.0) * (t * std::f32::consts::PI).sin()
}

#[derive(Debug, Clone, Default)]
pub struct PopupSystem {
    popups: Vec<ScorePopup>,
    /// Peak scale for combo popups; `None` disables the animation
    bounce_scale: Option<f32>,
}

impl PopupSystem {
    pub fn new(bounce_scale: Option<f32>) -> Self {
        Self {
            popups: Vec::new(),
            bounce_scale,
        }
    }

    pub fn popups(&self) -> &[ScorePopup] {
        &self.popups
    }

    /// Points popup; shows the multiplier when it is above 1
    pub fn spawn_score(&mut self, pos: Vec2, points: u64, multiplier: u32) {
        let (text, color) = if multiplier > 1 {
            (format!("+{points} x{multiplier}!"), PopupColor::Yellow)
        } else {
            (format!("+{points}"), PopupColor::White)
        };
        self.popups.push(ScorePopup::new(pos, text, color, false));
    }

    pub fn spawn_combo(&mut self, pos: Vec2, combo: u32) {
        self.popups.push(ScorePopup::new(
            pos,
            format!("{combo} COMBO!"),
            PopupColor::Orange,
            true,
        ));
    }

    pub fn update(&mut self, dt: f32) {
        let bounce = self.bounce_scale;
        for popup in &mut self.popups {
            popup.update(dt, bounce);
        }
        self.popups.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.popups.clear();
    }
}
