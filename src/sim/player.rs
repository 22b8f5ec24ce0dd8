//! The player: horizontal movement, cooldown-gated shooting and dashing, lives

use glam::Vec2;

use super::rect::Rect;
use super::tick::TickInput;
use crate::tuning::PlayerTuning;

/// Things the player did this tick that the orchestrator must act on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerActions {
    /// Fire was accepted (what gets fired is decided by the caller)
    pub fired: bool,
    /// A dash started this tick
    pub dashed: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub lives: u8,
    is_dashing: bool,
    dash_direction: f32,
    dash_timer: f32,
    dash_cooldown: f32,
    shoot_timer: f32,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(x: f32, y: f32, tuning: PlayerTuning) -> Self {
        Self {
            rect: Rect::new(x, y, tuning.width, tuning.height),
            lives: tuning.max_lives,
            is_dashing: false,
            dash_direction: 0.0,
            dash_timer: 0.0,
            dash_cooldown: 0.0,
            shoot_timer: 0.0,
            tuning,
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.is_dashing
    }

    pub fn max_lives(&self) -> u8 {
        self.tuning.max_lives
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Advance timers, start a dash, move, and try to fire
    pub fn update(&mut self, input: &TickInput, dt: f32, arena_width: f32) -> PlayerActions {
        let mut actions = PlayerActions::default();

        self.shoot_timer -= dt;
        self.dash_cooldown -= dt;
        if self.is_dashing {
            self.dash_timer -= dt;
            if self.dash_timer <= 0.0 {
                self.is_dashing = false;
            }
        }

        let axis = input.axis();
        if input.dash_pressed && axis != 0.0 && !self.is_dashing && self.dash_cooldown <= 0.0 {
            self.is_dashing = true;
            self.dash_direction = axis;
            self.dash_timer = self.tuning.dash_duration;
            self.dash_cooldown = self.tuning.dash_cooldown;
            actions.dashed = true;
        }

        // Dash overrides directional input for its whole duration
        let (direction, speed) = if self.is_dashing {
            (self.dash_direction, self.tuning.dash_speed)
        } else {
            (axis, self.tuning.speed)
        };
        self.rect.pos.x += direction * speed * dt;
        self.rect.pos.x = self
            .rect
            .pos
            .x
            .clamp(0.0, (arena_width - self.rect.size.x).max(0.0));

        if input.fire && self.shoot_timer <= 0.0 {
            self.shoot_timer = self.tuning.shoot_cooldown;
            actions.fired = true;
        }

        actions
    }

    /// Lose a life; returns whether the player is still alive
    pub fn take_damage(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }

    /// Gain a life, capped at the maximum
    pub fn add_life(&mut self) {
        self.lives = self.lives.saturating_add(1).min(self.tuning.max_lives);
    }

    /// Spawn rectangle for bullets and bouncers: centered, just above the player
    pub fn projectile_spawn_rect(&self) -> Rect {
        Rect::new(self.rect.pos.x + self.rect.size.x / 2.0 - 3.0, self.rect.pos.y - 12.0, 6.0, 12.0)
    }

    /// Dash readiness for the HUD: 0 just after a dash, 1 when ready
    pub fn dash_ready_fraction(&self) -> f32 {
        if self.tuning.dash_cooldown <= 0.0 {
            return 1.0;
        }
        (1.0 - self.dash_cooldown / self.tuning.dash_cooldown).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self, x: f32, y: f32) {
        *self = Self::new(x, y, self.tuning.clone());
    }
}
