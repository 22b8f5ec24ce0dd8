//! Transient gameplay entities and their per-tick integrators
//!
//! The registry exclusively owns every bullet, obstacle, power-up and bouncer.
//! After `Entities::integrate` returns, no collection holds an entity that has
//! crossed its despawn boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::BOUNCER_CULL_MARGIN;

/// Wall contact: horizontal velocity is inverted and scaled by this
pub const WALL_RESTITUTION: f32 = 0.7;
/// Floor contact: vertical velocity is inverted and scaled by this
pub const FLOOR_RESTITUTION: f32 = 0.6;
/// Floor contact: horizontal velocity is scaled by this (rolling friction)
pub const FLOOR_FRICTION: f32 = 0.8;
/// Downward acceleration on bouncers, pixels/s²
pub const BOUNCER_GRAVITY: f32 = 400.0;

/// A player bullet
#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Bullet {
    pub fn update(&mut self, dt: f32) {
        self.rect.translate(self.vel * dt);
    }

    /// Gone once fully past any screen edge
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.rect.bottom() < 0.0
            || self.rect.top() > height
            || self.rect.right() < 0.0
            || self.rect.left() > width
    }
}

/// A falling obstacle; its speed is global, not per-entity
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn update(&mut self, dt: f32, speed: f32) {
        self.rect.pos.y += speed * dt;
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Obstacles fall slower for a while
    Slow,
    /// Obstacle contact is absorbed instead of costing a life
    Shield,
    /// One more life, capped at the maximum
    ExtraLife,
    /// Fire launches bouncers instead of bullets
    AltWeapon,
}

/// A falling power-up pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn update(&mut self, dt: f32, speed: f32) {
        self.rect.pos.y += speed * dt;
    }
}

/// The alternate weapon: a lobbed projectile that bounces off walls, the
/// floor and obstacles until it runs out of bounces
#[derive(Debug, Clone)]
pub struct Bouncer {
    pub rect: Rect,
    pub vel: Vec2,
    pub bounces_left: u32,
}

impl Bouncer {
    pub fn new(rect: Rect, vel: Vec2, bounces: u32) -> Self {
        Self {
            rect,
            vel,
            bounces_left: bounces,
        }
    }

    /// Integrate one step with gravity and wall/floor bounces
    pub fn update(&mut self, dt: f32, width: f32, floor: f32) {
        self.rect.translate(self.vel * dt);
        self.vel.y += BOUNCER_GRAVITY * dt;

        if self.rect.left() < 0.0 || self.rect.right() > width {
            self.rect.pos.x = self.rect.pos.x.clamp(0.0, (width - self.rect.size.x).max(0.0));
            self.vel.x = -self.vel.x * WALL_RESTITUTION;
            self.spend_bounce();
        }

        if self.rect.bottom() > floor && self.vel.y > 0.0 {
            self.rect.pos.y = floor - self.rect.size.y;
            self.vel.y = -self.vel.y * FLOOR_RESTITUTION;
            self.vel.x *= FLOOR_FRICTION;
            self.spend_bounce();
        }
    }

    /// Deflect upward off something it hit from above
    pub fn deflect_up(&mut self) {
        self.vel.y = -self.vel.y.abs() * FLOOR_RESTITUTION;
        self.spend_bounce();
    }

    pub fn spend_bounce(&mut self) {
        self.bounces_left = self.bounces_left.saturating_sub(1);
    }

    pub fn is_spent(&self) -> bool {
        self.bounces_left == 0
    }
}

/// Owner of all transient gameplay entities
#[derive(Debug, Clone, Default)]
pub struct Entities {
    pub bullets: Vec<Bullet>,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<PowerUp>,
    pub bouncers: Vec<Bouncer>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every entity and cull the ones past their despawn boundary
    pub fn integrate(
        &mut self,
        dt: f32,
        obstacle_speed: f32,
        powerup_speed: f32,
        width: f32,
        height: f32,
    ) {
        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        self.bullets.retain(|b| !b.is_off_screen(width, height));

        for bouncer in &mut self.bouncers {
            bouncer.update(dt, width, height);
        }
        self.cull_bouncers(height);

        for obstacle in &mut self.obstacles {
            obstacle.update(dt, obstacle_speed);
        }
        self.obstacles.retain(|o| o.rect.top() <= height);

        for powerup in &mut self.powerups {
            powerup.update(dt, powerup_speed);
        }
        self.powerups.retain(|p| p.rect.top() <= height);
    }

    /// Drop bouncers that are out of bounces or fell far below the arena
    pub fn cull_bouncers(&mut self, height: f32) {
        self.bouncers
            .retain(|b| !b.is_spent() && b.rect.top() <= height + BOUNCER_CULL_MARGIN);
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
        self.obstacles.clear();
        self.powerups.clear();
        self.bouncers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
            && self.obstacles.is_empty()
            && self.powerups.is_empty()
            && self.bouncers.is_empty()
    }
}
