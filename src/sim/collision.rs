//! Collision detection and resolution
//!
//! Four independent passes, each a plain O(n·m) scan over small entity
//! lists. Iteration runs newest-first (reverse insertion order) and the
//! first match wins, so every pass is deterministic. Side effects on the
//! rest of the game are reported through return values, never callbacks.

use glam::Vec2;
use rand::Rng;

use super::entities::{Bouncer, Bullet, Obstacle, PowerUp, PowerUpKind};
use super::rect::Rect;
use crate::fx::{ParticleColor, ParticleSystem};

/// Outcome of the bullet × obstacle pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KillReport {
    /// Impact point (bullet center) of every kill, in resolution order
    pub impacts: Vec<Vec2>,
}

impl KillReport {
    pub fn kills(&self) -> u32 {
        self.impacts.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.impacts.is_empty()
    }
}

/// How obstacle contact with the player resolved this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerContact {
    #[default]
    None,
    /// The shield ate `count` obstacles; no damage
    ShieldAbsorbed { count: u32 },
    /// One obstacle got through; the caller applies damage
    PlayerHit,
}

/// Result of the obstacle × player pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactReport {
    pub contact: PlayerContact,
    /// Whether any obstacle was consumed by the contact
    pub obstacle_removed: bool,
}

/// Bullets destroy the first obstacle they overlap; both are removed.
///
/// A bullet resolves at most one obstacle per tick (no pierce-through).
pub fn bullets_vs_obstacles<R: Rng>(
    bullets: &mut Vec<Bullet>,
    obstacles: &mut Vec<Obstacle>,
    particles: &mut ParticleSystem,
    rng: &mut R,
    burst: usize,
) -> KillReport {
    let mut report = KillReport::default();

    for i in (0..bullets.len()).rev() {
        let bullet = bullets[i].rect;
        if let Some(j) = obstacles.iter().rposition(|o| o.rect.intersects(&bullet)) {
            let impact = bullet.center();
            particles.spawn_confetti(impact, burst, rng);
            obstacles.remove(j);
            bullets.remove(i);
            report.impacts.push(impact);
        }
    }

    report
}

/// Bouncers smash the first obstacle they overlap and deflect upward.
///
/// The bouncer survives the smash but spends a bounce; exhausted bouncers are
/// removed at the end of the pass. Returns the number of smashed obstacles.
pub fn bouncers_vs_obstacles<R: Rng>(
    bouncers: &mut Vec<Bouncer>,
    obstacles: &mut Vec<Obstacle>,
    particles: &mut ParticleSystem,
    rng: &mut R,
    burst: usize,
) -> u32 {
    let mut smashed = 0;

    for bouncer in bouncers.iter_mut().rev() {
        let rect = bouncer.rect;
        if let Some(j) = obstacles.iter().rposition(|o| o.rect.intersects(&rect)) {
            particles.spawn_confetti(rect.center(), burst, rng);
            bouncer.deflect_up();
            obstacles.remove(j);
            smashed += 1;
        }
    }

    bouncers.retain(|b| !b.is_spent());
    smashed
}

/// The player picks up at most one power-up per tick
pub fn collect_powerup(player: &Rect, powerups: &mut Vec<PowerUp>) -> Option<PowerUpKind> {
    let i = powerups.iter().rposition(|p| p.rect.intersects(player))?;
    Some(powerups.remove(i).kind)
}

/// Obstacles touching the player.
///
/// Dashing skips the pass entirely. With the shield up every overlapping
/// obstacle is absorbed; without it the first overlap is a hit and the pass
/// stops, so at most one hit registers per tick.
pub fn obstacles_vs_player<R: Rng>(
    player: &Rect,
    dashing: bool,
    shield_active: bool,
    obstacles: &mut Vec<Obstacle>,
    particles: &mut ParticleSystem,
    rng: &mut R,
    bursts: (usize, usize),
) -> ContactReport {
    let (shield_burst, hit_burst) = bursts;
    let mut report = ContactReport::default();
    if dashing {
        return report;
    }

    let mut absorbed = 0;
    for i in (0..obstacles.len()).rev() {
        if !obstacles[i].rect.intersects(player) {
            continue;
        }

        let obstacle = obstacles.remove(i);
        report.obstacle_removed = true;

        if shield_active {
            particles.spawn(obstacle.rect.center(), shield_burst, ParticleColor::Yellow, rng);
            absorbed += 1;
        } else {
            particles.spawn(player.center(), hit_burst, ParticleColor::Red, rng);
            report.contact = PlayerContact::PlayerHit;
            return report;
        }
    }

    if absorbed > 0 {
        report.contact = PlayerContact::ShieldAbsorbed { count: absorbed };
    }
    report
}
