//! Cosmetic particle bursts
//!
//! Particles never affect gameplay. They draw from the simulation RNG so a
//! seeded run stays reproducible end to end.

use glam::Vec2;
use rand::Rng;

/// Particle color tags (the renderer owns the actual palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Cyan,
    Magenta,
    Yellow,
    Lime,
    Orange,
    Pink,
    Gold,
    Red,
}

/// Colors a confetti burst picks from
pub const CONFETTI_PALETTE: [ParticleColor; 6] = [
    ParticleColor::Cyan,
    ParticleColor::Magenta,
    ParticleColor::Yellow,
    ParticleColor::Lime,
    ParticleColor::Orange,
    ParticleColor::Pink,
];

/// Speed and lifetime ranges for a burst
#[derive(Debug, Clone, Copy)]
pub struct BurstStyle {
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_life: f32,
    pub max_life: f32,
}

impl BurstStyle {
    /// Small sparks (pickups, dashes, hits)
    pub const SPARKS: Self = Self {
        min_speed: 40.0,
        max_speed: 130.0,
        min_life: 0.6,
        max_life: 1.2,
    };

    /// Kill confetti: faster and longer-lived
    pub const CONFETTI: Self = Self {
        min_speed: 80.0,
        max_speed: 240.0,
        min_life: 0.7,
        max_life: 1.6,
    };
}

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
    pub color: ParticleColor,
}

impl Particle {
    /// Opacity for rendering: fades out over the final second
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Single-color radial burst
    pub fn spawn<R: Rng>(&mut self, pos: Vec2, count: usize, color: ParticleColor, rng: &mut R) {
        self.burst(pos, count, BurstStyle::SPARKS, rng, |_| color);
    }

    /// Multi-color radial burst from the confetti palette
    pub fn spawn_confetti<R: Rng>(&mut self, pos: Vec2, count: usize, rng: &mut R) {
        self.burst(pos, count, BurstStyle::CONFETTI, rng, |rng| {
            CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())]
        });
    }

    fn burst<R: Rng>(
        &mut self,
        pos: Vec2,
        count: usize,
        style: BurstStyle,
        rng: &mut R,
        mut pick_color: impl FnMut(&mut R) -> ParticleColor,
    ) {
        let room = self.max_particles.saturating_sub(self.particles.len());
        for _ in 0..count.min(room) {
            let angle = rng.random::<f32>() * std::f32::consts::TAU;
            let speed = style.min_speed + rng.random::<f32>() * (style.max_speed - style.min_speed);
            let life = style.min_life + rng.random::<f32>() * (style.max_life - style.min_life);
            let color = pick_color(rng);
            self.particles.push(Particle {
                pos,
                vel: Vec2::from_angle(angle) * speed,
                life,
                color,
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
            particle.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
