//! Feedback systems
//!
//! Cosmetic state machines driven by simulation events. None of them feed
//! back into gameplay except `TimeScale`, which the tick consults to scale
//! its delta. Each is stepped independently.

pub mod flash;
pub mod particles;
pub mod popups;
pub mod shake;
pub mod time_scale;
pub mod zoom;

pub use flash::{FlashColor, ScreenFlash};
pub use particles::{BurstStyle, Particle, ParticleColor, ParticleSystem};
pub use popups::{PopupColor, PopupSystem, ScorePopup};
pub use shake::ScreenShake;
pub use time_scale::TimeScale;
pub use zoom::ZoomPunch;

use rand::Rng;

/// All feedback systems for one run
#[derive(Debug, Clone)]
pub struct Feedback {
    pub particles: ParticleSystem,
    pub shake: ScreenShake,
    pub popups: PopupSystem,
    pub time_scale: TimeScale,
    pub flash: ScreenFlash,
    pub zoom: ZoomPunch,
}

impl Feedback {
    pub fn new(max_particles: usize, popup_bounce: Option<f32>) -> Self {
        Self {
            particles: ParticleSystem::new(max_particles),
            shake: ScreenShake::new(),
            popups: PopupSystem::new(popup_bounce),
            time_scale: TimeScale::new(),
            flash: ScreenFlash::new(),
            zoom: ZoomPunch::new(),
        }
    }

    /// Step everything except the time scale (which runs on raw time)
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        self.particles.update(dt);
        self.popups.update(dt);
        self.shake.update(dt, rng);
        self.flash.update(dt);
        self.zoom.update(dt);
    }

    pub fn reset(&mut self) {
        self.particles.clear();
        self.popups.clear();
        self.shake.reset();
        self.time_scale.reset();
        self.flash.reset();
        self.zoom.reset();
    }
}
