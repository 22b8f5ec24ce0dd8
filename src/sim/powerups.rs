//! Timed power-up effects
//!
//! Each `PowerUpKind` maps to one entry in `EFFECTS`; adding a kind means
//! adding a row there, not touching a central match.

use super::entities::PowerUpKind;
use super::player::Player;
use crate::tuning::PowerUpTuning;

/// Active effect timers. A boolean effect is on while its timer is positive.
#[derive(Debug, Clone)]
pub struct PowerUpEffects {
    shield_timer: f32,
    slow_timer: f32,
    alt_weapon_timer: f32,
    speed_multiplier: f32,
}

impl Default for PowerUpEffects {
    fn default() -> Self {
        Self {
            shield_timer: 0.0,
            slow_timer: 0.0,
            alt_weapon_timer: 0.0,
            speed_multiplier: 1.0,
        }
    }
}

type ApplyFn = fn(&mut PowerUpEffects, &mut Player, &PowerUpTuning);

/// Power-up kind to effect application
pub const EFFECTS: &[(PowerUpKind, ApplyFn)] = &[
    (PowerUpKind::Shield, apply_shield),
    (PowerUpKind::Slow, apply_slow),
    (PowerUpKind::ExtraLife, apply_extra_life),
    (PowerUpKind::AltWeapon, apply_alt_weapon),
];

fn apply_shield(effects: &mut PowerUpEffects, _: &mut Player, tuning: &PowerUpTuning) {
    effects.shield_timer = tuning.shield_duration;
}

fn apply_slow(effects: &mut PowerUpEffects, _: &mut Player, tuning: &PowerUpTuning) {
    effects.slow_timer = tuning.slow_duration;
    if tuning.slow_duration > 0.0 {
        effects.speed_multiplier = tuning.slow_multiplier;
    }
}

fn apply_extra_life(_: &mut PowerUpEffects, player: &mut Player, _: &PowerUpTuning) {
    player.add_life();
}

fn apply_alt_weapon(effects: &mut PowerUpEffects, _: &mut Player, tuning: &PowerUpTuning) {
    effects.alt_weapon_timer = tuning.alt_weapon_duration;
}

impl PowerUpEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the effect for `kind`; returns false if no effect is registered
    pub fn apply(&mut self, kind: PowerUpKind, player: &mut Player, tuning: &PowerUpTuning) -> bool {
        match EFFECTS.iter().find(|(k, _)| *k == kind) {
            Some((_, apply)) => {
                apply(self, player, tuning);
                log::debug!("power-up applied: {kind:?}");
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        tick_timer(&mut self.shield_timer, dt);
        tick_timer(&mut self.alt_weapon_timer, dt);
        if self.slow_timer > 0.0 {
            tick_timer(&mut self.slow_timer, dt);
            if self.slow_timer <= 0.0 {
                self.speed_multiplier = 1.0;
            }
        }
    }

    pub fn shield_active(&self) -> bool {
        self.shield_timer > 0.0
    }

    pub fn slow_active(&self) -> bool {
        self.slow_timer > 0.0
    }

    pub fn alt_weapon_active(&self) -> bool {
        self.alt_weapon_timer > 0.0
    }

    pub fn shield_remaining(&self) -> f32 {
        self.shield_timer.max(0.0)
    }

    /// Obstacle speed factor; below 1.0 while slow is active
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn tick_timer(timer: &mut f32, dt: f32) {
    if *timer > 0.0 {
        *timer = (*timer - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::PlayerTuning;

    fn setup() -> (PowerUpEffects, Player, PowerUpTuning) {
        (
            PowerUpEffects::new(),
            Player::new(0.0, 0.0, PlayerTuning::default()),
            PowerUpTuning::default(),
        )
    }

    #[test]
    fn test_every_kind_has_an_effect() {
        for kind in [
            PowerUpKind::Slow,
            PowerUpKind::Shield,
            PowerUpKind::ExtraLife,
            PowerUpKind::AltWeapon,
        ] {
            assert!(EFFECTS.iter().any(|(k, _)| *k == kind), "{kind:?}");
        }
    }

    #[test]
    fn test_shield_expires() {
        let (mut fx, mut player, tuning) = setup();
        assert!(fx.apply(PowerUpKind::Shield, &mut player, &tuning));
        assert!(fx.shield_active());
        assert_eq!(fx.shield_remaining(), 6.0);
        fx.update(5.5);
        assert!(fx.shield_active());
        fx.update(0.5);
        assert!(!fx.shield_active());
        assert_eq!(fx.shield_remaining(), 0.0);
    }

    #[test]
    fn test_slow_restores_speed() {
        let (mut fx, mut player, tuning) = setup();
        fx.apply(PowerUpKind::Slow, &mut player, &tuning);
        assert!(fx.slow_active());
        assert_eq!(fx.speed_multiplier(), 0.6);
        fx.update(4.0);
        assert_eq!(fx.speed_multiplier(), 0.6);
        fx.update(1.0);
        assert!(!fx.slow_active());
        assert_eq!(fx.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_negative_duration_never_activates() {
        let (mut fx, mut player, mut tuning) = setup();
        tuning.slow_duration = -1.0;
        tuning.shield_duration = -1.0;
        fx.apply(PowerUpKind::Slow, &mut player, &tuning);
        fx.apply(PowerUpKind::Shield, &mut player, &tuning);
        assert!(!fx.slow_active());
        assert!(!fx.shield_active());
        assert_eq!(fx.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_extra_life_capped() {
        let (mut fx, mut player, tuning) = setup();
        player.lives = 3;
        fx.apply(PowerUpKind::ExtraLife, &mut player, &tuning);
        assert_eq!(player.lives, 4);
        fx.apply(PowerUpKind::ExtraLife, &mut player, &tuning);
        fx.apply(PowerUpKind::ExtraLife, &mut player, &tuning);
        assert_eq!(player.lives, 5);
    }

    #[test]
    fn test_alt_weapon_and_reset() {
        let (mut fx, mut player, tuning) = setup();
        fx.apply(PowerUpKind::AltWeapon, &mut player, &tuning);
        fx.apply(PowerUpKind::Slow, &mut player, &tuning);
        fx.apply(PowerUpKind::Shield, &mut player, &tuning);
        assert!(fx.alt_weapon_active());
        fx.reset();
        assert!(!fx.alt_weapon_active());
        assert!(!fx.slow_active());
        assert!(!fx.shield_active());
        assert_eq!(fx.speed_multiplier(), 1.0);
    }
}
