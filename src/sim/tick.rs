//! Per-tick simulation step
//!
//! One call advances the whole run in a fixed order: player, spawner,
//! entity integration, collision passes and their consequences, timers,
//! survival score, difficulty, and finally the game-over check.

use glam::Vec2;
use rand::Rng;

use super::collision::{
    PlayerContact, bouncers_vs_obstacles, bullets_vs_obstacles, collect_powerup,
    obstacles_vs_player,
};
use super::entities::{Bouncer, Bullet};
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::fx::{FlashColor, ParticleColor};

/// Bouncer edge length
const BOUNCER_SIZE: f32 = 12.0;
/// Bouncers launch upward at this speed
const BOUNCER_LAUNCH_SPEED: f32 = 300.0;
/// Horizontal launch velocity is uniform in `[-BOUNCER_SPREAD, BOUNCER_SPREAD)`
const BOUNCER_SPREAD: f32 = 100.0;

/// Logical keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub dash: bool,
    pub restart: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Fire is held (the shoot cooldown gates the rate)
    pub fire: bool,
    /// Dash modifier went down this tick
    pub dash_pressed: bool,
    /// Restart went down this tick
    pub restart_pressed: bool,
}

impl TickInput {
    /// Held state from `now`, edges from `prev` → `now`
    pub fn from_keys(now: &Keys, prev: &Keys) -> Self {
        Self {
            left: now.left,
            right: now.right,
            fire: now.fire,
            dash_pressed: now.dash && !prev.dash,
            restart_pressed: now.restart && !prev.restart,
        }
    }

    /// -1 for left, +1 for right, 0 for neither or both
    pub fn axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.left {
            axis -= 1.0;
        }
        if self.right {
            axis += 1.0;
        }
        axis
    }
}

/// Advance the game state by one frame of raw (unscaled) time
pub fn tick(state: &mut GameState, input: &TickInput, raw_dt: f32) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        if input.restart_pressed {
            state.reset();
            state.events.push(GameEvent::Restarted);
        } else {
            state.feedback.update(raw_dt, &mut state.rng);
        }
        return;
    }

    // Hit-stop: the time scale itself runs on raw time
    let dt = state.feedback.time_scale.scaled_delta(raw_dt);
    state.feedback.time_scale.update(raw_dt);

    let GameState {
        rng,
        tuning,
        phase,
        player,
        entities,
        spawner,
        difficulty,
        combo,
        ledger,
        effects,
        feedback,
        events,
        ..
    } = state;
    let juice = &tuning.juice;
    let (width, height) = (tuning.arena.width, tuning.arena.height);

    // Player
    let actions = player.update(input, dt, width);
    if actions.dashed {
        events.push(GameEvent::Dashed);
        if juice.dash_particles {
            feedback
                .particles
                .spawn(player.center(), juice.dash_particle_count, ParticleColor::Cyan, rng);
        }
    }
    if actions.fired {
        if effects.alt_weapon_active() {
            let center = player.center();
            let rect = Rect::new(
                center.x - BOUNCER_SIZE / 2.0,
                player.rect.top() - BOUNCER_SIZE,
                BOUNCER_SIZE,
                BOUNCER_SIZE,
            );
            let vx = rng.random_range(-BOUNCER_SPREAD..BOUNCER_SPREAD);
            entities.bouncers.push(Bouncer::new(
                rect,
                Vec2::new(vx, -BOUNCER_LAUNCH_SPEED),
                tuning.powerups.alt_weapon_bounces,
            ));
            events.push(GameEvent::AltFired);
        } else {
            entities.bullets.push(Bullet {
                rect: player.projectile_spawn_rect(),
                vel: Vec2::new(0.0, -tuning.player.bullet_speed),
            });
            events.push(GameEvent::Fired);
        }
    }

    // Spawner
    let batch = spawner.update(dt, ledger.time_score, difficulty.spawn_multiplier(), rng);
    entities.obstacles.extend(batch.obstacle);
    entities.powerups.extend(batch.powerup);

    // Integration
    let obstacle_speed = ledger.base_obstacle_speed(&tuning.obstacles)
        * difficulty.speed_multiplier()
        * effects.speed_multiplier();
    entities.integrate(dt, obstacle_speed, tuning.powerups.fall_speed, width, height);

    // Bullets × obstacles
    let kills = bullets_vs_obstacles(
        &mut entities.bullets,
        &mut entities.obstacles,
        &mut feedback.particles,
        rng,
        juice.impact_particle_count,
    );
    // One kill event per tick, however many bullets landed
    if !kills.is_empty() {
        combo.add_kill();
        let multiplier = combo.multiplier();
        ledger.add_kills(kills.kills(), multiplier);
        let points = tuning.score.points_per_kill * u64::from(multiplier);
        for &impact in &kills.impacts {
            feedback.popups.spawn_score(impact, points, multiplier);
            feedback.shake.add_trauma(juice.kill_trauma);
            events.push(GameEvent::Killed { pos: impact, points });
        }

        if combo.at_milestone() {
            feedback
                .popups
                .spawn_combo(Vec2::new(width / 2.0, height / 3.0), combo.count());
            events.push(GameEvent::Combo { count: combo.count() });
        }

        if juice.slow_motion_on_kill {
            feedback
                .time_scale
                .apply_slow_motion(juice.slow_motion_scale, juice.slow_motion_duration);
        }
        if juice.screen_flash {
            feedback.flash.flash(FlashColor::White, juice.screen_flash_duration);
        }
        if juice.zoom_punch {
            feedback.zoom.punch(juice.zoom_punch_amount, juice.zoom_punch_duration);
        }
    }

    // Bouncers × obstacles (smashes don't score)
    let smashed = bouncers_vs_obstacles(
        &mut entities.bouncers,
        &mut entities.obstacles,
        &mut feedback.particles,
        rng,
        juice.smash_particle_count,
    );
    if smashed > 0 {
        feedback.shake.add_trauma(juice.smash_trauma * smashed as f32);
        events.push(GameEvent::Smashed { count: smashed });
    }

    // Power-up pickup
    if let Some(kind) = collect_powerup(&player.rect, &mut entities.powerups) {
        effects.apply(kind, player, &tuning.powerups);
        feedback
            .particles
            .spawn(player.center(), juice.pickup_particle_count, ParticleColor::Gold, rng);
        events.push(GameEvent::PowerUpCollected(kind));
    }

    // Obstacles × player
    let contact = obstacles_vs_player(
        &player.rect,
        player.is_dashing(),
        effects.shield_active(),
        &mut entities.obstacles,
        &mut feedback.particles,
        rng,
        (juice.shield_particle_count, juice.hit_particle_count),
    );
    let mut alive = true;
    match contact.contact {
        PlayerContact::None => {}
        PlayerContact::ShieldAbsorbed { count } => {
            feedback.shake.add_trauma(juice.shield_trauma);
            events.push(GameEvent::ShieldAbsorbed { count });
        }
        PlayerContact::PlayerHit => {
            alive = player.take_damage();
            combo.reset();
            feedback.shake.add_trauma(juice.hit_trauma);
            if juice.screen_flash {
                feedback.flash.flash(FlashColor::Red, juice.screen_flash_duration);
            }
            events.push(GameEvent::PlayerHit {
                lives_left: player.lives,
            });
        }
    }

    // Timers
    effects.update(dt);
    combo.update(dt);
    feedback.update(dt, rng);

    ledger.time_score += dt;
    difficulty.update(dt, ledger.time_score);

    // Game over
    if !alive {
        *phase = GamePhase::GameOver;
        let score = ledger.total();
        log::info!("Game over: score {score}, best {}", ledger.high_score);
        events.push(GameEvent::GameOver { score });
        if score > ledger.high_score {
            ledger.high_score = score;
            events.push(GameEvent::NewHighScore { score });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::{Obstacle, PowerUp, PowerUpKind};
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// State with spawning effectively disabled
    fn quiet_state() -> GameState {
        let mut tuning = Tuning::default();
        tuning.obstacles.initial_spawn_interval = 1.0e9;
        tuning.obstacles.min_spawn_interval = 1.0e9;
        tuning.powerups.spawn_interval = 1.0e9;
        GameState::with_tuning(tuning, 3, 0)
    }

    fn obstacle_on_player(state: &GameState) -> Obstacle {
        let p = state.player.rect;
        Obstacle {
            rect: Rect::new(p.left(), p.top(), 20.0, 20.0),
        }
    }

    #[test]
    fn test_input_edges() {
        let prev = Keys {
            dash: true,
            ..Default::default()
        };
        let now = Keys {
            dash: true,
            restart: true,
            fire: true,
            left: true,
            ..Default::default()
        };
        let input = TickInput::from_keys(&now, &prev);
        assert!(!input.dash_pressed);
        assert!(input.restart_pressed);
        assert!(input.fire);
        assert_eq!(input.axis(), -1.0);

        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(both.axis(), 0.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        let input = TickInput {
            fire: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut a, &input, DT);
            tick(&mut b, &input, DT);
            assert_eq!(a.events, b.events);
        }
        assert_eq!(a.score(), b.score());
        assert_eq!(a.entities.obstacles.len(), b.entities.obstacles.len());
        assert_eq!(a.player.rect, b.player.rect);
    }

    #[test]
    fn test_fire_spawns_bullet() {
        let mut state = quiet_state();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, DT);
        assert_eq!(state.entities.bullets.len(), 1);
        assert!(state.events.contains(&GameEvent::Fired));
        assert!(state.entities.bullets[0].vel.y < 0.0);
    }

    #[test]
    fn test_alt_weapon_fires_bouncers() {
        let mut state = quiet_state();
        let tuning = state.tuning.powerups.clone();
        state
            .effects
            .apply(PowerUpKind::AltWeapon, &mut state.player, &tuning);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, DT);
        assert!(state.entities.bullets.is_empty());
        assert_eq!(state.entities.bouncers.len(), 1);
        assert_eq!(state.entities.bouncers[0].bounces_left, 4);
        assert!(state.events.contains(&GameEvent::AltFired));
    }

    #[test]
    fn test_kill_scores_and_triggers_juice() {
        let mut state = quiet_state();
        state.entities.obstacles.push(Obstacle {
            rect: Rect::new(100.0, 100.0, 20.0, 20.0),
        });
        state.entities.bullets.push(Bullet {
            rect: Rect::new(105.0, 105.0, 6.0, 12.0),
            vel: Vec2::ZERO,
        });
        tick(&mut state, &idle(), DT);

        assert!(state.entities.obstacles.is_empty());
        assert!(state.entities.bullets.is_empty());
        assert_eq!(state.combo.count(), 1);
        assert_eq!(state.ledger.points, 1);
        assert_eq!(state.feedback.popups.popups().len(), 1);
        assert_eq!(state.feedback.popups.popups()[0].text, "+10");
        assert!(state.feedback.time_scale.is_slowed());
        assert!(state.feedback.flash.is_flashing());
        assert!(state.feedback.zoom.zoom() > 1.0);
        assert!(state.feedback.shake.trauma() > 0.0);
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::Killed { points: 10, .. }]
        ));

        // Next tick runs at the slowed rate
        let before = state.ledger.time_score;
        tick(&mut state, &idle(), DT);
        let advanced = state.ledger.time_score - before;
        assert!((advanced - DT * 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_juice_toggles_disable_effects() {
        let mut state = quiet_state();
        state.tuning.juice.slow_motion_on_kill = false;
        state.tuning.juice.screen_flash = false;
        state.tuning.juice.zoom_punch = false;
        state.entities.obstacles.push(Obstacle {
            rect: Rect::new(100.0, 100.0, 20.0, 20.0),
        });
        state.entities.bullets.push(Bullet {
            rect: Rect::new(105.0, 105.0, 6.0, 12.0),
            vel: Vec2::ZERO,
        });
        tick(&mut state, &idle(), DT);
        assert_eq!(state.combo.count(), 1);
        assert!(!state.feedback.time_scale.is_slowed());
        assert!(!state.feedback.flash.is_flashing());
        assert_eq!(state.feedback.zoom.zoom(), 1.0);
    }

    fn bullet_on_obstacle(state: &mut GameState, x: f32, y: f32) {
        state.entities.obstacles.push(Obstacle {
            rect: Rect::new(x, y, 20.0, 20.0),
        });
        state.entities.bullets.push(Bullet {
            rect: Rect::new(x + 5.0, y + 5.0, 6.0, 12.0),
            vel: Vec2::ZERO,
        });
    }

    #[test]
    fn test_simultaneous_kills_are_one_combo_step() {
        let mut state = quiet_state();
        for i in 0..5 {
            bullet_on_obstacle(&mut state, 100.0 + i as f32 * 50.0, 100.0);
        }
        tick(&mut state, &idle(), DT);

        assert!(state.entities.obstacles.is_empty());
        assert_eq!(state.combo.count(), 1);
        assert_eq!(state.combo.multiplier(), 1);
        assert_eq!(state.ledger.points, 5);
        let killed = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Killed { points: 10, .. }))
            .count();
        assert_eq!(killed, 5);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::Combo { .. })));
        assert_eq!(state.feedback.popups.popups().len(), 5);
    }

    #[test]
    fn test_fifth_kill_tick_spawns_combo_popup() {
        let mut state = quiet_state();
        for _ in 0..4 {
            bullet_on_obstacle(&mut state, 100.0, 100.0);
            tick(&mut state, &idle(), DT);
        }
        assert_eq!(state.combo.count(), 4);
        assert_eq!(state.ledger.points, 4);

        // Two bullets in the same tick still count as a single combo step
        bullet_on_obstacle(&mut state, 100.0, 100.0);
        bullet_on_obstacle(&mut state, 300.0, 100.0);
        tick(&mut state, &idle(), DT);
        assert_eq!(state.combo.count(), 5);
        assert_eq!(state.combo.multiplier(), 2);
        assert_eq!(state.ledger.points, 4 + 2 * 2);
        assert!(state.events.contains(&GameEvent::Combo { count: 5 }));
        let combo_popups: Vec<_> = state
            .feedback
            .popups
            .popups()
            .iter()
            .filter(|p| p.is_combo)
            .collect();
        assert_eq!(combo_popups.len(), 1);
        assert_eq!(combo_popups[0].text, "5 COMBO!");
    }

    #[test]
    fn test_zero_hit_stop_duration_keeps_full_speed() {
        let mut state = quiet_state();
        state.tuning.juice.slow_motion_duration = 0.0;
        bullet_on_obstacle(&mut state, 100.0, 100.0);
        tick(&mut state, &idle(), DT);
        assert_eq!(state.combo.count(), 1);

        for _ in 0..100 {
            tick(&mut state, &idle(), 0.1);
        }
        assert_eq!(state.feedback.time_scale.scale(), 1.0);
        let before = state.ledger.time_score;
        tick(&mut state, &idle(), 0.1);
        assert!((state.ledger.time_score - before - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_hit_costs_life_and_combo() {
        let mut state = quiet_state();
        state.combo.add_kill();
        let obstacle = obstacle_on_player(&state);
        state.entities.obstacles.push(obstacle);
        tick(&mut state, &idle(), DT);
        assert_eq!(state.player.lives, 4);
        assert_eq!(state.combo.count(), 0);
        assert!(state.events.contains(&GameEvent::PlayerHit { lives_left: 4 }));
        assert_eq!(state.feedback.flash.color(), FlashColor::Red);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_dash_grants_invulnerability() {
        let mut state = quiet_state();
        let dash = TickInput {
            right: true,
            dash_pressed: true,
            ..Default::default()
        };
        tick(&mut state, &dash, DT);
        assert!(state.player.is_dashing());
        assert!(state.events.contains(&GameEvent::Dashed));

        let obstacle = obstacle_on_player(&state);
        state.entities.obstacles.push(obstacle);
        tick(&mut state, &idle(), DT);
        assert_eq!(state.player.lives, 5);
        assert_eq!(state.entities.obstacles.len(), 1);
    }

    #[test]
    fn test_shield_absorbs_contact() {
        let mut state = quiet_state();
        let tuning = state.tuning.powerups.clone();
        state.effects.apply(PowerUpKind::Shield, &mut state.player, &tuning);
        let obstacle = obstacle_on_player(&state);
        state.entities.obstacles.push(obstacle);
        tick(&mut state, &idle(), DT);
        assert_eq!(state.player.lives, 5);
        assert!(state.entities.obstacles.is_empty());
        assert!(state.events.contains(&GameEvent::ShieldAbsorbed { count: 1 }));
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::PlayerHit { .. }))
        );
    }

    #[test]
    fn test_pickup_applies_effect() {
        let mut state = quiet_state();
        let p = state.player.rect;
        state.entities.powerups.push(PowerUp {
            rect: Rect::new(p.left(), p.top(), 22.0, 22.0),
            kind: PowerUpKind::Slow,
        });
        tick(&mut state, &idle(), DT);
        assert!(state.entities.powerups.is_empty());
        assert!(state.effects.slow_active());
        assert!(state.obstacle_speed() < 180.0);
        assert!(
            state
                .events
                .contains(&GameEvent::PowerUpCollected(PowerUpKind::Slow))
        );
    }

    #[test]
    fn test_last_life_ends_run_and_restart_resets() {
        let mut state = quiet_state();
        state.player.lives = 1;
        state.ledger.points = 3;
        let obstacle = obstacle_on_player(&state);
        state.entities.obstacles.push(obstacle);
        tick(&mut state, &idle(), DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.lives, 0);
        assert!(state.events.contains(&GameEvent::GameOver { score: 30 }));
        assert!(state.events.contains(&GameEvent::NewHighScore { score: 30 }));
        assert_eq!(state.high_score(), 30);

        // Frozen until restart
        let time = state.ledger.time_score;
        tick(&mut state, &idle(), DT);
        assert_eq!(state.ledger.time_score, time);
        assert!(state.events.is_empty());

        let restart = TickInput {
            restart_pressed: true,
            ..Default::default()
        };
        tick(&mut state, &restart, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.lives, 5);
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 30);
        assert!(state.entities.is_empty());
        assert_eq!(state.events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_entities_stay_inside_despawn_bounds() {
        let mut state = GameState::new(5);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        let (w, h) = (state.tuning.arena.width, state.tuning.arena.height);
        for _ in 0..1200 {
            tick(&mut state, &input, DT);
            let e = &state.entities;
            assert!(e.bullets.iter().all(|b| !b.is_off_screen(w, h)));
            assert!(e.obstacles.iter().all(|o| o.rect.top() <= h));
            assert!(e.powerups.iter().all(|p| p.rect.top() <= h));
            assert!(e.bouncers.iter().all(|b| !b.is_spent()));
        }
    }
}
