//! Tick system - orchestrates one frame of simulation
//!
//! The host engine calls `LevelSession::tick` once per frame with the
//! inputs it polled. One tick advances the clock, drains due scheduled
//! tasks, then applies the gameplay rules in a fixed order: movement,
//! pursuit, weapon actions, projectile flight, overlap resolution, win
//! check. All rules are functions of current state plus this tick's
//! inputs; nothing is event-driven.

use crate::combat::projectile::Projectile;
use crate::combat::resolution::resolve_projectile_hit;
use crate::combat::weapons::WeaponKind;
use crate::core::types::{circles_overlap, EntityId, Vec2};
use crate::session::LevelSession;
use crate::simulation::events::{GameEvent, Outcome};
use crate::simulation::scheduler::TaskKind;
use crate::world::placement;
use rand::Rng;

/// Inputs the host polled for this frame
///
/// `fire` and `switch_weapon` are edge-triggered: the host sends true
/// only on the frame the key went down. `sprint` is level-triggered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Horizontal movement axis in [-1, 1]
    pub move_x: f32,
    /// Vertical movement axis in [-1, 1]
    pub move_y: f32,
    /// World-space point the player is aiming at
    pub aim: Vec2,
    pub sprint: bool,
    pub fire: bool,
    pub switch_weapon: bool,
    pub restart: bool,
}

/// Advance the session by one frame
pub fn run_frame(session: &mut LevelSession, input: &FrameInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Restart consumes the whole frame
    if input.restart {
        session.restart();
        return events;
    }

    // Won and defeated are terminal until restart
    if session.outcome != Outcome::InProgress {
        return events;
    }

    session.current_tick += 1;
    session.now_ms += session.config.frame_interval_ms;

    dispatch_due_tasks(session, &mut events);
    if session.outcome != Outcome::InProgress {
        // Contact drain emptied the health pool this tick
        return events;
    }

    move_player(session, input);
    let concealed = player_concealed(session);
    pursue_player(session, concealed);

    if input.switch_weapon {
        switch_weapon(session, &mut events);
    }
    if input.fire {
        try_fire(session, input, &mut events);
    }

    advance_projectiles(session);
    collect_pickups(session, &mut events);
    resolve_projectile_hits(session, &mut events);
    resolve_body_contact(session);
    check_win(session, &mut events);

    events
}

/// Drain the scheduler and apply each task with a liveness check
fn dispatch_due_tasks(session: &mut LevelSession, events: &mut Vec<GameEvent>) {
    for task in session.scheduler.take_due(session.now_ms) {
        match task.kind {
            TaskKind::DespawnProjectile => {
                let Some(id) = task.target else { continue };
                // Silently no-ops if the projectile already hit something
                if session.destroy_projectile(id) {
                    events.push(GameEvent::ProjectileExpired { id });
                }
            }
            TaskKind::ContactDrain => {
                let Some(enemy_id) = task.target else { continue };
                apply_contact_drain(session, enemy_id, events);
            }
            TaskKind::SpawnPickup => {
                let kind = WeaponKind::ALL[session.rng.gen_range(0..WeaponKind::ALL.len())];
                let pos = placement::pickup_drop_pos(&session.config, &mut session.rng);
                let id = session.spawn_pickup(kind, pos);
                tracing::debug!(?kind, "pickup spawned");
                events.push(GameEvent::PickupSpawned { id, kind, pos });
            }
        }
    }
}

fn apply_contact_drain(session: &mut LevelSession, enemy_id: EntityId, events: &mut Vec<GameEvent>) {
    // Liveness check: the enemy may have been destroyed, or the overlap
    // may have ended, after this task was armed
    let touching = session
        .enemy(enemy_id)
        .map(|e| e.in_contact)
        .unwrap_or(false);
    if !touching {
        session.scheduler.cancel(enemy_id, TaskKind::ContactDrain);
        return;
    }

    let before = session.player.health.value();
    let defeated = session
        .player
        .apply_damage(session.config.contact_drain_damage as f32);
    if session.player.health.value() < before {
        events.push(GameEvent::PlayerDamaged {
            remaining: session.player.health.value(),
        });
    }
    if defeated {
        session.outcome = Outcome::Defeated;
        tracing::info!(tick = session.current_tick, "player defeated");
        events.push(GameEvent::PlayerDefeated {
            tick: session.current_tick,
        });
    }
}

fn move_player(session: &mut LevelSession, input: &FrameInput) {
    let config = &session.config;
    let sprint_granted = session.player.stamina.tick(input.sprint, config);

    let mut speed = config.player_speed;
    if sprint_granted {
        speed *= config.sprint_multiplier;
    }

    let dt = config.frame_interval_ms as f32 / 1000.0;
    let pos = session.player.pos;
    session.player.pos = Vec2::new(
        (pos.x + input.move_x.clamp(-1.0, 1.0) * speed * dt).clamp(0.0, config.world_width),
        (pos.y + input.move_y.clamp(-1.0, 1.0) * speed * dt).clamp(0.0, config.world_height),
    );
}

/// Is the player hidden inside a bush this frame?
fn player_concealed(session: &LevelSession) -> bool {
    let pos = session.player.pos;
    session
        .bushes
        .iter()
        .any(|bush| pos.distance(&bush.pos) <= session.config.bush_radius)
}

/// Enemies steer toward the player unless the player is concealed
fn pursue_player(session: &mut LevelSession, concealed: bool) {
    if concealed {
        return;
    }
    let target = session.player.pos;
    let step = session.config.enemy_speed * session.config.frame_interval_ms as f32 / 1000.0;
    for enemy in session.enemies.values_mut() {
        let dir = enemy.pos.direction_to(&target);
        enemy.pos = enemy.pos + dir * step;
    }
}

fn switch_weapon(session: &mut LevelSession, events: &mut Vec<GameEvent>) {
    session.player.inventory.cycle_equip();
    if let (Some(slot), Some(kind)) = (
        session.player.inventory.equipped_index(),
        session.player.inventory.current_weapon(),
    ) {
        events.push(GameEvent::WeaponSwitched { slot, kind });
    }
}

fn try_fire(session: &mut LevelSession, input: &FrameInput, events: &mut Vec<GameEvent>) {
    // No-op with nothing equipped
    let Some(kind) = session.player.inventory.current_weapon() else {
        return;
    };

    let stats = session.tables.stats(kind);
    if let Some(last) = session.player.last_fired_at {
        if session.now_ms.saturating_sub(last) < stats.fire_rate_ms {
            return;
        }
    }
    session.player.last_fired_at = Some(session.now_ms);

    let mut dir = session.player.pos.direction_to(&input.aim);
    if dir.length() < 0.5 {
        // Aim point on top of the player: default to facing right
        dir = Vec2::new(1.0, 0.0);
    }

    let pos = session.player.pos;
    let projectile = Projectile::launch(
        kind.projectile(),
        pos,
        dir * session.config.projectile_speed,
    );
    let id = session.spawn_projectile(projectile);
    session.scheduler.schedule_once(
        session.now_ms + stats.range_ms,
        Some(id),
        TaskKind::DespawnProjectile,
    );
    tracing::debug!(?kind, "projectile fired");
    events.push(GameEvent::ProjectileFired {
        id,
        kind: kind.projectile(),
        pos,
    });
}

fn advance_projectiles(session: &mut LevelSession) {
    let dt = session.config.frame_interval_ms as f32 / 1000.0;
    for projectile in session.projectiles.values_mut() {
        projectile.advance(dt);
    }
}

fn collect_pickups(session: &mut LevelSession, events: &mut Vec<GameEvent>) {
    let overlapping: Vec<EntityId> = session
        .pickups
        .values()
        .filter(|p| {
            circles_overlap(
                session.player.pos,
                session.config.player_radius,
                p.pos,
                session.config.pickup_radius,
            )
        })
        .map(|p| p.id)
        .collect();

    for id in overlapping {
        if let Some(kind) = session.collect_pickup(id) {
            session.player.inventory.acquire(kind);
            let slot = session.player.inventory.len() - 1;
            tracing::info!(?kind, slot, "weapon collected");
            events.push(GameEvent::WeaponCollected { id, kind, slot });
        }
    }
}

fn resolve_projectile_hits(session: &mut LevelSession, events: &mut Vec<GameEvent>) {
    // Pair each projectile with the first enemy it overlaps
    let mut pairs = Vec::new();
    for projectile in session.projectiles.values() {
        for enemy in session.enemies.values() {
            if circles_overlap(
                projectile.pos,
                session.config.projectile_radius,
                enemy.pos,
                session.config.enemy_radius,
            ) {
                pairs.push((projectile.id, projectile.kind, enemy.id));
                break;
            }
        }
    }

    for (projectile_id, kind, enemy_id) in pairs {
        // The projectile is always consumed, whatever the outcome
        if !session.destroy_projectile(projectile_id) {
            continue;
        }
        let Some(enemy) = session.enemies.get_mut(&enemy_id) else {
            continue;
        };
        let outcome = resolve_projectile_hit(&mut enemy.health, kind, &session.tables);
        if outcome.destroyed {
            session.destroy_enemy(enemy_id);
            tracing::info!(id = ?enemy_id, "enemy destroyed");
            events.push(GameEvent::EnemyDestroyed { id: enemy_id });
        } else {
            events.push(GameEvent::EnemyDamaged {
                id: enemy_id,
                remaining: outcome.remaining,
            });
        }
    }
}

/// Track overlap edges between the player and each enemy body
///
/// A fresh drain schedule is armed each time a new overlap begins, and
/// cancelled as soon as the overlap ends. The `has_task` guard keeps at
/// most one schedule per enemy.
fn resolve_body_contact(session: &mut LevelSession) {
    let player_pos = session.player.pos;
    let player_radius = session.config.player_radius;
    let enemy_radius = session.config.enemy_radius;
    let interval = session.config.contact_drain_interval_ms;
    let now = session.now_ms;

    for enemy in session.enemies.values_mut() {
        let overlap = circles_overlap(player_pos, player_radius, enemy.pos, enemy_radius);
        if overlap && !enemy.in_contact {
            enemy.in_contact = true;
            if !session.scheduler.has_task(enemy.id, TaskKind::ContactDrain) {
                session.scheduler.schedule_every(
                    now + interval,
                    interval,
                    Some(enemy.id),
                    TaskKind::ContactDrain,
                );
            }
        } else if !overlap && enemy.in_contact {
            enemy.in_contact = false;
            session.scheduler.cancel(enemy.id, TaskKind::ContactDrain);
        }
    }
}

fn check_win(session: &mut LevelSession, events: &mut Vec<GameEvent>) {
    if circles_overlap(
        session.player.pos,
        session.config.player_radius,
        session.goal.pos,
        session.config.goal_radius,
    ) {
        session.outcome = Outcome::Won;
        tracing::info!(tick = session.current_tick, "level won");
        events.push(GameEvent::LevelWon {
            tick: session.current_tick,
        });
    }
}
