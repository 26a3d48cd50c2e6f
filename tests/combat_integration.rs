//! Combat integration tests
//!
//! Table consistency, damage accumulation, and projectile-vs-enemy
//! resolution through a running session.

use meeble_crossing::combat::projectile::ProjectileKind;
use meeble_crossing::combat::tables::WeaponTables;
use meeble_crossing::combat::weapons::WeaponKind;
use meeble_crossing::core::config::GameplayConfig;
use meeble_crossing::core::types::Vec2;
use meeble_crossing::session::LevelSession;
use meeble_crossing::simulation::events::GameEvent;
use meeble_crossing::simulation::tick::FrameInput;

fn quiet_config() -> GameplayConfig {
    let mut config = GameplayConfig::default();
    config.enemy_count = 0;
    config.bush_count = 0;
    config.pickup_spawn_interval_ms = 1_000_000;
    config
}

/// Fire the equipped weapon at a point, waiting out the fire-rate gate
fn fire_at(session: &mut LevelSession, aim: Vec2) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let idle = FrameInput::default();
    let fire = FrameInput {
        fire: true,
        aim,
        ..FrameInput::default()
    };
    events.extend(session.tick(&fire));
    // Let the cooldown lapse before the caller fires again
    for _ in 0..25 {
        events.extend(session.tick(&idle));
    }
    events
}

#[test]
fn test_every_weapon_resolves_damage() {
    let tables = WeaponTables::builtin();
    for kind in WeaponKind::ALL {
        // validate() guarantees these lookups cannot miss
        let stats = tables.stats(kind);
        assert!(stats.fire_rate_ms > 0);
        assert!(stats.range_ms > 0);
        assert!(tables.damage(kind.projectile()) >= 1);
    }
}

#[test]
fn test_damage_is_keyed_by_projectile_not_weapon() {
    let tables = WeaponTables::builtin();
    assert_eq!(tables.damage(ProjectileKind::Bullet), 1);
    assert_eq!(tables.damage(ProjectileKind::Bubble), 5);
    assert_eq!(tables.damage(ProjectileKind::Rainbowray), 10);
    assert_eq!(tables.damage(ProjectileKind::Carrot), 15);
}

/// Enemy at 100 struck by rainbowray three times survives at 70
#[test]
fn test_three_rainbowray_hits_leave_enemy_at_70() {
    let mut session = LevelSession::new(quiet_config(), WeaponTables::builtin(), 3).unwrap();
    session.player.inventory.acquire(WeaponKind::Rainbowgun);
    let enemy_pos = Vec2::new(200.0, 300.0);
    let enemy_id = session.spawn_enemy(enemy_pos);

    for _ in 0..3 {
        fire_at(&mut session, enemy_pos);
    }

    let enemy = session.enemy(enemy_id).expect("enemy should survive");
    assert_eq!(enemy.health.value(), 70.0);
}

/// Ten rainbowray hits destroy the enemy with a single destroy event
#[test]
fn test_ten_rainbowray_hits_destroy_once() {
    let mut session = LevelSession::new(quiet_config(), WeaponTables::builtin(), 3).unwrap();
    session.player.inventory.acquire(WeaponKind::Rainbowgun);
    let enemy_pos = Vec2::new(200.0, 300.0);
    let enemy_id = session.spawn_enemy(enemy_pos);

    let mut destroy_events = 0;
    for _ in 0..10 {
        for event in fire_at(&mut session, enemy_pos) {
            if matches!(event, GameEvent::EnemyDestroyed { id } if id == enemy_id) {
                destroy_events += 1;
            }
        }
    }

    assert_eq!(destroy_events, 1);
    assert!(session.enemy(enemy_id).is_none());
    assert!(!session.is_alive(enemy_id));
}

/// The projectile is consumed on contact even when the enemy survives
#[test]
fn test_projectile_consumed_on_hit() {
    let mut session = LevelSession::new(quiet_config(), WeaponTables::builtin(), 3).unwrap();
    session.player.inventory.acquire(WeaponKind::Pistol);
    let enemy_pos = Vec2::new(200.0, 300.0);
    session.spawn_enemy(enemy_pos);

    fire_at(&mut session, enemy_pos);
    assert_eq!(session.projectile_count(), 0);
}

/// Firing with an empty inventory does nothing
#[test]
fn test_fire_without_weapon_is_noop() {
    let mut session = LevelSession::new(quiet_config(), WeaponTables::builtin(), 3).unwrap();
    let input = FrameInput {
        fire: true,
        aim: Vec2::new(500.0, 300.0),
        ..FrameInput::default()
    };
    let events = session.tick(&input);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::ProjectileFired { .. })));
    assert_eq!(session.projectile_count(), 0);
}

/// Fire rate gates a second shot inside the weapon's interval
#[test]
fn test_fire_rate_gate() {
    let mut session = LevelSession::new(quiet_config(), WeaponTables::builtin(), 3).unwrap();
    session.player.inventory.acquire(WeaponKind::Pistol);
    let input = FrameInput {
        fire: true,
        aim: Vec2::new(3000.0, 300.0),
        ..FrameInput::default()
    };

    let first = session.tick(&input);
    assert!(first
        .iter()
        .any(|e| matches!(e, GameEvent::ProjectileFired { .. })));

    // 16ms later: still inside the pistol's 400ms interval
    let second = session.tick(&input);
    assert!(!second
        .iter()
        .any(|e| matches!(e, GameEvent::ProjectileFired { .. })));
    assert_eq!(session.projectile_count(), 1);
}

/// A missed projectile expires after the weapon's range time
#[test]
fn test_projectile_expires_after_range() {
    let mut session = LevelSession::new(quiet_config(), WeaponTables::builtin(), 3).unwrap();
    session.player.inventory.acquire(WeaponKind::Pistol);
    let input = FrameInput {
        fire: true,
        aim: Vec2::new(100.0, 0.0),
        ..FrameInput::default()
    };
    session.tick(&input);
    assert_eq!(session.projectile_count(), 1);

    // Pistol range is 2000ms; run well past it
    let idle = FrameInput::default();
    let mut expired = false;
    for _ in 0..140 {
        for event in session.tick(&idle) {
            if matches!(event, GameEvent::ProjectileExpired { .. }) {
                expired = true;
            }
        }
    }
    assert!(expired);
    assert_eq!(session.projectile_count(), 0);
}

/// TOML overrides feed straight into session resolution
#[test]
fn test_table_override_changes_lethality() {
    let tables = WeaponTables::from_toml_str(
        r#"
        [damage]
        bullet = 100
        "#,
    )
    .unwrap();
    let mut session = LevelSession::new(quiet_config(), tables, 3).unwrap();
    session.player.inventory.acquire(WeaponKind::Pistol);
    let enemy_pos = Vec2::new(200.0, 300.0);
    let enemy_id = session.spawn_enemy(enemy_pos);

    let events = fire_at(&mut session, enemy_pos);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemyDestroyed { id } if *id == enemy_id)));
}
