//! Events generated during a tick
//!
//! These are returned by `LevelSession::tick` so the host layer can
//! update visuals (spawn and remove sprites, refresh bars) without
//! polling every entity.

use crate::combat::projectile::ProjectileKind;
use crate::combat::weapons::WeaponKind;
use crate::core::types::{EntityId, Tick, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A weapon pickup appeared in the world
    PickupSpawned {
        id: EntityId,
        kind: WeaponKind,
        pos: Vec2,
    },
    /// The player collected a pickup into inventory slot `slot`
    WeaponCollected {
        id: EntityId,
        kind: WeaponKind,
        slot: usize,
    },
    /// The equip cursor moved
    WeaponSwitched { slot: usize, kind: WeaponKind },
    /// A projectile was fired
    ProjectileFired {
        id: EntityId,
        kind: ProjectileKind,
        pos: Vec2,
    },
    /// A projectile reached the end of its flight time without hitting
    ProjectileExpired { id: EntityId },
    /// An enemy was hit but survived; refresh its health indicator
    EnemyDamaged { id: EntityId, remaining: f32 },
    /// An enemy's health reached zero; remove its visuals
    EnemyDestroyed { id: EntityId },
    /// The player took damage; refresh the health bar
    PlayerDamaged { remaining: f32 },
    /// Health reached zero; terminal until restart
    PlayerDefeated { tick: Tick },
    /// The player reached the goal tile
    LevelWon { tick: Tick },
}

/// Level outcome, terminal once it leaves `InProgress`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Defeated,
}
