//! Static and collectible level objects

use crate::combat::weapons::WeaponKind;
use crate::core::types::{EntityId, Vec2};
use serde::{Deserialize, Serialize};

/// A bush the player can hide inside
///
/// Enemies hold position while the player is concealed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bush {
    pub pos: Vec2,
}

/// The win tile at the far end of the level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalTile {
    pub pos: Vec2,
}

/// A weapon lying on the ground, collected on overlap
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeaponPickup {
    pub id: EntityId,
    pub kind: WeaponKind,
    pub pos: Vec2,
}

impl WeaponPickup {
    pub fn place(kind: WeaponKind, pos: Vec2) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            pos,
        }
    }
}
