//! Enemy state
//!
//! Enemies have a health pool and no defeat-recovery: a destroyed enemy
//! is removed from the world permanently.

use crate::core::types::{EntityId, Vec2};
use crate::entity::vitality::VitalityPool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub pos: Vec2,
    pub health: VitalityPool,
    /// Whether this enemy's body currently overlaps the player
    ///
    /// Transition edges on this flag arm and cancel the contact drain
    /// schedule; at most one schedule per enemy is ever active.
    pub in_contact: bool,
}

impl Enemy {
    pub fn spawn(pos: Vec2, max_health: f32) -> Self {
        Self {
            id: EntityId::new(),
            pos,
            health: VitalityPool::full(max_health),
            in_contact: false,
        }
    }
}
