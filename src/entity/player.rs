//! Player state: position, vitality, inventory

use crate::core::config::GameplayConfig;
use crate::core::types::{TimeMs, Vec2};
use crate::entity::inventory::Inventory;
use crate::entity::vitality::{LifeState, Stamina, VitalityPool};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub health: VitalityPool,
    pub stamina: Stamina,
    pub life: LifeState,
    pub inventory: Inventory,
    /// Simulation time of the last shot, for fire-rate gating
    pub last_fired_at: Option<TimeMs>,
}

impl Player {
    pub fn spawn(pos: Vec2, config: &GameplayConfig) -> Self {
        Self {
            pos,
            health: VitalityPool::full(config.max_health),
            stamina: Stamina::full(config.max_stamina),
            life: LifeState::Alive,
            inventory: Inventory::new(),
            last_fired_at: None,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.life == LifeState::Defeated
    }

    /// Apply damage to the player's health pool
    ///
    /// Returns true on the alive -> defeated transition. Idempotent
    /// once defeated.
    pub fn apply_damage(&mut self, amount: f32) -> bool {
        if self.is_defeated() {
            return false;
        }
        if self.health.apply_damage(amount) {
            self.life = LifeState::Defeated;
            return true;
        }
        false
    }
}
