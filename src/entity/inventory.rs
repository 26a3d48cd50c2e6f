//! Weapon inventory and equip cursor
//!
//! Acquisition order is preserved, duplicates are allowed, and the
//! collection is unbounded. The equip cursor is kept in range by
//! construction: it is `None` exactly while the inventory is empty.

use crate::combat::weapons::WeaponKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    weapons: Vec<WeaponKind>,
    equipped: Option<usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a weapon; the first acquisition auto-equips slot 0
    pub fn acquire(&mut self, weapon: WeaponKind) {
        self.weapons.push(weapon);
        if self.equipped.is_none() {
            self.equipped = Some(0);
        }
    }

    /// Advance the equip cursor cyclically forward by one slot
    ///
    /// No-op on an empty inventory. There is no backward cycle or
    /// direct-select operation.
    pub fn cycle_equip(&mut self) {
        if let Some(index) = self.equipped {
            self.equipped = Some((index + 1) % self.weapons.len());
        }
    }

    /// The currently equipped weapon, if any
    pub fn current_weapon(&self) -> Option<WeaponKind> {
        self.equipped.map(|index| self.weapons[index])
    }

    pub fn equipped_index(&self) -> Option<usize> {
        self.equipped
    }

    /// Acquired weapons in acquisition order (for slot UI rendering)
    pub fn slots(&self) -> &[WeaponKind] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}
