//! Weapon kinds and their static stats
//!
//! A weapon is entirely described by its kind: stats are looked up, never
//! stored per instance, so an acquired weapon is immutable by construction.

use crate::combat::projectile::ProjectileKind;
use serde::{Deserialize, Serialize};

/// The four collectible weapons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Pistol,
    Bubbleblaster,
    Carrotcannon,
    Rainbowgun,
}

impl WeaponKind {
    /// All kinds, for table validation and random pickup selection
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Pistol,
        WeaponKind::Bubbleblaster,
        WeaponKind::Carrotcannon,
        WeaponKind::Rainbowgun,
    ];

    /// The projectile this weapon launches
    ///
    /// Damage is keyed by the projectile, not the weapon; the two
    /// tables are cross-checked at load time.
    pub fn projectile(&self) -> ProjectileKind {
        match self {
            WeaponKind::Pistol => ProjectileKind::Bullet,
            WeaponKind::Bubbleblaster => ProjectileKind::Bubble,
            WeaponKind::Carrotcannon => ProjectileKind::Carrot,
            WeaponKind::Rainbowgun => ProjectileKind::Rainbowray,
        }
    }

    /// Table key used in TOML override files
    pub fn key(&self) -> &'static str {
        match self {
            WeaponKind::Pistol => "pistol",
            WeaponKind::Bubbleblaster => "bubbleblaster",
            WeaponKind::Carrotcannon => "carrotcannon",
            WeaponKind::Rainbowgun => "rainbowgun",
        }
    }
}

/// Static per-kind weapon stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Minimum interval between shots in milliseconds
    pub fire_rate_ms: u64,
    /// Projectile lifetime in milliseconds (effective range at fixed speed)
    pub range_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_weapon_has_distinct_projectile() {
        let mut kinds: Vec<ProjectileKind> =
            WeaponKind::ALL.iter().map(|w| w.projectile()).collect();
        kinds.sort_by_key(|k| format!("{:?}", k));
        kinds.dedup();
        assert_eq!(kinds.len(), WeaponKind::ALL.len());
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = WeaponKind::ALL.iter().map(|w| w.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
