//! Weapon stat and projectile damage lookup tables
//!
//! Two deliberately independent tables: stats are keyed by the weapon,
//! damage by the projectile it launches. A missing entry in either is a
//! configuration error surfaced at load time, never a silent runtime
//! default.

use crate::combat::projectile::ProjectileKind;
use crate::combat::weapons::{WeaponKind, WeaponStats};
use crate::core::error::{GameError, Result};
use ahash::AHashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct WeaponTables {
    stats: AHashMap<WeaponKind, WeaponStats>,
    damage: AHashMap<ProjectileKind, u32>,
}

impl WeaponTables {
    /// Compiled-in defaults
    pub fn builtin() -> Self {
        let mut stats = AHashMap::new();
        stats.insert(WeaponKind::Pistol, WeaponStats { fire_rate_ms: 400, range_ms: 2000 });
        stats.insert(WeaponKind::Bubbleblaster, WeaponStats { fire_rate_ms: 600, range_ms: 1500 });
        stats.insert(WeaponKind::Carrotcannon, WeaponStats { fire_rate_ms: 900, range_ms: 2500 });
        stats.insert(WeaponKind::Rainbowgun, WeaponStats { fire_rate_ms: 300, range_ms: 3000 });

        let mut damage = AHashMap::new();
        damage.insert(ProjectileKind::Bullet, 1);
        damage.insert(ProjectileKind::Bubble, 5);
        damage.insert(ProjectileKind::Rainbowray, 10);
        damage.insert(ProjectileKind::Carrot, 15);

        let tables = Self { stats, damage };
        debug_assert!(tables.validate().is_ok());
        tables
    }

    /// Load table overrides from a TOML file
    ///
    /// Starts from the builtin tables and replaces any entries present
    /// in the file, then re-validates the result.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse table overrides from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml: toml::Value = content.parse()?;
        let mut tables = Self::builtin();

        if let Some(weapons) = toml.get("weapons").and_then(|v| v.as_table()) {
            for (name, entry) in weapons {
                let kind = weapon_kind_from_key(name)?;
                let table = entry.as_table().ok_or_else(|| {
                    GameError::Config(format!("weapons.{}: expected a table", name))
                })?;
                let fire_rate_ms = read_ms(table, name, "fire_rate_ms")?;
                let range_ms = read_ms(table, name, "range_ms")?;
                tables.stats.insert(kind, WeaponStats { fire_rate_ms, range_ms });
            }
        }

        if let Some(damage) = toml.get("damage").and_then(|v| v.as_table()) {
            for (name, value) in damage {
                let kind = projectile_kind_from_key(name)?;
                let amount = value.as_integer().ok_or_else(|| {
                    GameError::Config(format!("damage.{}: expected an integer", name))
                })?;
                if amount < 0 {
                    return Err(GameError::Config(format!(
                        "damage.{}: must be non-negative, got {}",
                        name, amount
                    )));
                }
                tables.damage.insert(kind, amount as u32);
            }
        }

        tables.validate()?;
        Ok(tables)
    }

    /// Cross-check the two tables
    ///
    /// Every weapon kind must have a stats entry, and the projectile it
    /// launches must have a damage entry. A missing damage key fails
    /// loading instead of silently defaulting.
    pub fn validate(&self) -> Result<()> {
        for kind in WeaponKind::ALL {
            if !self.stats.contains_key(&kind) {
                return Err(GameError::Config(format!(
                    "no weapon stats entry for '{}'",
                    kind.key()
                )));
            }
            let projectile = kind.projectile();
            if !self.damage.contains_key(&projectile) {
                return Err(GameError::Config(format!(
                    "weapon '{}' launches '{}' but no damage entry exists for it",
                    kind.key(),
                    projectile.key()
                )));
            }
        }
        Ok(())
    }

    /// Stats for a weapon kind
    ///
    /// Infallible after `validate`: every kind has an entry.
    pub fn stats(&self, kind: WeaponKind) -> WeaponStats {
        self.stats[&kind]
    }

    /// Damage dealt by a projectile kind
    pub fn damage(&self, kind: ProjectileKind) -> u32 {
        self.damage[&kind]
    }
}

impl Default for WeaponTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn weapon_kind_from_key(name: &str) -> Result<WeaponKind> {
    WeaponKind::ALL
        .into_iter()
        .find(|kind| kind.key() == name)
        .ok_or_else(|| GameError::Config(format!("unknown weapon kind '{}'", name)))
}

fn projectile_kind_from_key(name: &str) -> Result<ProjectileKind> {
    ProjectileKind::ALL
        .into_iter()
        .find(|kind| kind.key() == name)
        .ok_or_else(|| GameError::Config(format!("unknown projectile kind '{}'", name)))
}

fn read_ms(table: &toml::value::Table, section: &str, field: &str) -> Result<u64> {
    let value = table
        .get(field)
        .and_then(|v| v.as_integer())
        .ok_or_else(|| {
            GameError::Config(format!("weapons.{}: missing integer field '{}'", section, field))
        })?;
    if value <= 0 {
        return Err(GameError::Config(format!(
            "weapons.{}.{}: must be positive, got {}",
            section, field, value
        )));
    }
    Ok(value as u64)
}
