//! Projectile hit resolution
//!
//! On contact the projectile is always consumed; whether the target
//! survives depends only on the damage table and its remaining health.

use crate::combat::projectile::ProjectileKind;
use crate::combat::tables::WeaponTables;
use crate::entity::vitality::VitalityPool;

/// Outcome of a projectile striking a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    /// Did this hit empty the target's health pool?
    pub destroyed: bool,
    /// Health remaining after the hit
    pub remaining: f32,
}

/// Apply a projectile's table damage to a target health pool
///
/// Idempotent on an already-empty pool: no state change and
/// `destroyed` stays false, so a destroy event never fires twice.
pub fn resolve_projectile_hit(
    target: &mut VitalityPool,
    kind: ProjectileKind,
    tables: &WeaponTables,
) -> HitOutcome {
    let destroyed = target.apply_damage(tables.damage(kind) as f32);
    HitOutcome {
        destroyed,
        remaining: target.value(),
    }
}
