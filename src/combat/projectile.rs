//! Projectiles in flight

use crate::core::types::{EntityId, Vec2};
use serde::{Deserialize, Serialize};

/// Projectile variants, one per weapon
///
/// This enum keys the damage table independently of `WeaponKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    Bullet,
    Bubble,
    Carrot,
    Rainbowray,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 4] = [
        ProjectileKind::Bullet,
        ProjectileKind::Bubble,
        ProjectileKind::Carrot,
        ProjectileKind::Rainbowray,
    ];

    /// Table key used in TOML override files
    pub fn key(&self) -> &'static str {
        match self {
            ProjectileKind::Bullet => "bullet",
            ProjectileKind::Bubble => "bubble",
            ProjectileKind::Carrot => "carrot",
            ProjectileKind::Rainbowray => "rainbowray",
        }
    }
}

/// A projectile in flight
///
/// Despawn is scheduled at fire time from the launching weapon's
/// `range_ms`; the scheduled task no-ops if the projectile already hit
/// something.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub velocity: Vec2,
}

impl Projectile {
    pub fn launch(kind: ProjectileKind, pos: Vec2, velocity: Vec2) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            pos,
            velocity,
        }
    }

    /// Advance position by one tick of flight
    pub fn advance(&mut self, dt_secs: f32) {
        self.pos = self.pos + self.velocity * dt_secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_along_velocity() {
        let mut projectile = Projectile::launch(
            ProjectileKind::Bullet,
            Vec2::new(0.0, 0.0),
            Vec2::new(300.0, 0.0),
        );
        projectile.advance(0.016);
        assert!((projectile.pos.x - 4.8).abs() < 0.001);
        assert_eq!(projectile.pos.y, 0.0);
    }
}
