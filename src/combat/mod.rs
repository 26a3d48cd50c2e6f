pub mod projectile;
pub mod resolution;
pub mod tables;
pub mod weapons;

pub use projectile::{Projectile, ProjectileKind};
pub use resolution::{resolve_projectile_hit, HitOutcome};
pub use tables::WeaponTables;
pub use weapons::{WeaponKind, WeaponStats};
