//! Level session - owns all mutable game state
//!
//! One session is one level attempt. The host engine holds a session,
//! feeds it a `FrameInput` per frame, and reads state back out for
//! rendering. There is no ambient global state: everything lives here
//! and is rebuilt on restart.

use crate::combat::projectile::Projectile;
use crate::combat::tables::WeaponTables;
use crate::combat::weapons::WeaponKind;
use crate::core::config::GameplayConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{EntityId, Tick, TimeMs, Vec2};
use crate::entity::enemy::Enemy;
use crate::entity::player::Player;
use crate::simulation::events::Outcome;
use crate::simulation::scheduler::{Scheduler, TaskKind};
use crate::world::objects::{Bush, GoalTile, WeaponPickup};
use crate::world::placement;
use ahash::AHashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Read model for the host UI layer: bars, inventory slots, end-of-level text
#[derive(Debug, Clone, Serialize)]
pub struct UiSnapshot {
    pub tick: Tick,
    pub health: f32,
    pub max_health: f32,
    pub stamina: f32,
    pub inventory: Vec<WeaponKind>,
    pub equipped: Option<usize>,
    pub outcome: Outcome,
}

/// What class of entity an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    Enemy,
    Projectile,
    Pickup,
}

/// All mutable state for one level attempt
pub struct LevelSession {
    pub config: GameplayConfig,
    pub tables: WeaponTables,
    seed: u64,
    pub current_tick: Tick,
    /// Simulation clock in milliseconds since level start
    pub now_ms: TimeMs,
    pub(crate) rng: ChaCha8Rng,
    pub player: Player,
    pub(crate) enemies: AHashMap<EntityId, Enemy>,
    pub(crate) pickups: AHashMap<EntityId, WeaponPickup>,
    pub(crate) projectiles: AHashMap<EntityId, Projectile>,
    pub bushes: Vec<Bush>,
    pub goal: GoalTile,
    pub(crate) scheduler: Scheduler,
    /// Liveness registry; scheduled tasks consult this before mutating
    registry: AHashMap<EntityId, EntityClass>,
    pub(crate) outcome: Outcome,
}

impl LevelSession {
    /// Create a session after validating config and tables
    pub fn new(config: GameplayConfig, tables: WeaponTables, seed: u64) -> Result<Self> {
        config.validate().map_err(GameError::Config)?;
        tables.validate()?;
        Ok(Self::build(config, tables, seed))
    }

    /// Full reset to initial values, same layout seed
    pub fn restart(&mut self) {
        tracing::info!(seed = self.seed, "restarting level");
        *self = Self::build(self.config.clone(), self.tables.clone(), self.seed);
    }

    fn build(config: GameplayConfig, tables: WeaponTables, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let player = Player::spawn(placement::player_spawn(&config), &config);
        let bushes = placement::bushes(&config, &mut rng);
        let goal = placement::goal(&config);
        let enemy_positions = placement::enemy_positions(&config, &mut rng);
        let first_pickup = placement::first_pickup_pos(&config);
        let max_health = config.max_health;
        let spawn_interval = config.pickup_spawn_interval_ms;

        let mut session = Self {
            config,
            tables,
            seed,
            current_tick: 0,
            now_ms: 0,
            rng,
            player,
            enemies: AHashMap::new(),
            pickups: AHashMap::new(),
            projectiles: AHashMap::new(),
            bushes,
            goal,
            scheduler: Scheduler::new(),
            registry: AHashMap::new(),
            outcome: Outcome::InProgress,
        };

        for pos in enemy_positions {
            session.spawn_enemy_with_health(pos, max_health);
        }
        session.spawn_pickup(WeaponKind::Pistol, first_pickup);

        // Runs for the lifetime of the level; no stop condition
        session
            .scheduler
            .schedule_every(spawn_interval, spawn_interval, None, TaskKind::SpawnPickup);

        session
    }

    /// Advance one frame; see `simulation::tick`
    pub fn tick(
        &mut self,
        input: &crate::simulation::tick::FrameInput,
    ) -> Vec<crate::simulation::events::GameEvent> {
        crate::simulation::tick::run_frame(self, input)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Is this entity still in the world?
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.registry.contains_key(&id)
    }

    // === SPAWNING ===

    pub fn spawn_enemy(&mut self, pos: Vec2) -> EntityId {
        self.spawn_enemy_with_health(pos, self.config.max_health)
    }

    fn spawn_enemy_with_health(&mut self, pos: Vec2, max_health: f32) -> EntityId {
        let enemy = Enemy::spawn(pos, max_health);
        let id = enemy.id;
        self.enemies.insert(id, enemy);
        self.registry.insert(id, EntityClass::Enemy);
        id
    }

    pub fn spawn_pickup(&mut self, kind: WeaponKind, pos: Vec2) -> EntityId {
        let pickup = WeaponPickup::place(kind, pos);
        let id = pickup.id;
        self.pickups.insert(id, pickup);
        self.registry.insert(id, EntityClass::Pickup);
        id
    }

    pub(crate) fn spawn_projectile(&mut self, projectile: Projectile) -> EntityId {
        let id = projectile.id;
        self.projectiles.insert(id, projectile);
        self.registry.insert(id, EntityClass::Projectile);
        id
    }

    // === DESTRUCTION (idempotent) ===

    /// Remove an enemy and cancel any tasks targeting it
    ///
    /// Returns false if the enemy was already gone; a second destroy
    /// is a no-op.
    pub(crate) fn destroy_enemy(&mut self, id: EntityId) -> bool {
        if self.registry.remove(&id).is_none() {
            return false;
        }
        self.enemies.remove(&id);
        self.scheduler.cancel_for_target(id);
        true
    }

    pub(crate) fn destroy_projectile(&mut self, id: EntityId) -> bool {
        if self.registry.remove(&id).is_none() {
            return false;
        }
        self.projectiles.remove(&id);
        self.scheduler.cancel_for_target(id);
        true
    }

    /// Remove a pickup, returning its weapon kind if it was still there
    pub(crate) fn collect_pickup(&mut self, id: EntityId) -> Option<WeaponKind> {
        self.registry.remove(&id)?;
        self.pickups.remove(&id).map(|p| p.kind)
    }

    // === READ SIDE (for the host renderer) ===

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.values()
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.get(&id)
    }

    pub fn pickups(&self) -> impl Iterator<Item = &WeaponPickup> {
        self.pickups.values()
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.values()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn pickup_count(&self) -> usize {
        self.pickups.len()
    }

    /// Everything the host UI needs to render bars and inventory slots
    pub fn ui_snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            tick: self.current_tick,
            health: self.player.health.value(),
            max_health: self.player.health.max(),
            stamina: self.player.stamina.value(),
            inventory: self.player.inventory.slots().to_vec(),
            equipped: self.player.inventory.equipped_index(),
            outcome: self.outcome,
        }
    }

    /// JSON form of the snapshot, for hosts across an FFI or IPC boundary
    pub fn ui_snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.ui_snapshot())?)
    }
}
