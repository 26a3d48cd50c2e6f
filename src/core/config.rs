//! Gameplay configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for one level of the game
///
/// These values set the default level's pacing.
/// Changing them will affect difficulty and feel.
#[derive(Debug, Clone)]
pub struct GameplayConfig {
    // === WORLD ===
    /// Width of the scrollable world in pixels
    pub world_width: f32,

    /// Height of the world in pixels (one screen, no vertical scroll)
    pub world_height: f32,

    /// Milliseconds of simulation time one tick advances
    ///
    /// The host engine calls `tick` once per frame; 16ms approximates
    /// a 60Hz update loop.
    pub frame_interval_ms: u64,

    // === MOVEMENT ===
    /// Player speed in pixels per second, applied per axis
    pub player_speed: f32,

    /// Speed multiplier granted while sprinting with stamina available
    pub sprint_multiplier: f32,

    /// Enemy pursuit speed in pixels per second
    ///
    /// Deliberately below walking speed so the player can always
    /// outrun a chasing enemy.
    pub enemy_speed: f32,

    /// Projectile speed in pixels per second
    pub projectile_speed: f32,

    // === VITALITY ===
    /// Health pool maximum for both player and enemies
    pub max_health: f32,

    /// Stamina pool maximum
    pub max_stamina: f32,

    /// Stamina drained per tick while sprinting
    pub stamina_drain_per_tick: f32,

    /// Stamina regenerated per tick while not sprinting
    ///
    /// Half the drain rate: recovering from a full sprint takes twice
    /// as long as the sprint itself.
    pub stamina_regen_per_tick: f32,

    /// Stamina floor below which the sprint multiplier is withheld
    pub sprint_min_stamina: f32,

    // === CONTACT DAMAGE ===
    /// Interval between contact drain applications in milliseconds
    ///
    /// While an enemy body overlaps the player, health drops by
    /// `contact_drain_damage` once per interval. Independent of the
    /// projectile damage table.
    pub contact_drain_interval_ms: u64,

    /// Health removed per contact drain application
    pub contact_drain_damage: u32,

    // === SPAWNING ===
    /// Interval between periodic weapon pickup drops in milliseconds
    ///
    /// The spawn task runs for the lifetime of the level with no stop
    /// condition.
    pub pickup_spawn_interval_ms: u64,

    /// Number of bushes placed at level start
    pub bush_count: usize,

    /// Number of enemies placed at level start
    pub enemy_count: usize,

    // === OVERLAP RADII ===
    /// Player body radius in pixels
    pub player_radius: f32,

    /// Enemy body radius in pixels
    pub enemy_radius: f32,

    /// Projectile radius in pixels
    pub projectile_radius: f32,

    /// Bush concealment radius in pixels
    pub bush_radius: f32,

    /// Weapon pickup collect radius in pixels
    pub pickup_radius: f32,

    /// Goal tile radius in pixels
    pub goal_radius: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            // World (side-scrolling strip, 4 screens wide)
            world_width: 3200.0,
            world_height: 600.0,
            frame_interval_ms: 16,

            // Movement
            player_speed: 160.0,
            sprint_multiplier: 1.5,
            enemy_speed: 50.0,
            projectile_speed: 300.0,

            // Vitality
            max_health: 100.0,
            max_stamina: 100.0,
            stamina_drain_per_tick: 1.0,
            stamina_regen_per_tick: 0.5,
            sprint_min_stamina: 1.0,

            // Contact damage
            contact_drain_interval_ms: 100,
            contact_drain_damage: 1,

            // Spawning
            pickup_spawn_interval_ms: 5000,
            bush_count: 10,
            enemy_count: 5,

            // Overlap radii
            player_radius: 16.0,
            enemy_radius: 16.0,
            projectile_radius: 4.0,
            bush_radius: 24.0,
            pickup_radius: 16.0,
            goal_radius: 32.0,
        }
    }
}

impl GameplayConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err("World dimensions must be positive".into());
        }

        if self.frame_interval_ms == 0 {
            return Err("frame_interval_ms must be positive".into());
        }

        if self.sprint_multiplier < 1.0 {
            return Err(format!(
                "sprint_multiplier ({}) should be >= 1.0, otherwise sprinting slows the player",
                self.sprint_multiplier
            ));
        }

        if self.contact_drain_interval_ms == 0 {
            return Err("contact_drain_interval_ms must be positive".into());
        }

        // Contact drain must tick slower than frames, or overlap
        // transitions can never cancel a pending drain in time
        if self.contact_drain_interval_ms < self.frame_interval_ms {
            return Err(format!(
                "contact_drain_interval_ms ({}) should be >= frame_interval_ms ({})",
                self.contact_drain_interval_ms, self.frame_interval_ms
            ));
        }

        if self.stamina_drain_per_tick <= 0.0 || self.stamina_regen_per_tick <= 0.0 {
            return Err("Stamina rates must be positive".into());
        }

        Ok(())
    }
}
