//! Seeded placement of level objects
//!
//! Bushes and enemies are scattered over the strip past the starting
//! screen, the first pistol lies on the ground ahead of the player, and
//! the goal tile sits at the far right edge.

use crate::core::config::GameplayConfig;
use crate::core::types::Vec2;
use crate::world::objects::{Bush, GoalTile};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Player spawn at the left edge, vertically centered
pub fn player_spawn(config: &GameplayConfig) -> Vec2 {
    Vec2::new(100.0, config.world_height / 2.0)
}

/// The first weapon pickup, placed ahead of the player on the spawn row
pub fn first_pickup_pos(config: &GameplayConfig) -> Vec2 {
    Vec2::new(400.0, config.world_height / 2.0)
}

/// Goal tile near the right world edge
pub fn goal(config: &GameplayConfig) -> GoalTile {
    GoalTile {
        pos: Vec2::new(config.world_width - 50.0, config.world_height / 2.0),
    }
}

/// Scatter bushes between the first screen and the goal
pub fn bushes(config: &GameplayConfig, rng: &mut ChaCha8Rng) -> Vec<Bush> {
    (0..config.bush_count)
        .map(|_| Bush {
            pos: scatter_pos(config, rng, 400.0),
        })
        .collect()
}

/// Enemy spawn positions, kept off the starting screen
pub fn enemy_positions(config: &GameplayConfig, rng: &mut ChaCha8Rng) -> Vec<Vec2> {
    (0..config.enemy_count)
        .map(|_| scatter_pos(config, rng, 800.0))
        .collect()
}

/// A random walkable position for a periodic pickup drop
pub fn pickup_drop_pos(config: &GameplayConfig, rng: &mut ChaCha8Rng) -> Vec2 {
    scatter_pos(config, rng, 400.0)
}

fn scatter_pos(config: &GameplayConfig, rng: &mut ChaCha8Rng, min_x: f32) -> Vec2 {
    let max_x = config.world_width - 200.0;
    let x = rng.gen_range(min_x..max_x);
    let y = rng.gen_range(100.0..config.world_height - 100.0);
    Vec2::new(x, y)
}
