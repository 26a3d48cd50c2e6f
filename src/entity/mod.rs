pub mod enemy;
pub mod inventory;
pub mod player;
pub mod vitality;

pub use enemy::Enemy;
pub use inventory::Inventory;
pub use player::Player;
pub use vitality::{LifeState, Stamina, VitalityPool};
