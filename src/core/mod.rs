pub mod config;
pub mod error;
pub mod types;

pub use config::GameplayConfig;
pub use error::{GameError, Result};
