pub mod grid_config;

pub use grid_config::{GridConfig, MIN_TILE_PITCH_M};
