// Grid module - shape computation, the color grid itself, and edit merging

pub mod merge;
pub mod shape;
pub mod state;
pub mod traits;

// Re-export the main grid types for easy access
pub use merge::{changed_cells, merge_edits, try_merge};
pub use shape::{dimension_for, dimension_for_pitch, GridShape, MAX_TILES_PER_AXIS, TILE_PITCH_M};
pub use state::{GridState, DEFAULT_COLOR};
pub use traits::{CellDisplay, GridError, GridResult, GridTrait};

// Re-export common types used by all grids
pub use crate::config::GridConfig;
