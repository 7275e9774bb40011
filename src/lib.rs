// Garage Grid: floor tile layout designer
// This library sizes a tile grid from floor dimensions, fills it with preset
// patterns or manual edits, and renders tiles, border strips and corner caps.

// Modular structure
pub mod config;
pub mod display;
pub mod grid;
pub mod palette;
pub mod patterns;
pub mod render;
pub mod session;
pub mod units;

// Configuration loading
pub mod designer_config;
pub use designer_config::{DecorationConfig, DesignerConfig, DimensionConfig, DisplayConfig};

// Re-export main types for convenience
pub use config::{GridConfig, MIN_TILE_PITCH_M};
pub use grid::{
    dimension_for, merge_edits, try_merge, CellDisplay, GridError, GridResult, GridShape,
    GridState, GridTrait, MAX_TILES_PER_AXIS, TILE_PITCH_M,
};
pub use palette::{ColorLookup, Palette, PaletteEntry, Rgb};
pub use patterns::{Pattern, PatternGenerator};
pub use render::{
    render_floor, BorderConfig, CornerConfig, FloorPlan, FloorRenderer, PrimitiveKind,
    RenderPrimitive, Side, Viewport,
};
pub use session::{DesignSession, SessionId, SessionStore};
pub use units::{Dimension, Unit};
