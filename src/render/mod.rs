// Render module - geometry of tiles, border strips and corner caps

pub mod decorations;
pub mod floor;
pub mod primitives;

pub use decorations::{BorderConfig, CornerConfig};
pub use floor::{
    render_floor, FloorPlan, FloorRenderer, ResolvedFill, BORDER_THICKNESS, CORNER_SIZE,
    DECORATION_COLOR, TILE_OUTLINE,
};
pub use primitives::{PrimitiveKind, RenderPrimitive, Side, Viewport};
