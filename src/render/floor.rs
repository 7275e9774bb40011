// Floor Renderer - turns a grid plus decorations into positioned rectangles
//
// Row 0 of the grid is drawn at the top, so array row r lands at y = rows - 1 - r.
// Tiles come first; borders and corners follow so they paint over the tiles.

use super::decorations::{BorderConfig, CornerConfig};
use super::primitives::{PrimitiveKind, RenderPrimitive, Side, Viewport};
use crate::grid::{GridState, GridTrait};
use crate::palette::{self, ColorLookup, Palette, Rgb};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Thickness of a border strip, in tile units
pub const BORDER_THICKNESS: f64 = 0.15;
/// Side length of a corner cap, in tile units
pub const CORNER_SIZE: f64 = 0.15;
/// Fill for borders and corners
pub const DECORATION_COLOR: Rgb = Rgb::BLACK;
/// Outline drawn around every tile
pub const TILE_OUTLINE: Rgb = Rgb::BLACK;

/// Everything the drawing surface needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub primitives: Vec<RenderPrimitive>,
    pub viewport: Viewport,
}

impl FloorPlan {
    pub fn tiles(&self) -> impl Iterator<Item = &RenderPrimitive> {
        self.primitives.iter().filter(|p| p.is_tile())
    }

    pub fn borders(&self) -> impl Iterator<Item = &RenderPrimitive> {
        self.primitives.iter().filter(|p| p.is_border())
    }

    pub fn corners(&self) -> impl Iterator<Item = &RenderPrimitive> {
        self.primitives.iter().filter(|p| p.is_corner())
    }
}

/// Fill for a color name, with the explicit fallback step for unknown names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFill {
    Palette(Rgb),
    Fallback(Rgb),
}

impl ResolvedFill {
    pub fn rgb(&self) -> Rgb {
        match self {
            ResolvedFill::Palette(rgb) | ResolvedFill::Fallback(rgb) => *rgb,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedFill::Fallback(_))
    }
}

pub struct FloorRenderer<'a> {
    palette: &'a Palette,
}

impl Default for FloorRenderer<'static> {
    fn default() -> Self {
        Self::new(palette::standard())
    }
}

impl<'a> FloorRenderer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Palette color for `name`, or the neutral fallback when it is unknown
    pub fn resolve_fill(&self, name: &str) -> ResolvedFill {
        match self.palette.lookup(name) {
            ColorLookup::Found(entry) => ResolvedFill::Palette(entry.rgb()),
            ColorLookup::NotFound => ResolvedFill::Fallback(Rgb::fallback()),
        }
    }

    pub fn render(&self, grid: &GridState, borders: &BorderConfig, corners: &CornerConfig) -> FloorPlan {
        let shape = grid.shape();
        let mut primitives = Vec::with_capacity(shape.cell_count() + Side::ALL.len() + 4);

        self.push_tiles(grid, &mut primitives);
        Self::push_borders(shape.rows, shape.cols, borders, &mut primitives);
        if corners.enabled {
            Self::push_corners(shape.rows, shape.cols, &mut primitives);
        }

        debug!(
            "Rendered {} grid into {} primitives",
            shape,
            primitives.len()
        );
        FloorPlan {
            primitives,
            viewport: Viewport::for_grid(shape.rows, shape.cols),
        }
    }

    fn push_tiles(&self, grid: &GridState, out: &mut Vec<RenderPrimitive>) {
        let rows = grid.shape().rows;
        let mut fallbacks = 0usize;
        for (row, col, name) in grid.iter_cells() {
            let fill = self.resolve_fill(name);
            if fill.is_fallback() {
                fallbacks += 1;
            }
            out.push(RenderPrimitive {
                x: col as f64,
                y: (rows - 1 - row) as f64,
                width: 1.0,
                height: 1.0,
                fill: fill.rgb(),
                outline: Some(TILE_OUTLINE),
                kind: PrimitiveKind::Tile { row, col },
            });
        }
        if fallbacks > 0 {
            warn!("{} cells had unknown colors, drawn with fallback", fallbacks);
        }
    }

    fn push_borders(rows: usize, cols: usize, borders: &BorderConfig, out: &mut Vec<RenderPrimitive>) {
        let (rows, cols) = (rows as f64, cols as f64);
        for side in borders.active_sides() {
            let (x, y, width, height) = match side {
                Side::Top => (0.0, rows, cols, BORDER_THICKNESS),
                Side::Bottom => (0.0, -BORDER_THICKNESS, cols, BORDER_THICKNESS),
                Side::Left => (-BORDER_THICKNESS, 0.0, BORDER_THICKNESS, rows),
                Side::Right => (cols, 0.0, BORDER_THICKNESS, rows),
            };
            out.push(RenderPrimitive {
                x,
                y,
                width,
                height,
                fill: DECORATION_COLOR,
                outline: None,
                kind: PrimitiveKind::Border(side),
            });
        }
    }

    fn push_corners(rows: usize, cols: usize, out: &mut Vec<RenderPrimitive>) {
        let (rows, cols) = (rows as f64, cols as f64);
        let half = CORNER_SIZE / 2.0;
        for (cx, cy) in [(0.0, 0.0), (0.0, rows), (cols, 0.0), (cols, rows)] {
            out.push(RenderPrimitive {
                x: cx - half,
                y: cy - half,
                width: CORNER_SIZE,
                height: CORNER_SIZE,
                fill: DECORATION_COLOR,
                outline: None,
                kind: PrimitiveKind::Corner,
            });
        }
    }
}

/// Render with the standard palette
pub fn render_floor(grid: &GridState, borders: &BorderConfig, corners: &CornerConfig) -> FloorPlan {
    FloorRenderer::default().render(grid, borders, corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridShape;
    use crate::palette::{AZUL, GRIS};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tile_count_and_flip() {
        let grid = GridState::create_default(GridShape::new(3, 4));
        let plan = render_floor(&grid, &BorderConfig::none(), &CornerConfig { enabled: false });
        assert_eq!(plan.primitives.len(), 12);
        let top_left = &plan.primitives[0];
        assert_eq!(top_left.kind, PrimitiveKind::Tile { row: 0, col: 0 });
        assert_eq!((top_left.x, top_left.y), (0.0, 2.0));
        let last = plan.primitives.last().unwrap();
        assert_eq!(last.kind, PrimitiveKind::Tile { row: 2, col: 3 });
        assert_eq!((last.x, last.y), (3.0, 0.0));
        assert_eq!(top_left.outline, Some(TILE_OUTLINE));
    }

    #[test]
    fn test_palette_and_fallback_fill() {
        let grid = GridState::from_table(vec![vec![AZUL.to_string(), "Morado".to_string()]]).unwrap();
        let plan = render_floor(&grid, &BorderConfig::none(), &CornerConfig { enabled: false });
        assert_eq!(plan.primitives[0].fill.to_hex(), "#0070C0");
        assert_eq!(plan.primitives[1].fill.to_hex(), palette::FALLBACK_HEX);

        let renderer = FloorRenderer::default();
        assert!(renderer.resolve_fill("Morado").is_fallback());
        assert!(!renderer.resolve_fill(GRIS).is_fallback());
    }

    #[test]
    fn test_border_geometry() {
        let grid = GridState::create_default(GridShape::new(2, 3));
        let plan = render_floor(&grid, &BorderConfig::default(), &CornerConfig { enabled: false });
        let borders: Vec<_> = plan.borders().collect();
        assert_eq!(borders.len(), 4);

        let top = borders[0];
        assert_eq!(top.kind, PrimitiveKind::Border(Side::Top));
        assert_eq!((top.x, top.y, top.width), (0.0, 2.0, 3.0));
        assert!(approx(top.height, BORDER_THICKNESS));

        let bottom = borders[1];
        assert!(approx(bottom.y, -BORDER_THICKNESS));
        assert_eq!(bottom.width, 3.0);

        let left = borders[2];
        assert!(approx(left.x, -BORDER_THICKNESS));
        assert_eq!((left.y, left.height), (0.0, 2.0));

        let right = borders[3];
        assert_eq!((right.x, right.y, right.height), (3.0, 0.0, 2.0));
        assert!(borders.iter().all(|b| b.fill == DECORATION_COLOR));
    }

    #[test]
    fn test_disabled_borders_draw_nothing() {
        let grid = GridState::create_default(GridShape::new(2, 2));
        let borders = BorderConfig {
            enabled: false,
            ..BorderConfig::default()
        };
        let plan = render_floor(&grid, &borders, &CornerConfig { enabled: false });
        assert_eq!(plan.borders().count(), 0);
    }

    #[test]
    fn test_corners_independent_of_sides() {
        let grid = GridState::create_default(GridShape::new(5, 2));
        let no_sides = BorderConfig {
            enabled: true,
            sides: Default::default(),
        };
        let plan = render_floor(&grid, &no_sides, &CornerConfig::default());
        assert_eq!(plan.borders().count(), 0);
        let corners: Vec<_> = plan.corners().collect();
        assert_eq!(corners.len(), 4);
        let centers: Vec<(f64, f64)> = corners
            .iter()
            .map(|c| (c.x + c.width / 2.0, c.y + c.height / 2.0))
            .collect();
        let expected = [(0.0, 0.0), (0.0, 5.0), (2.0, 0.0), (2.0, 5.0)];
        for ((x, y), (ex, ey)) in centers.iter().zip(expected.iter()) {
            assert!(approx(*x, *ex) && approx(*y, *ey));
        }
        assert!(corners.iter().all(|c| approx(c.width, CORNER_SIZE)));
    }

    #[test]
    fn test_decorations_after_tiles() {
        let grid = GridState::create_default(GridShape::new(3, 3));
        let plan = render_floor(&grid, &BorderConfig::default(), &CornerConfig::default());
        let first_decoration = plan.primitives.iter().position(|p| !p.is_tile()).unwrap();
        assert_eq!(first_decoration, 9);
        assert!(plan.primitives[first_decoration..].iter().all(|p| !p.is_tile()));
    }

    #[test]
    fn test_viewport() {
        let grid = GridState::create_default(GridShape::new(4, 6));
        let plan = render_floor(&grid, &BorderConfig::default(), &CornerConfig::default());
        let vp = plan.viewport;
        assert_eq!((vp.x_min, vp.x_max, vp.y_min, vp.y_max), (-0.5, 6.5, -0.5, 4.5));
        assert_eq!((vp.figure_width, vp.figure_height), (3.0, 2.0));
        assert!(plan.primitives.iter().all(|p| vp.contains(p)));
    }
}
