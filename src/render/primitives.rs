use crate::palette::Rgb;
use serde::{Deserialize, Serialize};

/// Edge of the tiled area that can carry a border strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Label shown in the side selector
    pub fn label(&self) -> &'static str {
        match self {
            Side::Top => "Arriba",
            Side::Bottom => "Abajo",
            Side::Left => "Izquierda",
            Side::Right => "Derecha",
        }
    }

    pub fn parse(s: &str) -> Option<Side> {
        match s.trim().to_lowercase().as_str() {
            "top" | "arriba" => Some(Side::Top),
            "bottom" | "abajo" => Some(Side::Bottom),
            "left" | "izquierda" => Some(Side::Left),
            "right" | "derecha" => Some(Side::Right),
            _ => None,
        }
    }
}

/// What a primitive stands for in the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Tile { row: usize, col: usize },
    Border(Side),
    Corner,
}

/// Axis-aligned filled rectangle in grid units; (x, y) is the lower-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub outline: Option<Rgb>,
    pub kind: PrimitiveKind,
}

impl RenderPrimitive {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_tile(&self) -> bool {
        matches!(self.kind, PrimitiveKind::Tile { .. })
    }

    pub fn is_border(&self) -> bool {
        matches!(self.kind, PrimitiveKind::Border(_))
    }

    pub fn is_corner(&self) -> bool {
        matches!(self.kind, PrimitiveKind::Corner)
    }
}

/// Visible window of the drawing surface, drawn at 1:1 aspect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Suggested drawing size, half a unit per tile on each axis
    pub figure_width: f64,
    pub figure_height: f64,
}

impl Viewport {
    pub const MARGIN: f64 = 0.5;

    pub fn for_grid(rows: usize, cols: usize) -> Self {
        Self {
            x_min: -Self::MARGIN,
            x_max: cols as f64 + Self::MARGIN,
            y_min: -Self::MARGIN,
            y_max: rows as f64 + Self::MARGIN,
            figure_width: cols as f64 / 2.0,
            figure_height: rows as f64 / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, primitive: &RenderPrimitive) -> bool {
        primitive.x >= self.x_min
            && primitive.right() <= self.x_max
            && primitive.y >= self.y_min
            && primitive.top() <= self.y_max
    }
}
