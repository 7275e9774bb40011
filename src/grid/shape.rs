// Grid Dimensioner - converts physical floor size into a tile count

use crate::units::Dimension;
use serde::{Deserialize, Serialize};

/// Physical size of one floor tile, in meters
pub const TILE_PITCH_M: f64 = 0.4;

/// Upper bound on tiles along one axis
pub const MAX_TILES_PER_AXIS: usize = 1000;

/// Number of tile rows and columns covering a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Any difference in rows or cols means the grid must be reallocated
    pub fn requires_reset(&self, other: &GridShape) -> bool {
        self != other
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Shape for a dimension at the standard tile pitch
    pub fn for_dimension(dimension: &Dimension) -> Self {
        dimension_for(dimension.width_m(), dimension.length_m())
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// cols = ceil(width / 0.4), rows = ceil(length / 0.4)
pub fn dimension_for(width_m: f64, length_m: f64) -> GridShape {
    dimension_for_pitch(width_m, length_m, TILE_PITCH_M)
}

/// Same as [`dimension_for`] with an explicit tile pitch
pub fn dimension_for_pitch(width_m: f64, length_m: f64, pitch_m: f64) -> GridShape {
    GridShape {
        rows: tiles_along(length_m, pitch_m),
        cols: tiles_along(width_m, pitch_m),
    }
}

fn tiles_along(extent_m: f64, pitch_m: f64) -> usize {
    let count = (extent_m / pitch_m).ceil();
    // Inputs are validated upstream; degenerate extents still get one tile
    // and oversized ones stop at the axis cap
    if count.is_nan() || count < 1.0 {
        1
    } else if count >= MAX_TILES_PER_AXIS as f64 {
        MAX_TILES_PER_AXIS
    } else {
        count as usize
    }
}
