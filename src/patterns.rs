// Pattern Generators - preset rules that fill a whole grid from its shape
//
// Coordinates are 0-indexed with x = column and y = row.

use crate::grid::{GridShape, GridState};
use crate::palette::{AMARILLO, AZUL, CELESTE, GRIS, GRIS_OSCURO, NEGRO, ROJO};
use log::info;
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A rule that colors every cell of a grid
pub trait PatternGenerator {
    /// Color for the cell at column `x`, row `y`
    fn color_at(&self, x: usize, y: usize, shape: GridShape, rng: &mut dyn RngCore) -> &'static str;

    /// Produce a full grid; never reads prior state
    fn generate(&self, shape: GridShape, rng: &mut dyn RngCore) -> GridState {
        GridState::from_fn(shape, |row, col| self.color_at(col, row, shape, rng))
    }
}

/// Each cell independently Negro or Gris
pub struct Speckle;

impl PatternGenerator for Speckle {
    fn color_at(&self, _x: usize, _y: usize, _shape: GridShape, rng: &mut dyn RngCore) -> &'static str {
        [NEGRO, GRIS].choose(rng).copied().unwrap_or(GRIS)
    }
}

/// Rojo outer ring around a Gris Oscuro interior
pub struct BorderedFrame;

impl PatternGenerator for BorderedFrame {
    fn color_at(&self, x: usize, y: usize, shape: GridShape, _rng: &mut dyn RngCore) -> &'static str {
        let on_ring = x == 0 || x + 1 == shape.cols || y == 0 || y + 1 == shape.rows;
        if on_ring {
            ROJO
        } else {
            GRIS_OSCURO
        }
    }
}

/// Amarillo on even (x + y), Negro on odd
pub struct Checkerboard;

impl PatternGenerator for Checkerboard {
    fn color_at(&self, x: usize, y: usize, _shape: GridShape, _rng: &mut dyn RngCore) -> &'static str {
        if (x + y) % 2 == 0 {
            AMARILLO
        } else {
            NEGRO
        }
    }
}

/// Celeste rectangle around the grid center on an Azul field.
/// The radius is counted in cells on each axis, up to 3.
pub struct CenteredSpot;

impl CenteredSpot {
    pub fn center(shape: GridShape) -> (usize, usize) {
        (shape.cols / 2, shape.rows / 2)
    }

    pub fn radius(shape: GridShape) -> (usize, usize) {
        ((shape.cols / 4).min(3), (shape.rows / 4).min(3))
    }
}

impl PatternGenerator for CenteredSpot {
    fn color_at(&self, x: usize, y: usize, shape: GridShape, _rng: &mut dyn RngCore) -> &'static str {
        let (cx, cy) = Self::center(shape);
        let (rx, ry) = Self::radius(shape);
        if x.abs_diff(cx) <= rx && y.abs_diff(cy) <= ry {
            CELESTE
        } else {
            AZUL
        }
    }
}

/// The preset designs offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Speckle,
    BorderedFrame,
    Checkerboard,
    CenteredSpot,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Speckle,
        Pattern::BorderedFrame,
        Pattern::Checkerboard,
        Pattern::CenteredSpot,
    ];

    pub fn generator(&self) -> &'static dyn PatternGenerator {
        match self {
            Pattern::Speckle => &Speckle,
            Pattern::BorderedFrame => &BorderedFrame,
            Pattern::Checkerboard => &Checkerboard,
            Pattern::CenteredSpot => &CenteredSpot,
        }
    }

    pub fn generate(&self, shape: GridShape, rng: &mut dyn RngCore) -> GridState {
        info!("Generating {} for {} grid", self.label(), shape);
        self.generator().generate(shape, rng)
    }

    /// Button caption ("Diseño 1" .. "Diseño 4")
    pub fn label(&self) -> &'static str {
        match self {
            Pattern::Speckle => "Diseño 1",
            Pattern::BorderedFrame => "Diseño 2",
            Pattern::Checkerboard => "Diseño 3",
            Pattern::CenteredSpot => "Diseño 4",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Speckle => "speckle",
            Pattern::BorderedFrame => "frame",
            Pattern::Checkerboard => "checkerboard",
            Pattern::CenteredSpot => "spot",
        }
    }

    /// 1-based preset number as shown on the buttons
    pub fn from_number(n: u32) -> Option<Pattern> {
        Pattern::ALL.get((n as usize).checked_sub(1)?).copied()
    }

    pub fn parse(s: &str) -> Option<Pattern> {
        let s = s.trim().to_lowercase();
        if let Ok(n) = s.parse::<u32>() {
            return Self::from_number(n);
        }
        Pattern::ALL.iter().copied().find(|p| p.name() == s)
    }
}
