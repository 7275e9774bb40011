// Common traits and types shared by the grid containers

use crate::grid::shape::GridShape;
use crate::units::Unit;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    InvalidCoordinates {
        row: usize,
        col: usize,
        max_row: usize,
        max_col: usize,
    },
    ShapeMismatch {
        expected: GridShape,
        found: GridShape,
    },
    UnknownColor(String),
    DimensionBelowMinimum {
        value: f64,
        minimum: f64,
        unit: Unit,
    },
    DimensionAboveMaximum {
        value: f64,
        maximum: f64,
        unit: Unit,
    },
    InvalidSnapshot(String),
    ConfigurationError(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidCoordinates {
                row,
                col,
                max_row,
                max_col,
            } => {
                write!(
                    f,
                    "Invalid coordinates ({}, {}), max is ({}, {})",
                    row, col, max_row, max_col
                )
            }
            GridError::ShapeMismatch { expected, found } => write!(
                f,
                "Shape mismatch: expected {}x{}, found {}x{}",
                expected.rows, expected.cols, found.rows, found.cols
            ),
            GridError::UnknownColor(name) => write!(f, "Unknown color '{}'", name),
            GridError::DimensionBelowMinimum {
                value,
                minimum,
                unit,
            } => write!(
                f,
                "Dimension {} {} is below the minimum of {} {}",
                value,
                unit.label(),
                minimum,
                unit.label()
            ),
            GridError::DimensionAboveMaximum {
                value,
                maximum,
                unit,
            } => write!(
                f,
                "Dimension {} {} is above the maximum of {} {}",
                value,
                unit.label(),
                maximum,
                unit.label()
            ),
            GridError::InvalidSnapshot(msg) => write!(f, "Invalid snapshot: {}", msg),
            GridError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::InvalidSnapshot(err.to_string())
    }
}

/// Common trait for rectangular grids addressed by (row, col)
pub trait GridTrait {
    /// Get the current shape of the grid
    fn shape(&self) -> GridShape;

    /// Get the color name stored in a cell
    fn color_at(&self, row: usize, col: usize) -> GridResult<&str>;

    /// Total number of cells
    fn cell_count(&self) -> usize {
        self.shape().cell_count()
    }

    /// Validate coordinates against grid bounds
    fn validate_coordinates(&self, row: usize, col: usize) -> GridResult<()> {
        let shape = self.shape();
        if row >= shape.rows || col >= shape.cols {
            return Err(GridError::InvalidCoordinates {
                row,
                col,
                max_row: shape.rows.saturating_sub(1),
                max_col: shape.cols.saturating_sub(1),
            });
        }
        Ok(())
    }
}

/// Trait for displaying grid cells
pub trait CellDisplay {
    /// Get the display string for this cell
    fn display_cell(&self) -> &str;

    /// Whether the cell holds a name the palette knows about
    fn is_known(&self) -> bool {
        true
    }
}
