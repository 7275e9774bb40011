// Grid State - the authoritative rows x cols table of tile color names

use crate::grid::shape::GridShape;
use crate::grid::traits::{CellDisplay, GridError, GridResult, GridTrait};
use crate::palette::{self, GRIS};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Color every cell takes when a grid is (re)created
pub const DEFAULT_COLOR: &str = GRIS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct GridState {
    shape: GridShape,
    cells: Vec<Vec<String>>,
}

impl GridState {
    /// Every cell set to the default color
    pub fn create_default(shape: GridShape) -> Self {
        Self::filled(shape, DEFAULT_COLOR)
    }

    pub fn filled(shape: GridShape, color: &str) -> Self {
        Self {
            shape,
            cells: vec![vec![color.to_string(); shape.cols]; shape.rows],
        }
    }

    /// Build a grid by asking `color_at(row, col)` for every cell
    pub fn from_fn<F, S>(shape: GridShape, mut color_at: F) -> Self
    where
        F: FnMut(usize, usize) -> S,
        S: Into<String>,
    {
        let cells = (0..shape.rows)
            .map(|row| (0..shape.cols).map(|col| color_at(row, col).into()).collect())
            .collect();
        Self { shape, cells }
    }

    /// Build a grid from an editor table; rows must be non-empty and equally long
    pub fn from_table(table: Vec<Vec<String>>) -> GridResult<Self> {
        let rows = table.len();
        let cols = table.first().map(|row| row.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidSnapshot("table is empty".to_string()));
        }
        if let Some((idx, row)) = table.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(GridError::InvalidSnapshot(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.len(),
                cols
            )));
        }
        Ok(Self {
            shape: GridShape::new(rows, cols),
            cells: table,
        })
    }

    /// Same shape keeps the current grid; any change discards it for a default grid
    pub fn resize_if_needed(current: GridState, current_shape: GridShape, new_shape: GridShape) -> GridState {
        Self::resize_with(current, current_shape, new_shape, DEFAULT_COLOR)
    }

    /// Like [`GridState::resize_if_needed`], filling a reset grid with `fill`
    pub fn resize_with(
        current: GridState,
        current_shape: GridShape,
        new_shape: GridShape,
        fill: &str,
    ) -> GridState {
        if !current_shape.requires_reset(&new_shape) {
            debug!("Grid shape unchanged at {}", new_shape);
            return current;
        }
        info!(
            "Grid shape changed {} -> {}, resetting to {}",
            current_shape, new_shape, fill
        );
        Self::filled(new_shape, fill)
    }

    pub fn get(&self, row: usize, col: usize) -> GridResult<&str> {
        self.validate_coordinates(row, col)?;
        Ok(&self.cells[row][col])
    }

    /// Set one cell; the name must exist in the palette
    pub fn set(&mut self, row: usize, col: usize, color: &str) -> GridResult<()> {
        self.validate_coordinates(row, col)?;
        if !palette::standard().contains(color) {
            return Err(GridError::UnknownColor(color.to_string()));
        }
        self.cells[row][col] = color.to_string();
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// (row, col, color) for every cell in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, color)| (row, col, color.as_str()))
        })
    }

    /// Row x col table of names for the editor
    pub fn to_table(&self) -> Vec<Vec<String>> {
        self.cells.clone()
    }

    /// Whether every cell holds `color`
    pub fn is_uniform(&self, color: &str) -> bool {
        self.iter_cells().all(|(_, _, c)| c == color)
    }

    pub fn count_color(&self, color: &str) -> usize {
        self.iter_cells().filter(|(_, _, c)| *c == color).count()
    }

    /// Cells whose name is missing from the palette
    pub fn unknown_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, color)| !palette::standard().contains(color))
            .map(|(row, col, _)| (row, col))
            .collect()
    }
}

/// Empty 0x0 grid
impl Default for GridState {
    fn default() -> Self {
        Self::create_default(GridShape::new(0, 0))
    }
}

impl GridTrait for GridState {
    fn shape(&self) -> GridShape {
        self.shape
    }

    fn color_at(&self, row: usize, col: usize) -> GridResult<&str> {
        self.get(row, col)
    }
}

impl TryFrom<Vec<Vec<String>>> for GridState {
    type Error = GridError;

    fn try_from(table: Vec<Vec<String>>) -> GridResult<Self> {
        Self::from_table(table)
    }
}

impl From<GridState> for Vec<Vec<String>> {
    fn from(state: GridState) -> Self {
        state.cells
    }
}

impl CellDisplay for String {
    fn display_cell(&self) -> &str {
        palette::standard()
            .lookup(self)
            .entry()
            .map(|entry| entry.code)
            .unwrap_or("??")
    }

    fn is_known(&self) -> bool {
        palette::standard().contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{AZUL, ROJO};

    #[test]
    fn test_create_default_is_uniform_gris() {
        let grid = GridState::create_default(GridShape::new(3, 5));
        assert_eq!(grid.shape(), GridShape::new(3, 5));
        assert!(grid.is_uniform(GRIS));
        assert_eq!(grid.count_color(GRIS), 15);
    }

    #[test]
    fn test_default_is_empty() {
        let grid = GridState::default();
        assert_eq!(grid.shape(), GridShape::new(0, 0));
        assert_eq!(grid.iter_cells().count(), 0);
        assert!(grid.unknown_cells().is_empty());
    }

    #[test]
    fn test_resize_same_shape_keeps_state() {
        let shape = GridShape::new(2, 2);
        let mut grid = GridState::create_default(shape);
        grid.set(1, 1, ROJO).unwrap();
        let kept = GridState::resize_if_needed(grid.clone(), shape, shape);
        assert_eq!(kept, grid);
    }

    #[test]
    fn test_resize_new_shape_discards_edits() {
        let old = GridShape::new(2, 2);
        let mut grid = GridState::create_default(old);
        grid.set(0, 0, ROJO).unwrap();
        let new_shape = GridShape::new(3, 2);
        let reset = GridState::resize_if_needed(grid, old, new_shape);
        assert_eq!(reset.shape(), new_shape);
        assert!(reset.is_uniform(GRIS));
    }

    #[test]
    fn test_set_validates_color_and_bounds() {
        let mut grid = GridState::create_default(GridShape::new(2, 3));
        assert_eq!(
            grid.set(0, 0, "Morado"),
            Err(GridError::UnknownColor("Morado".to_string()))
        );
        assert_eq!(
            grid.set(2, 0, AZUL),
            Err(GridError::InvalidCoordinates {
                row: 2,
                col: 0,
                max_row: 1,
                max_col: 2
            })
        );
        grid.set(1, 2, AZUL).unwrap();
        assert_eq!(grid.get(1, 2).unwrap(), AZUL);
    }

    #[test]
    fn test_from_table_rejects_ragged_and_empty() {
        assert!(GridState::from_table(Vec::new()).is_err());
        assert!(GridState::from_table(vec![Vec::new()]).is_err());
        let ragged = vec![
            vec![GRIS.to_string(), GRIS.to_string()],
            vec![GRIS.to_string()],
        ];
        assert!(matches!(
            GridState::from_table(ragged),
            Err(GridError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_table_round_trip_preserves_state() {
        let mut grid = GridState::create_default(GridShape::new(2, 2));
        grid.set(0, 1, AZUL).unwrap();
        let rebuilt = GridState::from_table(grid.to_table()).unwrap();
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_unknown_cells_reported() {
        let grid = GridState::from_table(vec![vec![GRIS.to_string(), "Morado".to_string()]]).unwrap();
        assert_eq!(grid.unknown_cells(), vec![(0, 1)]);
        assert_eq!("Morado".to_string().display_cell(), "??");
        assert_eq!(GRIS.to_string().display_cell(), "Gr");
    }
}
