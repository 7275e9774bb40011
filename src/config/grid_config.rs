// Grid configuration: tile pitch and the color fresh grids start with
use crate::grid::{dimension_for_pitch, GridError, GridResult, GridShape, DEFAULT_COLOR, TILE_PITCH_M};
use crate::palette;
use crate::units::Dimension;

/// Smallest tile pitch accepted, in meters
pub const MIN_TILE_PITCH_M: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridConfig {
    pub tile_pitch_m: f64,
    pub default_color: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_pitch_m: TILE_PITCH_M,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl GridConfig {
    pub fn new(tile_pitch_m: f64, default_color: impl Into<String>) -> Self {
        Self {
            tile_pitch_m,
            default_color: default_color.into(),
        }
    }

    pub fn shape_for(&self, dimension: &Dimension) -> GridShape {
        dimension_for_pitch(dimension.width_m(), dimension.length_m(), self.tile_pitch_m)
    }

    pub fn validate(&self) -> GridResult<()> {
        if !(self.tile_pitch_m >= MIN_TILE_PITCH_M) || !self.tile_pitch_m.is_finite() {
            return Err(GridError::ConfigurationError(format!(
                "Tile pitch must be a finite value of at least {} m",
                MIN_TILE_PITCH_M
            )));
        }
        if !palette::standard().contains(&self.default_color) {
            return Err(GridError::UnknownColor(self.default_color.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(GridConfig::new(0.5, "Rojo").validate().is_ok());
        assert!(matches!(
            GridConfig::new(1e-9, "Gris").validate(),
            Err(GridError::ConfigurationError(_))
        ));
        assert!(GridConfig::new(f64::INFINITY, "Gris").validate().is_err());
        assert!(matches!(
            GridConfig::new(0.4, "Morado").validate(),
            Err(GridError::UnknownColor(_))
        ));
    }
}
