use crate::grid::{GridError, GridResult};
use crate::render::{BorderConfig, CornerConfig, Side};
use crate::units::{Dimension, Unit};
use crate::GridConfig;
use serde::{Deserialize, Serialize};

/// Comprehensive configuration for a design session and the binaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DesignerConfig {
    pub grid: GridConfig,
    pub dimensions: DimensionConfig,
    pub decorations: DecorationConfig,
    pub display: DisplayConfig,
}

/// Starting floor size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionConfig {
    pub unit: Unit,
    pub width: f64,
    pub length: f64,
}

impl Default for DimensionConfig {
    fn default() -> Self {
        let dimension = Dimension::default();
        Self {
            unit: dimension.unit,
            width: dimension.width,
            length: dimension.length,
        }
    }
}

impl DimensionConfig {
    pub fn to_dimension(&self) -> GridResult<Dimension> {
        Dimension::new(self.width, self.length, self.unit)
    }
}

/// Border strips and corner caps shown initially
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DecorationConfig {
    pub borders: BorderConfig,
    pub corners: CornerConfig,
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Terminal columns used per tile
    pub cell_width: u16,
    /// Show the palette legend next to the grid
    pub show_legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 3,
            show_legend: true,
        }
    }
}

impl DesignerConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: DesignerConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `GARAGE_*` overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // A unit change resets the sizes to that unit's defaults, like the input widgets
        if let Some(unit) = lookup("GARAGE_UNIT").and_then(|u| Unit::parse(&u)) {
            if unit != self.dimensions.unit {
                self.dimensions.unit = unit;
                self.dimensions.width = unit.default_width();
                self.dimensions.length = unit.default_length();
            }
        }
        if let Some(width) = lookup("GARAGE_WIDTH").and_then(|w| w.parse::<f64>().ok()) {
            self.dimensions.width = width;
        }
        if let Some(length) = lookup("GARAGE_LENGTH").and_then(|l| l.parse::<f64>().ok()) {
            self.dimensions.length = length;
        }

        if let Some(borders) = lookup("GARAGE_BORDERS") {
            self.decorations.borders.enabled = borders.to_lowercase() == "true";
        }
        if let Some(sides) = lookup("GARAGE_BORDER_SIDES") {
            self.decorations.borders.sides = sides.split(',').filter_map(Side::parse).collect();
        }
        if let Some(corners) = lookup("GARAGE_CORNERS") {
            self.decorations.corners.enabled = corners.to_lowercase() == "true";
        }

        if let Some(cell_width) = lookup("GARAGE_CELL_WIDTH").and_then(|w| w.parse::<u16>().ok()) {
            self.display.cell_width = cell_width;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> GridResult<()> {
        self.grid.validate()?;
        self.dimensions.to_dimension()?;

        if self.display.cell_width == 0 {
            return Err(GridError::ConfigurationError(
                "Cell width must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
