use super::primitives::Side;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Border strips ("bordillos") along selected edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderConfig {
    pub enabled: bool,
    pub sides: BTreeSet<Side>,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sides: Side::ALL.into_iter().collect(),
        }
    }
}

impl BorderConfig {
    pub fn none() -> Self {
        Self {
            enabled: false,
            sides: BTreeSet::new(),
        }
    }

    pub fn with_sides<I: IntoIterator<Item = Side>>(sides: I) -> Self {
        Self {
            enabled: true,
            sides: sides.into_iter().collect(),
        }
    }

    /// Add the side if missing, remove it otherwise
    pub fn toggle(&mut self, side: Side) {
        if !self.sides.remove(&side) {
            self.sides.insert(side);
        }
    }

    /// Sides that will actually be drawn, in Top, Bottom, Left, Right order
    pub fn active_sides(&self) -> Vec<Side> {
        if self.enabled {
            self.sides.iter().copied().collect()
        } else {
            Vec::new()
        }
    }
}

/// Corner caps ("esquineros") on the four outer corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerConfig {
    pub enabled: bool,
}

impl Default for CornerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
