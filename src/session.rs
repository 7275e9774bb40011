//! Per-user design session: the explicit state object the recomputation
//! pipeline (dimension -> shape -> possible reset -> render) runs against.
//!
//! A session exclusively owns its grid. [`SessionStore`] keeps many sessions
//! side by side without letting them share state.

use crate::config::GridConfig;
use crate::designer_config::DesignerConfig;
use crate::grid::{merge_edits, GridResult, GridShape, GridState, GridTrait};
use crate::patterns::Pattern;
use crate::render::{BorderConfig, CornerConfig, FloorPlan, FloorRenderer, Side};
use crate::units::{Dimension, Unit};
use dashmap::DashMap;
use log::{debug, info, warn};
use rand::RngCore;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct DesignSession {
    config: DesignerConfig,
    dimension: Dimension,
    shape: GridShape,
    grid: GridState,
    borders: BorderConfig,
    corners: CornerConfig,
    /// Snapshot from the editor not yet adopted
    pending_edit: Option<GridState>,
}

impl DesignSession {
    /// Build a session from configured defaults. An invalid grid config falls
    /// back to [`GridConfig::default`] and configured sizes outside the unit's
    /// range fall back to that unit's defaults.
    pub fn new(mut config: DesignerConfig) -> Self {
        if let Err(e) = config.grid.validate() {
            warn!("Ignoring configured grid settings: {}", e);
            config.grid = GridConfig::default();
        }
        let dimension = config.dimensions.to_dimension().unwrap_or_else(|e| {
            warn!("Ignoring configured dimensions: {}", e);
            Dimension::defaults(config.dimensions.unit)
        });
        let shape = config.grid.shape_for(&dimension);
        let grid = GridState::filled(shape, &config.grid.default_color);
        info!(
            "New session {}x{} {} -> {} grid",
            dimension.width,
            dimension.length,
            dimension.unit.symbol(),
            shape
        );
        Self {
            borders: config.decorations.borders.clone(),
            corners: config.decorations.corners,
            config,
            dimension,
            shape,
            grid,
            pending_edit: None,
        }
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn borders(&self) -> &BorderConfig {
        &self.borders
    }

    pub fn corners(&self) -> &CornerConfig {
        &self.corners
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    pub fn area_m2(&self) -> f64 {
        self.dimension.area_m2()
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending_edit.is_some()
    }

    /// Recompute the shape; a changed shape resets the grid and drops any
    /// staged edit. Returns whether a reset happened.
    pub fn set_dimension(&mut self, dimension: Dimension) -> bool {
        let new_shape = self.config.grid.shape_for(&dimension);
        self.dimension = dimension;
        if !self.shape.requires_reset(&new_shape) {
            debug!("Dimension change kept {} grid", self.shape);
            return false;
        }

        let current = std::mem::take(&mut self.grid);
        self.grid = GridState::resize_with(current, self.shape, new_shape, &self.config.grid.default_color);
        self.shape = new_shape;
        if self.pending_edit.take().is_some() {
            info!("Dropped staged edit made under the previous shape");
        }
        true
    }

    /// Switch unit; both inputs return to that unit's defaults
    pub fn set_unit(&mut self, unit: Unit) -> bool {
        let dimension = self.dimension.with_unit(unit);
        self.set_dimension(dimension)
    }

    /// Replace the whole grid with a preset; staged edits are lost
    pub fn apply_pattern(&mut self, pattern: Pattern, rng: &mut dyn RngCore) {
        self.grid = pattern.generate(self.shape, rng);
        if self.pending_edit.take().is_some() {
            info!("{} replaced a staged edit", pattern.label());
        }
    }

    /// Editable copy of the current grid
    pub fn begin_edit(&self) -> GridState {
        self.grid.clone()
    }

    pub fn stage_edit(&mut self, snapshot: GridState) {
        self.pending_edit = Some(snapshot);
    }

    /// Adopt the staged snapshot if its shape still matches.
    /// Returns whether the grid was replaced.
    pub fn commit_edit(&mut self) -> bool {
        let Some(edited) = self.pending_edit.take() else {
            return false;
        };
        let adopted = edited.shape() == self.shape;
        let current = std::mem::take(&mut self.grid);
        self.grid = merge_edits(current, edited);
        adopted
    }

    /// Stage and commit in one step
    pub fn submit_edit(&mut self, snapshot: GridState) -> bool {
        self.stage_edit(snapshot);
        self.commit_edit()
    }

    /// Accept the editor's table as JSON (`[["Gris", ...], ...]`).
    /// Unparseable snapshots are discarded and the grid is kept.
    pub fn submit_edit_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<GridState>(json) {
            Ok(snapshot) => self.submit_edit(snapshot),
            Err(e) => {
                warn!("Discarding edited snapshot: {}", e);
                false
            }
        }
    }

    /// Current grid as the editor's JSON table
    pub fn snapshot_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string(&self.grid)?)
    }

    /// Single-cell edit through the state API
    pub fn set_cell(&mut self, row: usize, col: usize, color: &str) -> GridResult<()> {
        self.grid.set(row, col, color)
    }

    pub fn set_borders_enabled(&mut self, enabled: bool) {
        self.borders.enabled = enabled;
    }

    pub fn toggle_side(&mut self, side: Side) {
        self.borders.toggle(side);
    }

    pub fn set_border_sides<I: IntoIterator<Item = Side>>(&mut self, sides: I) {
        self.borders.sides = sides.into_iter().collect();
    }

    pub fn set_corners_enabled(&mut self, enabled: bool) {
        self.corners.enabled = enabled;
    }

    pub fn render(&self) -> FloorPlan {
        FloorRenderer::default().render(&self.grid, &self.borders, &self.corners)
    }
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(DesignerConfig::default())
    }
}

pub type SessionId = u64;

/// Isolated sessions keyed by id
pub struct SessionStore {
    config: DesignerConfig,
    sessions: DashMap<SessionId, DesignSession>,
    next_id: AtomicU64,
}

impl SessionStore {
    pub fn new(config: DesignerConfig) -> Self {
        Self {
            config,
            sessions: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Open a fresh session and return its id
    pub fn open(&self) -> SessionId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.sessions.insert(id, DesignSession::new(self.config.clone()));
        debug!("Opened session {}", id);
        id
    }

    pub fn close(&self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Run `f` against one session; `None` if the id is unknown
    pub fn with_session<R, F>(&self, id: SessionId, f: F) -> Option<R>
    where
        F: FnOnce(&mut DesignSession) -> R,
    {
        self.sessions.get_mut(&id).map(|mut entry| f(entry.value_mut()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn ids(&self) -> Vec<SessionId> {
        self.sessions.iter().map(|entry| *entry.key()).collect()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DesignerConfig::default())
    }
}
