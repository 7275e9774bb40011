//! Tests for design sessions and the session store
use garage_grid::palette::{AMARILLO, AZUL, GRIS, NEGRO, ROJO};
use garage_grid::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn test_new_session_defaults() {
    let session = DesignSession::default();
    assert_eq!(session.dimension().unit, Unit::Meters);
    assert_eq!(session.shape(), GridShape::new(15, 10));
    assert!(session.grid().is_uniform(GRIS));
    assert_eq!(session.area_m2(), 24.0);
    assert!(session.borders().enabled);
    assert!(session.corners().enabled);
    assert!(!session.has_pending_edit());
}

#[test]
fn test_invalid_configured_dimensions_fall_back() {
    let mut config = DesignerConfig::default();
    config.dimensions.width = 0.2;
    let session = DesignSession::new(config);
    assert_eq!(session.dimension(), &Dimension::defaults(Unit::Meters));
    assert_eq!(session.shape(), GridShape::new(15, 10));
}

#[test]
fn test_same_shape_keeps_design() {
    let mut session = DesignSession::default();
    session.set_cell(0, 0, ROJO).unwrap();

    // 3.9 m still needs 10 columns
    let dimension = Dimension::new(3.9, 6.0, Unit::Meters).unwrap();
    assert!(!session.set_dimension(dimension));
    assert_eq!(session.grid().get(0, 0).unwrap(), ROJO);
    assert_eq!(session.dimension().width, 3.9);
}

#[test]
fn test_shape_change_resets_design() {
    let mut session = DesignSession::default();
    session.apply_pattern(Pattern::Checkerboard, &mut rng());

    let dimension = Dimension::new(4.1, 6.0, Unit::Meters).unwrap();
    assert!(session.set_dimension(dimension));
    assert_eq!(session.shape(), GridShape::new(15, 11));
    assert!(session.grid().is_uniform(GRIS));
}

#[test]
fn test_resize_drops_staged_edit() {
    let mut session = DesignSession::default();
    let mut snapshot = session.begin_edit();
    snapshot.set(1, 1, AZUL).unwrap();
    session.stage_edit(snapshot);
    assert!(session.has_pending_edit());

    session.set_dimension(Dimension::new(2.0, 2.0, Unit::Meters).unwrap());
    assert!(!session.has_pending_edit());
    assert!(!session.commit_edit());
    assert_eq!(session.shape(), GridShape::new(5, 5));
    assert!(session.grid().is_uniform(GRIS));
}

#[test]
fn test_pattern_replaces_staged_edit() {
    let mut session = DesignSession::default();
    let mut snapshot = session.begin_edit();
    snapshot.set(0, 0, AZUL).unwrap();
    session.stage_edit(snapshot);

    session.apply_pattern(Pattern::BorderedFrame, &mut rng());
    assert!(!session.has_pending_edit());
    assert_eq!(session.grid().get(0, 0).unwrap(), ROJO);
}

#[test]
fn test_submit_edit_adopts_snapshot() {
    let mut session = DesignSession::default();
    let mut snapshot = session.begin_edit();
    snapshot.set(14, 9, AMARILLO).unwrap();

    assert!(session.submit_edit(snapshot.clone()));
    assert_eq!(session.grid(), &snapshot);
    assert!(!session.has_pending_edit());
}

#[test]
fn test_stale_snapshot_is_discarded() {
    let mut session = DesignSession::default();
    let stale = GridState::filled(GridShape::new(5, 5), NEGRO);

    assert!(!session.submit_edit(stale));
    assert_eq!(session.shape(), GridShape::new(15, 10));
    assert!(session.grid().is_uniform(GRIS));
}

#[test]
fn test_json_snapshot_round_trip() {
    let mut session = DesignSession::default();
    session.set_dimension(Dimension::new(80.0, 80.0, Unit::Centimeters).unwrap());
    assert_eq!(session.snapshot_json().unwrap(), r#"[["Gris","Gris"],["Gris","Gris"]]"#);

    assert!(session.submit_edit_json(r#"[["Rojo","Gris"],["Gris","Verde"]]"#));
    assert_eq!(session.grid().get(0, 0).unwrap(), ROJO);
    assert_eq!(session.grid().get(1, 1).unwrap(), "Verde");
}

#[test]
fn test_bad_json_snapshot_keeps_grid() {
    let mut session = DesignSession::default();
    session.set_dimension(Dimension::new(80.0, 80.0, Unit::Centimeters).unwrap());

    assert!(!session.submit_edit_json("not json"));
    assert!(!session.submit_edit_json(r#"[["Rojo"],["Gris","Gris"]]"#));
    assert!(!session.submit_edit_json("[]"));
    assert!(session.grid().is_uniform(GRIS));
}

#[test]
fn test_unknown_color_from_editor_renders_with_fallback() {
    let mut session = DesignSession::default();
    session.set_dimension(Dimension::new(40.0, 80.0, Unit::Centimeters).unwrap());

    assert!(session.submit_edit_json(r#"[["Morado"],["Gris"]]"#));
    assert_eq!(session.grid().unknown_cells(), vec![(0, 0)]);

    let plan = session.render();
    let fills: Vec<Rgb> = plan.tiles().map(|t| t.fill).collect();
    assert!(fills.contains(&Rgb::fallback()));
}

#[test]
fn test_set_cell_rejects_unknown_color_and_bad_coordinates() {
    let mut session = DesignSession::default();
    assert!(matches!(
        session.set_cell(0, 0, "Morado"),
        Err(GridError::UnknownColor(_))
    ));
    assert!(matches!(
        session.set_cell(15, 0, ROJO),
        Err(GridError::InvalidCoordinates { .. })
    ));
    assert!(session.grid().is_uniform(GRIS));
}

#[test]
fn test_unit_switch_resets_to_unit_defaults() {
    let mut session = DesignSession::default();
    session.set_cell(0, 0, ROJO).unwrap();

    // 400 x 600 cm gives the same 15x10 grid
    assert!(!session.set_unit(Unit::Centimeters));
    assert_eq!(session.dimension(), &Dimension::defaults(Unit::Centimeters));
    assert_eq!(session.grid().get(0, 0).unwrap(), ROJO);

    session.set_dimension(Dimension::new(120.0, 80.0, Unit::Centimeters).unwrap());
    assert_eq!(session.shape(), GridShape::new(2, 3));
}

#[test]
fn test_decoration_toggles() {
    let mut session = DesignSession::default();
    session.toggle_side(Side::Top);
    assert_eq!(session.render().borders().count(), 3);

    session.set_border_sides([Side::Left]);
    assert_eq!(session.render().borders().count(), 1);

    session.set_borders_enabled(false);
    session.set_corners_enabled(false);
    let plan = session.render();
    assert_eq!(plan.borders().count(), 0);
    assert_eq!(plan.corners().count(), 0);
    assert_eq!(plan.tiles().count(), 150);
}

#[test]
fn test_store_sessions_are_isolated() {
    let store = SessionStore::default();
    let a = store.open();
    let b = store.open();
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);

    store
        .with_session(a, |s| {
            s.set_dimension(Dimension::new(2.0, 2.0, Unit::Meters).unwrap());
            s.set_cell(0, 0, ROJO)
        })
        .unwrap()
        .unwrap();

    let shape_b = store.with_session(b, |s| s.shape()).unwrap();
    let cell_b = store
        .with_session(b, |s| s.grid().get(0, 0).map(str::to_string))
        .unwrap()
        .unwrap();
    assert_eq!(shape_b, GridShape::new(15, 10));
    assert_eq!(cell_b, GRIS);
    assert_eq!(store.with_session(a, |s| s.shape()), Some(GridShape::new(5, 5)));
}

#[test]
fn test_store_close() {
    let store = SessionStore::default();
    let id = store.open();
    assert!(store.close(id));
    assert!(!store.close(id));
    assert!(store.is_empty());
    assert!(store.with_session(id, |s| s.shape()).is_none());
}

#[test]
fn test_oversized_dimension_rejected_at_input() {
    let mut session = DesignSession::default();
    assert!(matches!(
        Dimension::new(1e18, 1e18, Unit::Meters),
        Err(GridError::DimensionAboveMaximum { .. })
    ));
    assert!(Dimension::new(f64::INFINITY, 6.0, Unit::Meters).is_err());

    // A hand-built dimension skips the check but the tile count stays capped
    let huge = Dimension {
        width: 1e18,
        length: 2.0,
        unit: Unit::Meters,
    };
    assert!(session.set_dimension(huge));
    assert_eq!(session.shape(), GridShape::new(5, MAX_TILES_PER_AXIS));
    assert!(session.grid().is_uniform(GRIS));
}

#[test]
fn test_invalid_grid_config_falls_back_to_defaults() {
    let mut config = DesignerConfig::default();
    config.grid = GridConfig::new(1e-12, "Morado");
    let session = DesignSession::new(config);

    assert_eq!(session.config().grid, GridConfig::default());
    assert_eq!(session.shape(), GridShape::new(15, 10));
    assert!(session.grid().is_uniform(GRIS));
    assert!(session.grid().unknown_cells().is_empty());
}
