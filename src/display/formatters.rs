// Display formatting utilities for text dumps of a design

use crate::grid::{CellDisplay, GridState, GridTrait};
use crate::render::FloorPlan;
use crate::units::Dimension;

/// Column header line for a grid of `cols` tiles
pub fn format_column_headers(cols: usize) -> String {
    let mut line = String::from("    ");
    for col in 0..cols {
        line.push_str(&format!(" {:2}", col));
    }
    line
}

/// Prefix for grid rows
pub fn format_row_prefix(row: usize) -> String {
    format!("{:2}: ", row)
}

/// Two-character palette code of a cell, right-aligned in three columns
pub fn format_cell(color: &String) -> String {
    format!(" {:>2}", color.display_cell())
}

/// Whole grid as text, one row per line with headers
pub fn format_grid(grid: &GridState) -> Vec<String> {
    let mut lines = vec![format_column_headers(grid.shape().cols)];
    for (row, cells) in grid.rows().enumerate() {
        let mut line = format_row_prefix(row);
        for cell in cells {
            line.push_str(&format_cell(cell));
        }
        lines.push(line);
    }
    lines
}

/// Header with floor size, area and tile counts
pub fn format_design_header(dimension: &Dimension, grid: &GridState) -> Vec<String> {
    let shape = grid.shape();
    vec![
        format!(
            "=== GARAGE FLOOR {} x {} {} ===",
            dimension.width,
            dimension.length,
            dimension.unit.symbol()
        ),
        format!("Área total: {:.2} m²", dimension.area_m2()),
        format!(
            "Tiles: {} rows x {} cols ({} total)",
            shape.rows,
            shape.cols,
            shape.cell_count()
        ),
    ]
}

/// Primitive counts and viewport of a rendered floor plan
pub fn format_plan_summary(plan: &FloorPlan) -> String {
    let vp = &plan.viewport;
    format!(
        "Primitives: {} tiles, {} borders, {} corners | view x[{}, {}] y[{}, {}]",
        plan.tiles().count(),
        plan.borders().count(),
        plan.corners().count(),
        vp.x_min,
        vp.x_max,
        vp.y_min,
        vp.y_max
    )
}

/// Palette legend lines: code, name and hex
pub fn format_legend() -> Vec<String> {
    crate::palette::standard()
        .entries()
        .iter()
        .map(|entry| format!("{:>2}  {:<12} {}", entry.code, entry.name, entry.hex))
        .collect()
}
