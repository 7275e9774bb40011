// Display module for grid formatting and visualization
pub mod formatters;

// Re-export main functions
pub use formatters::{
    format_cell, format_column_headers, format_design_header, format_grid, format_legend,
    format_plan_summary, format_row_prefix,
};
