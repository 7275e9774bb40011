// Print a garage floor design to stdout
//
// Usage: floor_plan [width] [length] [m|cm] [pattern]
// pattern is 1-4 or one of speckle, frame, checkerboard, spot

use garage_grid::display::{format_design_header, format_grid, format_legend, format_plan_summary};
use garage_grid::{DesignSession, DesignerConfig, Dimension, Pattern, Unit};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = DesignerConfig::from_env();
    config.validate()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let unit = match args.get(2) {
        Some(u) => Unit::parse(u).ok_or_else(|| format!("Unknown unit '{}'", u))?,
        None => config.dimensions.unit,
    };
    let defaults = if unit == config.dimensions.unit {
        Dimension::new(config.dimensions.width, config.dimensions.length, unit)?
    } else {
        Dimension::defaults(unit)
    };
    let width = match args.first() {
        Some(w) => w.parse::<f64>()?,
        None => defaults.width,
    };
    let length = match args.get(1) {
        Some(l) => l.parse::<f64>()?,
        None => defaults.length,
    };
    let dimension = Dimension::new(width, length, unit)?;

    let show_legend = config.display.show_legend;
    let mut session = DesignSession::new(config);
    session.set_dimension(dimension);

    if let Some(p) = args.get(3) {
        let pattern = Pattern::parse(p).ok_or_else(|| format!("Unknown pattern '{}'", p))?;
        info!("Applying {}", pattern.label());
        session.apply_pattern(pattern, &mut rand::thread_rng());
    }

    for line in format_design_header(session.dimension(), session.grid()) {
        println!("{}", line);
    }
    println!();
    for line in format_grid(session.grid()) {
        println!("{}", line);
    }
    println!();
    println!("{}", format_plan_summary(&session.render()));

    if show_legend {
        println!();
        for line in format_legend() {
            println!("{}", line);
        }
    }

    Ok(())
}
