//! raster-shapes: draw a primitive shape from its control points and print
//! the result to the terminal.
//!
//! Run: `raster-shapes cubic 20,400 120,40 380,460 480,80`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use raster_shapes::output::{TerminalEncoder, TerminalMode};
use raster_shapes::prelude::*;

/// Read when present and no `--config` is given.
const DEFAULT_CONFIG: &str = "raster-shapes.yaml";

/// Terminal rendering style.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// ASCII grayscale ramp
    Ascii,
    /// Unicode half blocks
    Blocks,
}

/// Rasterize a line, rectangle, ellipse or Bezier curve.
#[derive(Parser, Debug)]
#[command(name = "raster-shapes")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize primitive shapes from control points", long_about = None)]
struct Cli {
    /// Shape: line, rectangle, ellipse, quadratic or cubic
    shape: ShapeKind,

    /// Control points as x,y (2 for line/rectangle, 1 center for ellipse,
    /// 3 for quadratic, 4 for cubic)
    #[arg(value_parser = parse_point, required = true)]
    points: Vec<Point>,

    /// Config file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ellipse radii as rx,ry (overrides config)
    #[arg(long, value_parser = parse_radii)]
    radii: Option<(f64, f64)>,

    /// Ellipse segment count (overrides config)
    #[arg(long)]
    segments: Option<usize>,

    /// Curve sample count (overrides config)
    #[arg(long)]
    samples: Option<usize>,

    /// Stroke color (name or #rrggbb)
    #[arg(long, default_value = "white")]
    color: Rgba,

    /// Canvas color (name, `transparent` or #rrggbb)
    #[arg(long, default_value = "black")]
    background: Rgba,

    /// Mark each control point with a small disc
    #[arg(long)]
    markers: bool,

    /// Output width in characters
    #[arg(long, default_value = "80")]
    cols: u32,

    /// Output height in lines (derived from --cols when omitted)
    #[arg(long)]
    rows: Option<u32>,

    /// Invert brightness, for dark strokes on a light background
    #[arg(long)]
    invert: bool,

    /// Terminal rendering style
    #[arg(long, value_enum, default_value = "ascii")]
    mode: Mode,
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_radii(s: &str) -> std::result::Result<(f64, f64), String> {
    let (rx, ry) = s.split_once(',').ok_or_else(|| format!("expected rx,ry, got '{s}'"))?;
    let rx = rx.trim().parse().map_err(|e| format!("bad rx in '{s}': {e}"))?;
    let ry = ry.trim().parse().map_err(|e| format!("bad ry in '{s}': {e}"))?;
    Ok((rx, ry))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = RasterConfig::resolve(cli.config.as_deref(), DEFAULT_CONFIG)
        .context("failed to load configuration")?;
    if let Some((rx, ry)) = cli.radii {
        config.ellipse_radius_x = rx;
        config.ellipse_radius_y = ry;
    }
    if let Some(segments) = cli.segments {
        config.ellipse_segments = segments;
    }
    if let Some(samples) = cli.samples {
        config.curve_samples = samples;
    }
    config.validate().context("invalid configuration")?;

    let clicks = ControlPointSet::new(cli.shape, cli.points.clone())
        .with_context(|| format!("cannot draw a {}", cli.shape))?;
    let shape = Shape::from_control_points(&clicks, &config);

    let mut fb = Framebuffer::new(config.width, config.height)?;
    fb.clear(cli.background);

    let painted = draw_shape(&mut fb, &shape, &config, cli.color)?;
    tracing::info!(shape = %cli.shape, painted, "shape drawn");

    if cli.markers {
        for &p in clicks.points() {
            draw_marker(&mut fb, p, 3, Rgba::RED);
        }
    }

    let mode = match cli.mode {
        Mode::Ascii => TerminalMode::Ascii,
        Mode::Blocks => TerminalMode::UnicodeHalfBlock,
    };
    let mut encoder = TerminalEncoder::new().mode(mode).width(cli.cols).invert(cli.invert);
    if let Some(rows) = cli.rows {
        encoder = encoder.height(rows);
    }
    encoder.print(&fb);

    Ok(())
}
