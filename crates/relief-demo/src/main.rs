//! Demo binary that renders generated terrain to PNG files.
//!
//! Configuration is loaded from a RON file and can be overridden via CLI flags.
//! Run with `cargo run -p relief-demo -- terrain --draw color` for a banded map.
//! Run with `cargo run -p relief-demo -- drift --frames 60` for a scrolling
//! single-octave animation.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use glam::DVec2;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use relief_noise::{KernelKind, simple_field};
use relief_terrain::{CHUNK_SIZE, ColorMap, TerrainConfig, generate_terrain};

/// Relief terrain demo arguments.
#[derive(Parser, Debug)]
#[command(name = "relief-demo", about = "Relief terrain generation demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one terrain chunk and write its maps as PNG.
    Terrain(TerrainArgs),
    /// Write frames of a scrolling single-octave field.
    Drift(DriftArgs),
}

#[derive(Args, Debug)]
struct TerrainArgs {
    /// Which map to draw.
    #[arg(long, value_enum, default_value = "color")]
    draw: DrawMode,

    /// Field width in cells.
    #[arg(long, default_value_t = CHUNK_SIZE)]
    width: u32,

    /// Field height in cells.
    #[arg(long, default_value_t = CHUNK_SIZE)]
    height: u32,

    /// Path to a RON config file (created with defaults if absent).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Noise seed override.
    #[arg(long)]
    seed: Option<u64>,

    /// Noise kernel override.
    #[arg(long, value_enum)]
    kernel: Option<KernelArg>,

    /// Mesh level of detail override (0 = full resolution).
    #[arg(long)]
    level_of_detail: Option<u32>,

    /// Output directory for PNG files.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct DriftArgs {
    /// Field width in cells.
    #[arg(long, default_value_t = 128)]
    width: u32,

    /// Field height in cells.
    #[arg(long, default_value_t = 128)]
    height: u32,

    /// Noise scale in cells per noise unit.
    #[arg(long, default_value_t = 8.0)]
    scale: f64,

    /// Number of frames to write.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Horizontal offset advance per frame.
    #[arg(long, default_value_t = 0.1)]
    step: f64,

    /// Output directory for PNG files.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
}

/// Which of the generated maps to write.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum DrawMode {
    /// Grayscale height field.
    Noise,
    /// Region-banded color map.
    Color,
    /// Mesh statistics plus the color map used as its texture.
    Mesh,
}

/// CLI-friendly kernel names.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum KernelArg {
    Perlin,
    Lattice,
}

impl From<KernelArg> for KernelKind {
    fn from(arg: KernelArg) -> Self {
        match arg {
            KernelArg::Perlin => KernelKind::Perlin,
            KernelArg::Lattice => KernelKind::Lattice,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Terrain(args) => run_terrain(args),
        Command::Drift(args) => run_drift(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn run_terrain(args: TerrainArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => TerrainConfig::load_or_create(path)?,
        None => TerrainConfig::default(),
    };
    apply_overrides(&mut config, &args);

    info!(
        "Generating {}x{} terrain (seed {}, {:?} kernel)",
        args.width, args.height, config.noise.seed, config.noise.kernel
    );
    let terrain = generate_terrain(args.width, args.height, &config)?;

    std::fs::create_dir_all(&args.out_dir)?;
    match args.draw {
        DrawMode::Noise => {
            let map = ColorMap::grayscale(&terrain.field);
            write_png(&args.out_dir.join("noise.png"), &map)?;
        }
        DrawMode::Color => {
            write_png(&args.out_dir.join("color.png"), &terrain.color_map)?;
        }
        DrawMode::Mesh => {
            let (min, max) = elevation_range(&terrain.mesh.positions);
            info!(
                "Mesh: {} vertices, {} triangles, elevation {min:.2}..{max:.2}",
                terrain.mesh.vertex_count(),
                terrain.mesh.triangle_count(),
            );
            write_png(&args.out_dir.join("mesh_texture.png"), &terrain.color_map)?;
        }
    }
    Ok(())
}

fn run_drift(args: DriftArgs) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&args.out_dir)?;
    info!(
        "Writing {} drift frames to {}",
        args.frames,
        args.out_dir.display()
    );

    let mut offset = DVec2::ZERO;
    for frame in 0..args.frames {
        let field = simple_field(args.width, args.height, args.scale, offset)?;
        let map = ColorMap::grayscale(&field);
        write_png(&args.out_dir.join(format!("drift_{frame:03}.png")), &map)?;
        offset.x += args.step;
    }
    Ok(())
}

/// Apply CLI overrides to a loaded config.
fn apply_overrides(config: &mut TerrainConfig, args: &TerrainArgs) {
    if let Some(seed) = args.seed {
        config.noise.seed = seed;
    }
    if let Some(kernel) = args.kernel {
        config.noise.kernel = kernel.into();
    }
    if let Some(level) = args.level_of_detail {
        config.level_of_detail = level;
    }
}

fn elevation_range(positions: &[glam::Vec3]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for pos in positions {
        min = min.min(pos.y);
        max = max.max(pos.y);
    }
    (min, max)
}

fn write_png(path: &Path, map: &ColorMap) -> Result<(), Box<dyn Error>> {
    image::save_buffer(
        path,
        &map.pixels,
        map.width,
        map.height,
        image::ExtendedColorType::Rgba8,
    )?;
    info!("Wrote {}", path.display());
    Ok(())
}
