//! `rpd-export` - export Tiled maps and tilesets to Remixed Pixel Dungeon JSON.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rpd_tiled::prelude::*;
use rpd_tiled::rpd_tiled_format::format::RPD_SHORT_NAME;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Output path meaning "write to stdout".
const STDOUT: &str = "-";

/// Export Tiled maps and tilesets to Remixed Pixel Dungeon JSON
#[derive(Parser)]
#[command(name = "rpd-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a Tiled map (.tmx) as a level file
    Map {
        /// Map to export
        input: PathBuf,

        /// Output file, `-` for stdout (default: the input with a .json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format short name (default: chosen from the output extension)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Export a Tiled tileset (.tsx) as JSON
    Tileset {
        /// Tileset to export
        input: PathBuf,

        /// Output file, `-` for stdout (default: the input with a .json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format short name, e.g. RPD-MANIFEST (default: chosen from the output extension)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List the registered formats
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RpdConfig::from_json_file(path)?,
        None => RpdConfig::default(),
    };
    init_logging(&config.log);

    let registry = FormatRegistry::build();
    let format_config = config.format_config();

    match cli.command {
        Commands::Map {
            input,
            output,
            format,
        } => export_map(&registry, &format_config, &input, output, format.as_deref()),
        Commands::Tileset {
            input,
            output,
            format,
        } => export_tileset(&registry, &format_config, &input, output, format.as_deref()),
        Commands::Formats => list_formats(&registry, &format_config),
    }
}

/// Logs go to stderr so `-o -` output stays clean. `RUST_LOG` wins over the config file.
fn init_logging(log: &LogConfig) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn export_map(
    registry: &FormatRegistry,
    config: &FormatConfig,
    input: &Path,
    output: Option<PathBuf>,
    format_name: Option<&str>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| input.with_extension("json"));
    let format = match format_name {
        Some(name) => registry
            .map_format(name, config)
            .with_context(|| format!("Unknown map format '{name}'"))?,
        None => registry
            .map_format_for(&output, config)
            .or_else(|| registry.map_format(RPD_SHORT_NAME, config))
            .context("No map format registered")?,
    };

    let map = TiledLoader::new().load_map(input)?;
    let view = TiledMapView::new(&map);
    info!("Exporting {} as {}", input.display(), format.short_name());

    if output == Path::new(STDOUT) {
        let document = format
            .export(&view)
            .with_context(|| format!("Failed to export {}", input.display()))?;
        write_stdout(&document)
    } else {
        format
            .write(&view, &output)
            .with_context(|| format!("Failed to export {}", input.display()))
    }
}

fn export_tileset(
    registry: &FormatRegistry,
    config: &FormatConfig,
    input: &Path,
    output: Option<PathBuf>,
    format_name: Option<&str>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| input.with_extension("json"));
    let format = match format_name {
        Some(name) => registry
            .tileset_format(name, config)
            .with_context(|| format!("Unknown tileset format '{name}'"))?,
        None => registry
            .tileset_format_for(&output, config)
            .or_else(|| registry.tileset_format(RPD_SHORT_NAME, config))
            .context("No tileset format registered")?,
    };

    let tileset = TiledLoader::new().load_tileset(input)?;
    let view = TiledTilesetView::new(&tileset);
    info!("Exporting {} as {}", input.display(), format.short_name());

    if output == Path::new(STDOUT) {
        write_stdout(&format.export(&view, Path::new(".")))
    } else {
        format
            .write(&view, &output)
            .with_context(|| format!("Failed to export {}", input.display()))
    }
}

fn write_stdout(document: &OutputDocument) -> Result<()> {
    let text = document.to_pretty_json()?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn list_formats(registry: &FormatRegistry, config: &FormatConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for registration in registry.map_formats() {
        if let Some(format) = registry.map_format(registration.short_name, config) {
            writeln!(
                stdout,
                "map      {:<14} {} - {}",
                registration.short_name,
                registration.description,
                format.name_filter()
            )?;
        }
    }
    for registration in registry.tileset_formats() {
        if let Some(format) = registry.tileset_format(registration.short_name, config) {
            writeln!(
                stdout,
                "tileset  {:<14} {} - {}",
                registration.short_name,
                registration.description,
                format.name_filter()
            )?;
        }
    }
    Ok(())
}
