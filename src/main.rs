use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nord_dither::palette::{closest_index, Rgb};
use nord_dither::NORD;
use nordify::models::{DitherConfig, DitherOverrides};
use nordify::services::DitherPipeline;

#[derive(Parser)]
#[command(name = "nordify")]
#[command(about = "Dither PNG images to the 16-color Nord palette")]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG image to the Nord palette
    Dither {
        /// Input PNG file path
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Noise intensity (0.0 disables noise, default 0.1)
        #[arg(short, long)]
        noise: Option<f64>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Round the working buffer to bytes after every write
        #[arg(long)]
        byte_accumulator: bool,

        /// Re-compress the output PNG with oxipng
        #[arg(long)]
        optimize: bool,

        /// YAML config file (falls back to $NORDIFY_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the Nord palette
    Palette {
        /// Show the palette entry closest to this hex color (e.g. "#88c0d0")
        #[arg(long = "match", value_name = "HEX")]
        match_color: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match cli.command {
        Commands::Dither {
            input,
            output,
            noise,
            seed,
            byte_accumulator,
            optimize,
            config,
        } => {
            let overrides = DitherOverrides {
                noise_amount: noise,
                seed,
                byte_accumulator,
                optimize,
            };
            run_dither_command(&input, &output, config.as_deref(), &overrides)
        }
        Commands::Palette { match_color } => run_palette_command(match_color.as_deref()),
    }
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet { "nordify=warn" } else { "nordify=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_dither_command(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    overrides: &DitherOverrides,
) -> anyhow::Result<()> {
    let config = DitherConfig::resolve(config_path)
        .context("Failed to load configuration")?
        .apply(overrides);
    let pipeline = DitherPipeline::from_config(&config).context("Invalid configuration")?;

    let result = pipeline
        .process_file(input, output)
        .with_context(|| format!("Failed to dither {}", input.display()))?;

    for (entry, count) in result.stats.used() {
        tracing::debug!(color = entry.name, hex = %entry.color, count, "Palette usage");
    }
    if let Some(index) = result.stats.most_used() {
        tracing::info!(
            color = NORD[index].name,
            colors_used = result.stats.used().count(),
            "Dominant palette color"
        );
    }

    Ok(())
}

fn run_palette_command(match_color: Option<&str>) -> anyhow::Result<()> {
    match match_color {
        Some(hex) => {
            let color: Rgb = hex
                .parse()
                .with_context(|| format!("Invalid color '{}'", hex))?;
            let [r, g, b] = color.to_f64();
            let entry = &NORD[closest_index(r, g, b)];
            println!("{} {} ({})", entry.name, entry.color, entry.group);
        }
        None => {
            for entry in &NORD {
                println!("{:<7} {} {}", entry.name, entry.color, entry.group);
            }
        }
    }
    Ok(())
}
