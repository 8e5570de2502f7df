//! `strata` — the seed-hunter and biome-map viewer harnesses around
//! `strata-core`. Both are thin: all the engine work happens in
//! [`strata_core::Generator`], this binary only parses arguments, drives
//! the generator, and renders a result (text or PNG).

mod color;
mod hunt;
mod view;

use clap::{Parser, Subcommand, ValueEnum};
use strata_core::version::{Dimension, McVersion};

#[derive(Parser)]
#[command(name = "strata", version, about = "Deterministic Minecraft biome-generation toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log verbosity: error, warn, info, debug, or trace.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a range of seeds for a structure viable at a given region.
    Hunt(hunt::HuntArgs),
    /// Render a rectangle of biomes to a PNG.
    View(view::ViewArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum DimensionArg {
    Overworld,
    Nether,
    End,
}

impl From<DimensionArg> for Dimension {
    fn from(d: DimensionArg) -> Self {
        match d {
            DimensionArg::Overworld => Dimension::Overworld,
            DimensionArg::Nether => Dimension::Nether,
            DimensionArg::End => Dimension::End,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum VersionArg {
    V1_18,
    V1_19_2,
    V1_19_4,
    V1_20_6,
    V1_21_1,
    V1_21_3,
    V1_21Wd,
}

impl From<VersionArg> for McVersion {
    fn from(v: VersionArg) -> Self {
        match v {
            VersionArg::V1_18 => McVersion::V1_18,
            VersionArg::V1_19_2 => McVersion::V1_19_2,
            VersionArg::V1_19_4 => McVersion::V1_19_4,
            VersionArg::V1_20_6 => McVersion::V1_20_6,
            VersionArg::V1_21_1 => McVersion::V1_21_1,
            VersionArg::V1_21_3 => McVersion::V1_21_3,
            VersionArg::V1_21Wd => McVersion::V1_21Wd,
        }
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Exit code on allocation failure (an oversized `gen_biomes` request, or a
/// viewer canvas too large for `image` to allocate). Clean shutdown, empty
/// results included, always exits 0.
const EXIT_ALLOC_FAILURE: i32 = 1;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Command::Hunt(args) => hunt::run(args),
        Command::View(args) => view::run(args),
    };

    if let Err(err) = result {
        tracing::error!("{err:#}");
        std::process::exit(EXIT_ALLOC_FAILURE);
    }
}
