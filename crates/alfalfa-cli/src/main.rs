//! alfalfa CLI - inspection and reshaping tools for explicit-state VP8
//! video (spec §6 "External interfaces").

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "alfalfa")]
#[command(about = "Inspect and reshape explicit-state VP8 video", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a raster stream into VP8 (out of scope; documents the
    /// collaborator contract and exits with an error)
    Enc {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = "ivf")]
        input_format: String,

        #[arg(long)]
        y_ac_qi: Option<u32>,

        #[arg(long)]
        ssim: Option<f64>,

        #[arg(long)]
        frame_sizes: Option<PathBuf>,

        #[arg(long)]
        reencode: bool,

        #[arg(long)]
        input_state: Option<PathBuf>,

        #[arg(long)]
        output_state: Option<PathBuf>,
    },

    /// Mark the final interframe of an IVF file as refreshing all three
    /// references
    TerminateChunk {
        input: PathBuf,
        output: PathBuf,
        output_state: Option<PathBuf>,
    },

    /// Decode N frames and write the resulting decoder state to a file
    Dump {
        /// Number of frames to decode before dumping state
        #[arg(short = 'f', long)]
        frames: Option<usize>,

        /// Starting decoder state, if resuming mid-stream
        #[arg(short = 'S', long)]
        state: Option<PathBuf>,

        input: PathBuf,
        output_state: PathBuf,
    },

    /// Compare two saved decoder states; nonzero exit if they differ
    Diff { state1: PathBuf, state2: PathBuf },

    /// Print per-frame diagnostics for an IVF file
    Dissect {
        /// Show per-macroblock prediction modes
        #[arg(short = 'm', long)]
        modes: bool,

        /// Show partition layout
        #[arg(short = 'p', long)]
        partitions: bool,

        /// Show coefficient token counts
        #[arg(short = 'c', long)]
        coeffs: bool,

        /// Limit to the first N frames
        #[arg(short = 'f', long)]
        frames: Option<usize>,

        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level.parse().unwrap_or(tracing::Level::WARN))
        .init();
    abseil::init_from_env();

    match cli.command {
        Commands::Enc {
            output,
            input_format,
            y_ac_qi,
            ssim,
            frame_sizes,
            reencode,
            input_state,
            output_state,
        } => commands::enc::run(commands::enc::EncArgs {
            output,
            input_format,
            y_ac_qi,
            ssim,
            frame_sizes,
            reencode,
            input_state,
            output_state,
        }),
        Commands::TerminateChunk {
            input,
            output,
            output_state,
        } => commands::terminate_chunk::run(input, output, output_state),
        Commands::Dump {
            frames,
            state,
            input,
            output_state,
        } => commands::dump::run(input, frames, state, output_state),
        Commands::Diff { state1, state2 } => commands::diff::run(state1, state2),
        Commands::Dissect {
            modes,
            partitions,
            coeffs,
            frames,
            input,
        } => commands::dissect::run(input, frames, modes, partitions, coeffs),
    }
}
