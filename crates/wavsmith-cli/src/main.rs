//! Wavsmith CLI - offline oscillator rendering to PCM WAV
//!
//! This binary renders JSON render specs or single flag-built tones to
//! canonical WAV files, validates specs, and inspects rendered files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use wavsmith_spec::{Waveform, DEFAULT_SAMPLE_RATE};

use wavsmith_cli::commands;
use wavsmith_cli::commands::tone::ToneOptions;

/// Wavsmith - Offline Oscillator Renderer
#[derive(Parser)]
#[command(name = "wavsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON render spec to a WAV file
    Render {
        /// Path to the render spec (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output WAV path (".wav" is appended if there is no extension)
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a single oscillator described by flags
    Tone {
        /// Waveform shape (sine, triangle, square, saw, saw_reverse, noise, silence)
        #[arg(long)]
        shape: Waveform,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Frequency in Hz (required for periodic shapes)
        #[arg(short, long)]
        frequency: Option<f64>,

        /// Amplitude in percent (0-1000)
        #[arg(short, long, default_value_t = 100.0)]
        amplitude: f64,

        /// Silence before the waveform starts, in seconds
        #[arg(long, default_value_t = 0.0)]
        pre_delay: f64,

        /// Stereo pan from -100 (left) to 100 (right)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        pan: f64,

        /// Output channels (1 or 2)
        #[arg(short, long, default_value_t = 1)]
        channels: u16,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Bits per sample (16 or 24)
        #[arg(long, default_value_t = 16)]
        bit_depth: u16,

        /// Seed noise deterministically instead of from OS entropy
        #[arg(long)]
        seed: Option<u32>,

        /// Output WAV path (".wav" is appended if there is no extension)
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a render spec without rendering
    Validate {
        /// Path to the render spec (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header of a rendered WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { spec, out, json } => commands::render::run(&spec, &out, json),
        Commands::Tone {
            shape,
            duration,
            frequency,
            amplitude,
            pre_delay,
            pan,
            channels,
            sample_rate,
            bit_depth,
            seed,
            out,
            json,
        } => {
            let options = ToneOptions {
                shape,
                duration,
                frequency,
                amplitude,
                pre_delay,
                pan,
                channels,
                sample_rate,
                bit_depth,
                seed,
            };
            commands::tone::run(&options, &out, json)
        }
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_INVALID_INPUT)
        }
    }
}
