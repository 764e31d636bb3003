//! `melttim` — DASH2 MELT_TIM compressor/decompressor CLI (spec §6).
//!
//! Argument shape is a `clap` derive struct; dispatch is a small `run`
//! function translating the result into a process exit code, the same split
//! `jafreck-lz4r/src/main.rs` draws between parsing and post-parse dispatch.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dash2::cli::constants::set_display_level;
use dash2::io::melttim::{compress_file, decompress_file};
use dash2::timefn::{clock_span_ns, get_time};
use dash2::{display, displaylevel};

#[derive(Parser)]
#[command(name = "melttim", about = "DASH2 MELT_TIM compressor/decompressor")]
struct Cli {
    /// Verbosity level (0 = silent, 1 = errors only, 2 = normal, 3 = verbose).
    #[arg(short, long, default_value_t = 2)]
    verbose: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decompress `<input_file>`, writing `<BASENAME>.PIX` to the output folder.
    D {
        input_file: PathBuf,
        output_folder: Option<PathBuf>,
    },
    /// Compress `<input_file>` into `<original_output_path>`, patching HEADER.BIN.
    C {
        input_file: PathBuf,
        original_output_path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_display_level(cli.verbose);

    let result = match cli.command {
        Command::D {
            input_file,
            output_folder,
        } => {
            let start = get_time();
            let outcome = decompress_file(&input_file, output_folder.as_deref());
            let elapsed = clock_span_ns(start) as f64 / 1e9;
            displaylevel!(2, "Decompression took {elapsed:.6} seconds\n");
            outcome.map(|_| ())
        }
        Command::C {
            input_file,
            original_output_path,
        } => {
            let start = get_time();
            let outcome = compress_file(&input_file, &original_output_path);
            let elapsed = clock_span_ns(start) as f64 / 1e9;
            displaylevel!(2, "Compression took {elapsed:.6} seconds\n");
            outcome
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display!("Error: {e:#}\n");
            ExitCode::FAILURE
        }
    }
}
