//! `fonttool` — 4-bit font nibble combiner/splitter CLI (spec §6).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dash2::cli::constants::set_display_level;
use dash2::io::fonttool::{combine_files, split_folder};
use dash2::timefn::{clock_span_ns, get_time};
use dash2::{display, displaylevel};

#[derive(Parser)]
#[command(name = "fonttool", about = "4-bit font nibble combiner/splitter")]
struct Cli {
    /// Verbosity level (0 = silent, 1 = errors only, 2 = normal, 3 = verbose).
    #[arg(short, long, default_value_t = 2)]
    verbose: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Combine two equal-size font PIX files into one 8bpp PIX file.
    Combine {
        input_a: PathBuf,
        input_b: PathBuf,
        output: PathBuf,
    },
    /// Split `<folder>/0000_INIT.PIX` into FONT1.TIM and FONT2.TIM, wrapped with
    /// a TIM header synthesized from `<folder>/0001_INIT.CLT`.
    Split {
        folder: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_display_level(cli.verbose);

    let result = match cli.command {
        Command::Combine {
            input_a,
            input_b,
            output,
        } => {
            let start = get_time();
            let outcome = combine_files(&input_a, &input_b, &output);
            let elapsed = clock_span_ns(start) as f64 / 1e9;
            displaylevel!(2, "Combine took {elapsed:.6} seconds\n");
            outcome
        }
        Command::Split { folder, out_dir } => {
            let start = get_time();
            let outcome = split_folder(&folder, &out_dir).map(|_| ());
            let elapsed = clock_span_ns(start) as f64 / 1e9;
            displaylevel!(2, "Split took {elapsed:.6} seconds\n");
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
