//! seqpad - DPI pick-out padder
//!
//! Pads every sequence of a `DPI_out` file to the same length and writes the
//! pick-out file for the synthesizer next to it.
//!
//! ## Usage
//!
//! ```bash
//! seqpad run7_DPI_out_syn3.txt           # asks for the synthesizer number
//! seqpad -m 2 run7_DPI_out_syn3.txt      # fully non-interactive
//! seqpad                                  # asks for the file too
//! ```
//!
//! The example above writes `run7_DPI_out_680k_{N}mer_pickout2.txt` where `N` is
//! the longest sequence length plus 5.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::{Env, Target};

use seqpad::controller::{run, Outcome, RunOptions};
use seqpad::prompt::ConsoleOperator;

/// seqpad - Pad DPI_out sequences for the oligo synthesizer
///
/// Sequences are uppercased, zero-filled to the longest length, then extended
/// by five characters of the repeated "AATAT" tail.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file; its name must contain "DPI_out". Asked for when omitted.
    file: Option<PathBuf>,

    /// Synthesizer number embedded in the output name. Asked for when omitted.
    #[arg(short = 'm', long = "machine")]
    machine: Option<String>,

    /// Only report warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stdout)
        .init();

    let mut operator = ConsoleOperator::stdio().with_dialog(cfg!(feature = "dialog"));
    let options = RunOptions {
        file: args.file,
        machine: args.machine,
    };

    match run(options, &mut operator)? {
        Outcome::NoFileSelected => println!("No file selected."),
        Outcome::NoSequences { input } => {
            println!("No sequences found in {}; nothing written.", input.display())
        }
        Outcome::Written { path, count, width } => println!(
            "Wrote {} sequences of {} nt to {}",
            count,
            width,
            path.display()
        ),
    }

    Ok(())
}
