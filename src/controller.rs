//! Run controller.
//!
//! This module orchestrates one padding run:
//! - Input path resolution (argument or operator)
//! - Filename convention check
//! - Reading, census and padding
//! - Output naming and writing
//!
//! Everything lives for the duration of [`run`]; nothing is kept between runs.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::files::{read_sequences, write_padded};
use crate::naming::{check_marker, OutputDescriptor};
use crate::pad::{pad_sequences, TAIL_WIDTH};
use crate::prompt::{resolve_input, Operator};

/// What the caller already knows before the run starts.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Input file given on the command line
    pub file: Option<PathBuf>,
    /// Synthesizer number given on the command line
    pub machine: Option<String>,
}

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operator did not pick any file.
    NoFileSelected,
    /// The input held no sequence; nothing was written.
    NoSequences { input: PathBuf },
    /// The padded sequences were written.
    Written {
        path: PathBuf,
        count: usize,
        width: usize,
    },
}

/// Runs the whole transform for one input file.
///
/// A file name without the `DPI_out` marker and any I/O failure are errors;
/// a cancelled selection and an empty file are regular outcomes.
pub fn run(options: RunOptions, operator: &mut dyn Operator) -> Result<Outcome> {
    let Some(input) = resolve_input(options.file, operator).context("reading the input path")?
    else {
        log::info!("No file selected; exiting");
        return Ok(Outcome::NoFileSelected);
    };
    log::info!("Selected file: {}", input.display());

    check_marker(&input)?;

    let sequences = read_sequences(&input)?;
    let histogram = sequences.length_histogram();
    let Some(max_len) = histogram.max_length() else {
        log::info!("No sequences found in {}; exiting", input.display());
        return Ok(Outcome::NoSequences { input });
    };
    log::info!("Sequence length counts: {}", histogram);
    log::info!(
        "Max sequence length: {} (padded to {})",
        max_len,
        max_len + TAIL_WIDTH
    );

    let padded = pad_sequences(&sequences, max_len);

    let machine = match options.machine {
        Some(machine) => machine,
        None => operator
            .machine_number()
            .context("reading the synthesizer number")?,
    };

    let output = OutputDescriptor::for_input(&input, padded.width(), machine)?;
    let path = output.path();
    log::info!("Output file: {}", path.display());

    write_padded(&path, &padded)?;
    log::debug!("Wrote {} sequences to {}", padded.len(), path.display());

    Ok(Outcome::Written {
        path,
        count: padded.len(),
        width: padded.width(),
    })
}
