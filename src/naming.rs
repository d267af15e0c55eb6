//! Input filename convention and output file naming.
//!
//! Input files come out of the DPI step and carry the `DPI_out` marker in
//! their name, e.g. `run7_DPI_out_syn3.txt`. The output is written next to the
//! input as:
//!
//! ```text
//! {prefix}680k_{width}mer_pickout{machine}.txt
//! ```
//!
//! where `prefix` is the input stem up to the first `syn`.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Marker every accepted input filename must contain.
pub const DPI_MARKER: &str = "DPI_out";

/// The output prefix stops before this substring.
pub const SYN_DELIMITER: &str = "syn";

/// Fixed batch tag embedded in every output name.
pub const BATCH_TAG: &str = "680k";

/// Errors raised by the filename convention.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NamingError {
    #[error("Marker '{marker}' not found in file name '{file_name}'; refusing to process it", marker = DPI_MARKER)]
    MissingMarker { file_name: String },

    #[error("Path '{0}' has no file name")]
    NoFileName(PathBuf),

    #[error("File name of '{}' is not valid UTF-8", .0.display())]
    InvalidFileName(PathBuf),
}

fn file_name_of(path: &Path) -> Result<&str, NamingError> {
    let name = path
        .file_name()
        .ok_or_else(|| NamingError::NoFileName(path.to_path_buf()))?;
    name.to_str()
        .ok_or_else(|| NamingError::InvalidFileName(path.to_path_buf()))
}

/// Checks that the base name of `path` contains [`DPI_MARKER`].
pub fn check_marker<P: AsRef<Path>>(path: P) -> Result<(), NamingError> {
    let file_name = file_name_of(path.as_ref())?;
    if file_name.contains(DPI_MARKER) {
        Ok(())
    } else {
        Err(NamingError::MissingMarker {
            file_name: file_name.to_string(),
        })
    }
}

/// Returns the file stem truncated before the first [`SYN_DELIMITER`].
///
/// Without any `syn` the whole stem is returned. Names that are not valid
/// UTF-8 are rejected rather than losing part of the prefix.
pub fn prefix_before_syn<P: AsRef<Path>>(path: P) -> Result<String, NamingError> {
    let file_name = file_name_of(path.as_ref())?;
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    Ok(match stem.find(SYN_DELIMITER) {
        Some(idx) => stem[..idx].to_string(),
        None => stem.to_string(),
    })
}

/// Where and under which name the padded sequences are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDescriptor {
    /// Directory of the input file (`.` when the input path has none)
    pub dir: PathBuf,
    /// Input stem before the first `syn`
    pub prefix: String,
    /// Width of the padded sequences
    pub width: usize,
    /// Synthesizer number, embedded verbatim
    pub machine: String,
}

impl OutputDescriptor {
    /// Derives the output location from the input path.
    pub fn for_input<P: AsRef<Path>>(
        input: P,
        width: usize,
        machine: impl Into<String>,
    ) -> Result<Self, NamingError> {
        let input = input.as_ref();
        let dir = input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        Ok(Self {
            dir,
            prefix: prefix_before_syn(input)?,
            width,
            machine: machine.into(),
        })
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}{}_{}mer_pickout{}.txt",
            self.prefix, BATCH_TAG, self.width, self.machine
        )
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(self.file_name())
    }
}
