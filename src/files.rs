//! Reading sequence lists and writing pick-out files.
//!
//! The input is free-form UTF-8 text: tokens separated by any whitespace,
//! no header. The output is one sequence per line without a trailing newline.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{PaddedSequenceSet, SequenceSet};

/// Errors that can occur while reading or writing sequence files.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Reads the whole file and splits it into tokens.
///
/// An empty or whitespace-only file yields an empty set, not an error.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> FileResult<SequenceSet> {
    let path = path.as_ref();
    let content = read_content(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(SequenceSet::from_content(&content))
}

fn read_content(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = BufReader::with_capacity(1024 * 1024, file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Creates or overwrites `path` with the padded sequences.
pub fn write_padded<P: AsRef<Path>>(path: P, padded: &PaddedSequenceSet) -> FileResult<()> {
    let path = path.as_ref();
    write_content(path, &padded.to_text()).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_content(path: &Path, content: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_read_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x_DPI_out.txt");
        fs::write(&path, "act gtaca\n\ttt\n").unwrap();

        let set = read_sequences(&path).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(2), Some("tt"));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_DPI_out.txt");
        fs::write(&path, "").unwrap();

        assert!(read_sequences(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_sequences(dir.path().join("missing_DPI_out.txt"));
        assert!(matches!(result, Err(FileError::Read { .. })));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin_DPI_out.txt");
        fs::write(&path, [0x41, 0xff, 0xfe, 0x43]).unwrap();

        let err = read_sequences(&path).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert!(err.to_string().contains("bin_DPI_out.txt"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer").unwrap();

        let padded = PaddedSequenceSet::new(vec!["ACT00AATAT".into(), "GTACAAATAT".into()], 10);
        write_padded(&path, &padded).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "ACT00AATAT\nGTACAAATAT");
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        let padded = PaddedSequenceSet::new(vec!["A".into()], 1);

        assert!(matches!(write_padded(&path, &padded), Err(FileError::Write { .. })));
    }
}
