//! Filesystem export of serialized offer documents.
//!
//! Mirrors the form layer's download contract: every failure is a value
//! the caller can branch on, never a panic or an `Err` bubbling up. The
//! write goes through a temp file in the destination directory; the temp
//! file is released on every path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// All failure reasons an export attempt can report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The serialized document was empty or whitespace-only.
    #[error("export content is empty")]
    EmptyContent,

    /// The target filename was empty or whitespace-only.
    #[error("export filename is empty")]
    EmptyFilename,

    /// The destination directory does not exist or is not a directory.
    #[error("destination '{0}' is not an available directory")]
    DestinationUnavailable(PathBuf),

    /// The write attempt itself failed.
    #[error("write failed: {0}")]
    WriteFailed(String),
}

impl ExportError {
    /// Italian user-facing message shown by the form layer.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExportError::EmptyContent => "Il contenuto del file da esportare è vuoto",
            ExportError::EmptyFilename => "Il nome del file da esportare è vuoto",
            ExportError::DestinationUnavailable(_) => {
                "La destinazione scelta per il salvataggio non è disponibile"
            }
            ExportError::WriteFailed(_) => {
                "Errore imprevisto durante il salvataggio del file"
            }
        }
    }
}

/// Outcome of one export attempt.
#[derive(Debug)]
pub struct ExportOutcome {
    pub success: bool,
    /// Final path of the written file, on success.
    pub path: Option<PathBuf>,
    pub error: Option<ExportError>,
}

impl ExportOutcome {
    fn written(path: PathBuf) -> Self {
        ExportOutcome {
            success: true,
            path: Some(path),
            error: None,
        }
    }

    fn failed(error: ExportError) -> Self {
        ExportOutcome {
            success: false,
            path: None,
            error: Some(error),
        }
    }
}

/// Write `content` as UTF-8 under `filename` inside `dest_dir`.
///
/// Empty content or an empty filename fails before any filesystem access;
/// a missing destination fails before any write. The content is first
/// written to a temp file and persisted to the final name; when persisting
/// is not possible it falls back to a direct write.
pub fn export_xml(content: &str, filename: &str, dest_dir: &Path) -> ExportOutcome {
    if content.trim().is_empty() {
        return ExportOutcome::failed(ExportError::EmptyContent);
    }
    if filename.trim().is_empty() {
        return ExportOutcome::failed(ExportError::EmptyFilename);
    }
    if !dest_dir.is_dir() {
        return ExportOutcome::failed(ExportError::DestinationUnavailable(
            dest_dir.to_path_buf(),
        ));
    }

    let target = dest_dir.join(filename);
    match write_via_temp(content, &target, dest_dir) {
        Ok(()) => ExportOutcome::written(target),
        Err(e) => ExportOutcome::failed(ExportError::WriteFailed(e.to_string())),
    }
}

fn write_via_temp(content: &str, target: &Path, dir: &Path) -> std::io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    match tmp.persist(target) {
        Ok(_) => Ok(()),
        Err(e) => {
            // Dropping the returned temp file removes it before the
            // fallback direct write.
            drop(e.file);
            fs::write(target, content)
        }
    }
}
