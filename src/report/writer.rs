//! Emits rendered documents to disk.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ConsoleError, ConsoleResult};

use super::document::Document;

/// Writes documents into a report directory, one file per document.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Creates a writer targeting `dir`. The directory is created on first
    /// emission.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The directory documents are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Renders `document` and writes it under its filename, replacing any
    /// earlier file of the same name. Returns the written path.
    ///
    /// The filename must be a single plain path component.
    pub fn emit(&self, document: &Document) -> ConsoleResult<PathBuf> {
        let path = self.dir.join(&document.filename);
        if Path::new(&document.filename).file_name() != Some(OsStr::new(&document.filename)) {
            warn!(filename = %document.filename, "Rejected report filename");
            return Err(ConsoleError::ReportWrite {
                path: path.display().to_string(),
                message: "filename must not contain path components".to_string(),
            });
        }

        let write_error = |e: std::io::Error| ConsoleError::ReportWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.dir).map_err(write_error)?;
        fs::write(&path, document.render()).map_err(write_error)?;

        info!(path = %path.display(), "Report emitted");
        Ok(path)
    }
}
