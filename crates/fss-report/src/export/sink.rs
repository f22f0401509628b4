//! Export destinations.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ExportError, Result};
use crate::export::delimited::to_delimited;
use crate::flatten::FlattenedRow;

/// `simulacao_<unix-epoch-ms>.csv`
#[must_use]
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("simulacao_{}.csv", now.timestamp_millis())
}

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExportLocation {
    /// Kept on disk at this path.
    Saved(PathBuf),
    /// Handed to a share handler; the temporary copy is gone.
    Shared,
}

/// A destination able to take the encoded file.
pub trait ExportSink {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<ExportLocation>;
}

/// Writes the file into a directory and keeps it.
#[derive(Debug, Clone)]
pub struct DownloadSink {
    dir: PathBuf,
}

impl DownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DownloadSink {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<ExportLocation> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "wrote export file");
        Ok(ExportLocation::Saved(path))
    }
}

/// Receives a file path for the duration of one share.
pub trait ShareHandler {
    /// Return once the share finished. The file is deleted afterwards.
    fn share(&self, path: &Path) -> Result<()>;
}

/// Runs an external program with the file path as its last argument.
#[derive(Debug, Clone)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ShareHandler for CommandShare {
    fn share(&self, path: &Path) -> Result<()> {
        tracing::info!(program = %self.program, path = %path.display(), "launching share command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| ExportError::ShareLaunch {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExportError::ShareCancelled {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

/// Writes into a scoped temporary directory and hands the file to `H`.
///
/// The directory is removed when the share returns, whatever its outcome.
#[derive(Debug, Clone)]
pub struct ShareSink<H> {
    handler: H,
}

impl<H: ShareHandler> ShareSink<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H: ShareHandler> ExportSink for ShareSink<H> {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<ExportLocation> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join(file_name);
        fs::write(&path, contents)?;

        let shared = self.handler.share(&path);
        if let Err(err) = temp_dir.close() {
            tracing::warn!(error = %err, "failed to remove temporary export directory");
        }
        shared.map(|()| ExportLocation::Shared)
    }
}

/// Successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    pub file_name: String,
    pub location: ExportLocation,
}

/// Result of [`export_rows`]. Failures are reported here, never as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExportOutcome {
    Delivered(ExportReceipt),
    Failed { reason: String },
}

impl ExportOutcome {
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// Encode `rows` and hand them to `sink` under a timestamped file name.
pub fn export_rows(sink: &dyn ExportSink, rows: &FlattenedRow, now: DateTime<Utc>) -> ExportOutcome {
    let file_name = export_file_name(now);
    let delivered = to_delimited(rows).and_then(|contents| sink.deliver(&file_name, &contents));

    match delivered {
        Ok(location) => {
            tracing::info!(file = %file_name, columns = rows.len(), "exported simulation result");
            ExportOutcome::Delivered(ExportReceipt {
                file_name,
                location,
            })
        }
        Err(err) => {
            tracing::error!(file = %file_name, error = %err, "export failed");
            ExportOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}
