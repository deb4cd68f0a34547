use crate::date::DateFormatError;
use crate::extract::ExtractError;
use crate::rename::RenameError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Unsupported,
    NoMatch,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Extraction(#[from] ExtractError),
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),
    #[error(transparent)]
    Rename(#[from] RenameError),
}

#[derive(Debug)]
pub enum FileOutcome {
    Renamed { target: PathBuf },
    Skipped(SkipReason),
    Failed(ProcessError),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub preview: Option<String>,
    pub groups: Option<Vec<String>>,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub scanned: usize,
    pub renamed: usize,
    pub skipped_unsupported: usize,
    pub skipped_no_match: usize,
    pub failed: usize,
}

impl BatchStats {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::Skipped(SkipReason::Unsupported) => self.skipped_unsupported += 1,
            FileOutcome::Skipped(SkipReason::NoMatch) => self.skipped_no_match += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub stats: BatchStats,
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
