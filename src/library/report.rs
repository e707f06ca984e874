//! Per-run organizer report.
//!
//! Serialised as JSON by the CLI; also summarised to the log at the end of
//! every run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{ErrorCode, OrganizeError};

/// A file that was trimmed and written to its category folder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub category: String,
    pub sample_rate: u32,
    pub channels: u16,
    /// Sample frames before trimming
    pub frames_before: usize,
    /// Sample frames after trimming
    pub frames_after: usize,
}

impl OrganizedFile {
    pub fn frames_removed(&self) -> usize {
        self.frames_before.saturating_sub(self.frames_after)
    }
}

/// A file skipped because of a recoverable error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub code: i32,
    pub message: String,
}

impl FileFailure {
    pub fn new(path: PathBuf, err: &OrganizeError) -> Self {
        Self {
            path,
            code: err.code(),
            message: err.message(),
        }
    }
}

/// Outcome of one organizer run
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizeReport {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Directories visited, including the source root
    pub directories: usize,
    /// Regular files seen
    pub scanned: usize,
    /// Files skipped for not carrying the waveform extension
    pub wrong_extension: usize,
    pub organized: Vec<OrganizedFile>,
    /// Waveform files whose name matched no category
    pub unmatched: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl OrganizeReport {
    pub fn new(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source,
            target,
            ..Self::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of organized files per category, sorted by name
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for file in &self.organized {
            *counts.entry(file.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn log_summary(&self) {
        tracing::info!(
            scanned = self.scanned,
            organized = self.organized.len(),
            unmatched = self.unmatched.len(),
            wrong_extension = self.wrong_extension,
            failed = self.failures.len(),
            "[Organizer] Finished {} → {}",
            self.source.display(),
            self.target.display()
        );
        for (category, count) in self.category_counts() {
            tracing::info!("[Organizer]   {:<14} {}", category, count);
        }
        for failure in &self.failures {
            tracing::warn!(
                "[Organizer] Skipped {} (code {}): {}",
                failure.path.display(),
                failure.code,
                failure.message
            );
        }
    }
}
