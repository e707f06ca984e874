// Organizer - sorts a sample library into per-category folders
//
// Every file under the source tree whose name carries the waveform extension
// and contains a category keyword is trimmed and written to
// `target/<category>/<file name>`. Subfolder structure below the source root
// is not preserved, so equal file names from different folders collide; the
// later file wins and a warning is logged.
//
// Failure handling:
// - source/target problems abort before any file is touched
// - per-file read/decode/write failures are recorded and skipped, unless
//   fail_fast is set, in which case the first one aborts the run

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::analysis::{RmsSink, Trimmer};
use crate::audio::{read_pcm, write_pcm};
use crate::config::AppConfig;
use crate::error::{log_organize_error, OrganizeError};
use crate::library::catalog::{CategoryVocabulary, ExtensionPolicy};
use crate::library::report::{FileFailure, OrganizeReport, OrganizedFile};

/// Directory-level driver for classification and trimming
pub struct Organizer {
    vocabulary: CategoryVocabulary,
    extension: ExtensionPolicy,
    trimmer: Trimmer,
    fail_fast: bool,
}

impl Organizer {
    /// Build an organizer from application config
    ///
    /// # Errors
    /// Invalid trim parameters or category vocabulary
    pub fn new(config: &AppConfig) -> Result<Self, OrganizeError> {
        let organize = &config.organize;
        Ok(Self {
            vocabulary: CategoryVocabulary::new(organize.categories.iter().cloned())?,
            extension: ExtensionPolicy::new(&organize.extension, organize.extension_case_sensitive),
            trimmer: Trimmer::new(config.trim.clone())?,
            fail_fast: organize.fail_fast,
        })
    }

    pub fn with_vocabulary(mut self, vocabulary: CategoryVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Route the trimmer's RMS series to `sink`
    pub fn with_rms_sink(mut self, sink: Box<dyn RmsSink>) -> Self {
        self.trimmer = self.trimmer.with_rms_sink(sink);
        self
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    /// Organize every matching file under `source` into `target`
    ///
    /// # Errors
    /// `OrganizeError::Configuration` when `source` is not a directory or
    /// `target` cannot be used as one. With fail_fast, the first per-file
    /// error is returned as well.
    pub fn run(&self, source: &Path, target: &Path) -> Result<OrganizeReport, OrganizeError> {
        let excluded = prepare_directories(source, target)?;
        let mut report = OrganizeReport::new(source.to_path_buf(), target.to_path_buf());
        let mut written: HashSet<PathBuf> = HashSet::new();

        tracing::info!(
            "[Organizer] Organizing {} into {}",
            source.display(),
            target.display()
        );

        let walker = WalkDir::new(source)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry, excluded.as_deref()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| source.to_path_buf());
                    self.handle_failure(&mut report, path.clone(), OrganizeError::io(path, err))?;
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                report.directories += 1;
                tracing::info!("[Organizer] Scanning {}", entry.path().display());
                continue;
            }
            if !entry.path().is_file() {
                continue;
            }
            report.scanned += 1;

            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if !self.extension.matches(&name) {
                report.wrong_extension += 1;
                tracing::trace!("[Organizer] Not a waveform file: {}", entry.path().display());
                continue;
            }

            let Some(category) = self.vocabulary.classify(&name) else {
                tracing::debug!("[Organizer] No category for {}", entry.path().display());
                report.unmatched.push(entry.path().to_path_buf());
                continue;
            };

            match self.organize_file(entry.path(), file_name, category, target) {
                Ok(organized) => {
                    if !written.insert(organized.destination.clone()) {
                        tracing::warn!(
                            "[Organizer] {} overwrote an earlier file with the same name",
                            organized.destination.display()
                        );
                    }
                    report.organized.push(organized);
                }
                Err(err) => {
                    self.handle_failure(&mut report, entry.path().to_path_buf(), err)?;
                }
            }
        }

        report.log_summary();
        Ok(report)
    }

    fn organize_file(
        &self,
        path: &Path,
        file_name: &OsStr,
        category: &str,
        target: &Path,
    ) -> Result<OrganizedFile, OrganizeError> {
        let audio = read_pcm(path)?;
        tracing::debug!(
            "[Organizer] Trimming {} ({} frames @ {} Hz)",
            path.display(),
            audio.frame_count(),
            audio.sample_rate()
        );
        let trimmed = self.trimmer.clip_pcm(&audio);

        let category_dir = target.join(category);
        fs::create_dir_all(&category_dir).map_err(|err| OrganizeError::io(&category_dir, err))?;
        let destination = category_dir.join(file_name);
        write_pcm(&destination, &trimmed)?;

        tracing::info!(
            "[Organizer] {} → {} ({} → {} frames)",
            path.display(),
            destination.display(),
            audio.frame_count(),
            trimmed.frame_count()
        );

        Ok(OrganizedFile {
            source: path.to_path_buf(),
            destination,
            category: category.to_string(),
            sample_rate: trimmed.sample_rate(),
            channels: trimmed.channels(),
            frames_before: audio.frame_count(),
            frames_after: trimmed.frame_count(),
        })
    }

    fn handle_failure(
        &self,
        report: &mut OrganizeReport,
        path: PathBuf,
        err: OrganizeError,
    ) -> Result<(), OrganizeError> {
        log_organize_error(&err, &path.display().to_string());
        if self.fail_fast || !err.is_recoverable() {
            return Err(err);
        }
        report.failures.push(FileFailure::new(path, &err));
        Ok(())
    }
}

/// Validate `source`, create `target`, and return the canonical target path
/// when it lies inside the source tree (so the walk can skip it)
fn prepare_directories(source: &Path, target: &Path) -> Result<Option<PathBuf>, OrganizeError> {
    if !source.is_dir() {
        return Err(OrganizeError::Configuration {
            reason: format!("source directory {} does not exist", source.display()),
        });
    }
    if target.exists() && !target.is_dir() {
        return Err(OrganizeError::Configuration {
            reason: format!("target {} exists and is not a directory", target.display()),
        });
    }
    fs::create_dir_all(target).map_err(|err| OrganizeError::Configuration {
        reason: format!("cannot create target {}: {}", target.display(), err),
    })?;

    let canonical = |path: &Path| {
        fs::canonicalize(path).map_err(|err| OrganizeError::Configuration {
            reason: format!("cannot resolve {}: {}", path.display(), err),
        })
    };
    let source = canonical(source)?;
    let target = canonical(target)?;
    if source == target {
        return Err(OrganizeError::Configuration {
            reason: format!("source and target are the same directory ({})", source.display()),
        });
    }

    Ok(target.starts_with(&source).then_some(target))
}

fn is_excluded(entry: &DirEntry, excluded: Option<&Path>) -> bool {
    let Some(excluded) = excluded else {
        return false;
    };
    entry.file_type().is_dir()
        && fs::canonicalize(entry.path())
            .map(|path| path == excluded)
            .unwrap_or(false)
}

/// Organize `source_dir` into `target_dir` with default settings
pub fn organize_waveforms(
    source_dir: impl AsRef<Path>,
    target_dir: impl AsRef<Path>,
) -> Result<OrganizeReport, OrganizeError> {
    Organizer::new(&AppConfig::default())?.run(source_dir.as_ref(), target_dir.as_ref())
}
