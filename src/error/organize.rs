// Library organization error types and constants

use crate::error::{AudioFileError, ErrorCode, TrimError};
use log::error;
use std::fmt;
use std::path::PathBuf;

/// Organizer error code constants
///
/// Error code range: 2001-2005
pub struct OrganizeErrorCodes {}

impl OrganizeErrorCodes {
    /// Source or target directory is missing or invalid
    pub const CONFIGURATION: i32 = 2001;

    /// Filesystem operation failed for a single entry
    pub const IO: i32 = 2002;

    /// WAV decode/encode failed for a single file
    pub const AUDIO: i32 = 2003;

    /// Trimmer parameters were rejected
    pub const TRIM: i32 = 2004;

    /// Category vocabulary is empty or contains blank keywords
    pub const VOCABULARY: i32 = 2005;
}

/// Log an organizer error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_organize_error(err: &OrganizeError, context: &str) {
    error!(
        "Organize error in {}: code={}, component=Organizer, recoverable={}, message={}",
        context,
        err.code(),
        err.is_recoverable(),
        err.message()
    );
}

/// Errors raised while organizing a sample library
///
/// `Configuration`, `Trim` and `Vocabulary` are fatal and reported before any
/// file is processed. `Io` and `Audio` concern a single file and the organizer
/// skips that file unless fail-fast mode is enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum OrganizeError {
    /// Missing or invalid source/target directory
    Configuration { reason: String },

    /// Filesystem failure on a single path
    Io { path: PathBuf, details: String },

    /// WAV decode/encode failure on a single file
    Audio(AudioFileError),

    /// Invalid trimmer parameters
    Trim(TrimError),

    /// Invalid category vocabulary
    Vocabulary { reason: String },
}

impl OrganizeError {
    /// Whether the organizer may skip the offending file and continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, OrganizeError::Io { .. } | OrganizeError::Audio(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        OrganizeError::Io {
            path: path.into(),
            details: err.to_string(),
        }
    }
}

impl ErrorCode for OrganizeError {
    fn code(&self) -> i32 {
        match self {
            OrganizeError::Configuration { .. } => OrganizeErrorCodes::CONFIGURATION,
            OrganizeError::Io { .. } => OrganizeErrorCodes::IO,
            OrganizeError::Audio(_) => OrganizeErrorCodes::AUDIO,
            OrganizeError::Trim(_) => OrganizeErrorCodes::TRIM,
            OrganizeError::Vocabulary { .. } => OrganizeErrorCodes::VOCABULARY,
        }
    }

    fn message(&self) -> String {
        match self {
            OrganizeError::Configuration { reason } => {
                format!("Invalid configuration: {}", reason)
            }
            OrganizeError::Io { path, details } => {
                format!("I/O failure on {}: {}", path.display(), details)
            }
            OrganizeError::Audio(err) => err.message(),
            OrganizeError::Trim(err) => err.message(),
            OrganizeError::Vocabulary { reason } => {
                format!("Invalid category vocabulary: {}", reason)
            }
        }
    }
}

impl fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrganizeError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrganizeError::Audio(err) => Some(err),
            OrganizeError::Trim(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AudioFileError> for OrganizeError {
    fn from(err: AudioFileError) -> Self {
        OrganizeError::Audio(err)
    }
}

impl From<TrimError> for OrganizeError {
    fn from(err: TrimError) -> Self {
        OrganizeError::Trim(err)
    }
}
