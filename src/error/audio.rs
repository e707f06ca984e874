// WAV file error types and constants

use crate::error::ErrorCode;
use std::fmt;
use std::path::PathBuf;

/// WAV file error code constants
///
/// Error code range: 3001-3004
pub struct AudioFileErrorCodes {}

impl AudioFileErrorCodes {
    /// File could not be opened or created
    pub const OPEN_FAILED: i32 = 3001;

    /// Sample data could not be decoded
    pub const DECODE_FAILED: i32 = 3002;

    /// PCM layout is not one we can read or write
    pub const UNSUPPORTED_FORMAT: i32 = 3003;

    /// Sample data could not be encoded or flushed
    pub const ENCODE_FAILED: i32 = 3004;
}

/// Errors reading or writing PCM WAV files
///
/// Error code range: 3001-3004
#[derive(Debug, Clone, PartialEq)]
pub enum AudioFileError {
    /// Failed to open a WAV file for reading or create one for writing
    OpenFailed { path: PathBuf, reason: String },

    /// Failed to decode sample data
    DecodeFailed { path: PathBuf, reason: String },

    /// Sample format or bit depth not supported
    UnsupportedFormat { path: PathBuf, details: String },

    /// Failed to write or finalize sample data
    EncodeFailed { path: PathBuf, reason: String },
}

impl AudioFileError {
    /// Path of the file the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            AudioFileError::OpenFailed { path, .. }
            | AudioFileError::DecodeFailed { path, .. }
            | AudioFileError::UnsupportedFormat { path, .. }
            | AudioFileError::EncodeFailed { path, .. } => path,
        }
    }
}

impl ErrorCode for AudioFileError {
    fn code(&self) -> i32 {
        match self {
            AudioFileError::OpenFailed { .. } => AudioFileErrorCodes::OPEN_FAILED,
            AudioFileError::DecodeFailed { .. } => AudioFileErrorCodes::DECODE_FAILED,
            AudioFileError::UnsupportedFormat { .. } => AudioFileErrorCodes::UNSUPPORTED_FORMAT,
            AudioFileError::EncodeFailed { .. } => AudioFileErrorCodes::ENCODE_FAILED,
        }
    }

    fn message(&self) -> String {
        match self {
            AudioFileError::OpenFailed { path, reason } => {
                format!("Failed to open {}: {}", path.display(), reason)
            }
            AudioFileError::DecodeFailed { path, reason } => {
                format!("Failed to decode {}: {}", path.display(), reason)
            }
            AudioFileError::UnsupportedFormat { path, details } => {
                format!("Unsupported PCM format in {}: {}", path.display(), details)
            }
            AudioFileError::EncodeFailed { path, reason } => {
                format!("Failed to write {}: {}", path.display(), reason)
            }
        }
    }
}

impl fmt::Display for AudioFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AudioFileError::{} (code {}): {}",
            self.variant_name(),
            self.code(),
            self.message()
        )
    }
}

impl AudioFileError {
    fn variant_name(&self) -> &'static str {
        match self {
            AudioFileError::OpenFailed { .. } => "OpenFailed",
            AudioFileError::DecodeFailed { .. } => "DecodeFailed",
            AudioFileError::UnsupportedFormat { .. } => "UnsupportedFormat",
            AudioFileError::EncodeFailed { .. } => "EncodeFailed",
        }
    }
}

impl std::error::Error for AudioFileError {}
