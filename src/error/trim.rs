// Trim configuration error types and constants

use crate::error::ErrorCode;
use std::fmt;

/// Trim error code constants
///
/// Error code range: 1001-1002
pub struct TrimErrorCodes {}

impl TrimErrorCodes {
    /// Analysis frame length must be at least one sample
    pub const INVALID_FRAME_LENGTH: i32 = 1001;

    /// Silence threshold must be a finite number
    pub const INVALID_THRESHOLD: i32 = 1002;
}

/// Errors raised while validating trimmer parameters
#[derive(Debug, Clone, PartialEq)]
pub enum TrimError {
    /// frame_length was zero
    InvalidFrameLength { frame_length: usize },

    /// threshold was NaN or infinite
    InvalidThreshold { threshold: f32 },
}

impl ErrorCode for TrimError {
    fn code(&self) -> i32 {
        match self {
            TrimError::InvalidFrameLength { .. } => TrimErrorCodes::INVALID_FRAME_LENGTH,
            TrimError::InvalidThreshold { .. } => TrimErrorCodes::INVALID_THRESHOLD,
        }
    }

    fn message(&self) -> String {
        match self {
            TrimError::InvalidFrameLength { frame_length } => {
                format!("Frame length must be greater than 0 (got {})", frame_length)
            }
            TrimError::InvalidThreshold { threshold } => {
                format!("Threshold must be a finite number (got {})", threshold)
            }
        }
    }
}

impl fmt::Display for TrimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrimError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for TrimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_error_codes() {
        assert_eq!(TrimError::InvalidFrameLength { frame_length: 0 }.code(), 1001);
        assert_eq!(
            TrimError::InvalidThreshold {
                threshold: f32::NAN
            }
            .code(),
            1002
        );
    }

    #[test]
    fn test_trim_error_display_includes_code() {
        let err = TrimError::InvalidFrameLength { frame_length: 0 };
        let display = format!("{}", err);
        assert!(display.contains("code 1001"));
        assert!(display.contains("greater than 0"));
    }
}
