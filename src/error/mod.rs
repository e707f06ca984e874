// Error types for the sample curator
//
// This module defines custom error types for trimming, WAV file access and
// library organization, each carrying a stable numeric code so reports and
// exit paths can classify failures without string matching.

mod audio;
mod organize;
mod trim;

pub use audio::{AudioFileError, AudioFileErrorCodes};
pub use organize::{log_organize_error, OrganizeError, OrganizeErrorCodes};
pub use trim::{TrimError, TrimErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent reporting in the
/// organizer summary and the CLI JSON output.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
