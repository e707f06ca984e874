//! Configuration management for trimming and library organization
//!
//! This module provides runtime configuration loading from JSON files so a
//! curation run can be tuned without recompilation. Every field has a default;
//! a partial file only overrides the keys it names, and command-line flags
//! override both.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::TrimError;
use crate::library::catalog::DEFAULT_CATEGORIES;

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub trim: TrimConfig,
    pub organize: OrganizeConfig,
}

/// Silence trimming parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Analysis window size in samples
    pub frame_length: usize,
    /// Minimum RMS energy for a frame to count as non-silent
    pub threshold: f32,
    /// Render the RMS series before returning trim bounds
    pub plot_rms: bool,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            frame_length: 2048,
            threshold: 0.1,
            plot_rms: false,
        }
    }
}

impl TrimConfig {
    /// Reject parameters the trimmer cannot run with
    pub fn validate(&self) -> Result<(), TrimError> {
        if self.frame_length == 0 {
            return Err(TrimError::InvalidFrameLength {
                frame_length: self.frame_length,
            });
        }
        if !self.threshold.is_finite() {
            return Err(TrimError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

/// Library organization parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    /// Category keywords in tie-break order
    pub categories: Vec<String>,
    /// File extension (without the dot) of files to organize
    pub extension: String,
    /// When true, `snare.WAV` does not match extension `wav`
    pub extension_case_sensitive: bool,
    /// Abort the whole run on the first per-file failure
    pub fail_fast: bool,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            extension: "wav".to_string(),
            extension_case_sensitive: true,
            fail_fast: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The parsed configuration, or defaults if the file doesn't exist or
    /// the JSON is invalid
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}
