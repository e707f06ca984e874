// Sample Curator Core - silence trimming and sample library organization
// Energy-threshold trimming of WAV samples, sorted into category folders

// Module declarations
pub mod analysis;
pub mod audio;
pub mod config;
pub mod debug;
pub mod error;
pub mod library;

// Re-exports for convenience
pub use analysis::{clip_waveform, Trimmer};
pub use audio::Waveform;
pub use config::{AppConfig, OrganizeConfig, TrimConfig};
pub use library::{organize_waveforms, OrganizeReport, Organizer};
