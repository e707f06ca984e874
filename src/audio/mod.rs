// Audio module - in-memory waveforms and PCM WAV file access

pub mod wav;
pub mod waveform;

// Re-export commonly used types for convenience
pub use wav::{read_pcm, read_wav, write_pcm, write_wav, PcmAudio, PcmFormat, PcmSamples};
pub use waveform::Waveform;
