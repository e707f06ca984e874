// Trimmer - energy-threshold silence removal at the head and tail of a sample
//
// The boundary search runs on the per-frame RMS series:
// 1. start frame = first frame with RMS >= threshold
// 2. end frame   = one past the last frame with RMS >= threshold
// 3. sample range = start_frame * frame_length .. end_frame * frame_length
//
// When no frame reaches the threshold the start stays at 0 and the end falls
// back to `len / frame_length` (whole frames only, derived from the sample
// count rather than the RMS series length). A silent file is therefore kept
// minus its trailing partial frame instead of being emptied.

use crate::analysis::rms::frame_rms;
use crate::audio::{PcmAudio, Waveform};
use crate::config::TrimConfig;
use crate::debug::TerminalPlot;
use crate::error::TrimError;

/// Receives the RMS series before trim bounds are returned
///
/// Diagnostic side channel only; the trimming result never depends on it.
pub trait RmsSink {
    fn observe(&self, rms: &[f32], threshold: f32);
}

impl<F> RmsSink for F
where
    F: Fn(&[f32], f32),
{
    fn observe(&self, rms: &[f32], threshold: f32) {
        self(rms, threshold)
    }
}

/// Result of the boundary search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimBounds {
    /// First kept analysis frame
    pub start_frame: usize,
    /// One past the last kept analysis frame
    pub end_frame: usize,
    /// First kept sample (clamped to the input length)
    pub start: usize,
    /// One past the last kept sample (clamped to the input length)
    pub end: usize,
    /// Whether any frame reached the threshold
    pub found_sound: bool,
}

impl TrimBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Locate the non-silent range from a precomputed RMS series
///
/// # Arguments
/// * `rms` - RMS energy per frame
/// * `total_len` - Number of samples the series was computed from
/// * `frame_length` - Samples per frame (must be > 0)
/// * `threshold` - Frames with RMS >= threshold count as sound
pub fn find_bounds(
    rms: &[f32],
    total_len: usize,
    frame_length: usize,
    threshold: f32,
) -> TrimBounds {
    debug_assert!(frame_length > 0, "frame_length must be > 0");
    let frame_length = frame_length.max(1);

    let first = rms.iter().position(|&energy| energy >= threshold);
    let last = rms.iter().rposition(|&energy| energy >= threshold);

    let start_frame = first.unwrap_or(0);
    let end_frame = last.map(|idx| idx + 1).unwrap_or(total_len / frame_length);

    let end = end_frame.saturating_mul(frame_length).min(total_len);
    let start = start_frame.saturating_mul(frame_length).min(end);

    TrimBounds {
        start_frame,
        end_frame,
        start,
        end,
        found_sound: first.is_some(),
    }
}

/// Silence trimmer with validated parameters
pub struct Trimmer {
    config: TrimConfig,
    sink: Option<Box<dyn RmsSink>>,
}

impl Trimmer {
    /// Create a trimmer from config
    ///
    /// With `plot_rms` set, a [`TerminalPlot`] on stderr is attached as the
    /// RMS sink; use [`Trimmer::with_rms_sink`] to route it elsewhere.
    pub fn new(config: TrimConfig) -> Result<Self, TrimError> {
        config.validate()?;
        let sink: Option<Box<dyn RmsSink>> = if config.plot_rms {
            Some(Box::new(TerminalPlot::stderr()))
        } else {
            None
        };
        Ok(Self { config, sink })
    }

    /// Replace the RMS sink
    pub fn with_rms_sink(mut self, sink: Box<dyn RmsSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Compute trim bounds for a mono sample slice
    pub fn bounds(&self, samples: &[f32]) -> TrimBounds {
        let rms = frame_rms(samples, self.config.frame_length);
        if let Some(sink) = &self.sink {
            sink.observe(&rms, self.config.threshold);
        }

        let bounds = find_bounds(
            &rms,
            samples.len(),
            self.config.frame_length,
            self.config.threshold,
        );
        tracing::debug!(
            frames = rms.len(),
            start = bounds.start,
            end = bounds.end,
            found_sound = bounds.found_sound,
            "[Trimmer] bounds computed"
        );
        bounds
    }

    /// Trim a mono sample slice
    pub fn clip<'a>(&self, samples: &'a [f32]) -> &'a [f32] {
        let bounds = self.bounds(samples);
        &samples[bounds.start..bounds.end]
    }

    /// Compute trim bounds, in sample frames, for a waveform of any channel
    /// count
    ///
    /// Multi-channel audio is analysed on its mono mixdown, so every channel
    /// is trimmed by the same amount.
    pub fn waveform_bounds(&self, waveform: &Waveform) -> TrimBounds {
        self.bounds(&waveform.mixdown())
    }

    /// Trim a waveform of any channel count
    pub fn clip_waveform(&self, waveform: &Waveform) -> Waveform {
        let bounds = self.waveform_bounds(waveform);
        waveform.slice_frames(bounds.start, bounds.end)
    }

    /// Trim decoded WAV audio without touching the kept samples
    ///
    /// Bounds come from the normalised view; the cut is applied to the
    /// on-disk samples so nothing is requantised.
    pub fn clip_pcm(&self, audio: &PcmAudio) -> PcmAudio {
        let bounds = self.waveform_bounds(&audio.to_waveform());
        audio.slice_frames(bounds.start, bounds.end)
    }
}

/// Trim leading and trailing silence from `waveform`
///
/// Convenience wrapper over [`Trimmer`]; see the module docs for the
/// boundary rules.
pub fn clip_waveform(waveform: &Waveform, config: &TrimConfig) -> Result<Waveform, TrimError> {
    Ok(Trimmer::new(config.clone())?.clip_waveform(waveform))
}
