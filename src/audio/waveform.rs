/// Decoded audio held in memory
///
/// Samples are interleaved `f32` amplitudes (nominally -1.0..=1.0). A
/// waveform is never mutated after construction; trimming produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl Waveform {
    /// Build a waveform from interleaved samples
    ///
    /// A channel count of zero is treated as mono. Trailing samples that do
    /// not complete a whole frame are dropped so every frame holds exactly
    /// `channels` samples.
    pub fn new(mut samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        let channels = channels.max(1);
        let remainder = samples.len() % channels as usize;
        if remainder != 0 {
            samples.truncate(samples.len() - remainder);
        }
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Build a single-channel waveform
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(samples, sample_rate, 1)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of sample frames (one sample per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f32 / self.sample_rate as f32
    }

    /// Average all channels down to one
    ///
    /// Returns a borrowed slice for mono input to avoid a copy.
    pub fn mixdown(&self) -> std::borrow::Cow<'_, [f32]> {
        if self.channels == 1 {
            return std::borrow::Cow::Borrowed(&self.samples);
        }
        let channels = self.channels as usize;
        std::borrow::Cow::Owned(
            self.samples
                .chunks_exact(channels)
                .map(|frame| frame.iter().sum::<f32>() / channels as f32)
                .collect(),
        )
    }

    /// Copy the sample frames in `start..end` into a new waveform
    ///
    /// Indices are in frames, not interleaved samples, and are clamped to
    /// the waveform length.
    pub fn slice_frames(&self, start: usize, end: usize) -> Self {
        let channels = self.channels as usize;
        let end = end.min(self.frame_count());
        let start = start.min(end);
        Self {
            samples: self.samples[start * channels..end * channels].to_vec(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }
}
