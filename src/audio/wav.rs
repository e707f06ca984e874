//! PCM WAV decoding and encoding.
//!
//! Files are read into [`PcmAudio`], which keeps samples at their on-disk
//! precision (integer PCM widened to `i32`, float PCM as `f32`). Trimming cuts
//! that buffer directly, so kept samples are written back unchanged at any bit
//! depth. [`PcmAudio::to_waveform`] produces the normalised `f32` view used for
//! analysis; integers are scaled by `2^(bits-1) - 1`.
//!
//! Writes go to a temporary file beside the destination and are renamed into
//! place only after the WAV is finalized, so a failed write never leaves a
//! truncated file behind.

use std::io::{BufWriter, Read};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tempfile::NamedTempFile;

use super::Waveform;
use crate::error::AudioFileError;

/// On-disk sample encoding of a WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
}

impl PcmFormat {
    pub const INT16: PcmFormat = PcmFormat {
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    pub const FLOAT32: PcmFormat = PcmFormat {
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    fn int_full_scale(&self) -> i64 {
        (1i64 << (self.bits_per_sample - 1)) - 1
    }

    fn check_supported(&self, path: &Path) -> Result<(), AudioFileError> {
        let supported = match self.sample_format {
            SampleFormat::Float => self.bits_per_sample == 32,
            SampleFormat::Int => matches!(self.bits_per_sample, 8 | 16 | 24 | 32),
        };
        if supported {
            Ok(())
        } else {
            Err(AudioFileError::UnsupportedFormat {
                path: path.to_path_buf(),
                details: format!(
                    "{:?} with {} bits per sample",
                    self.sample_format, self.bits_per_sample
                ),
            })
        }
    }
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self::INT16
    }
}

/// Interleaved samples as stored on disk
#[derive(Debug, Clone, PartialEq)]
pub enum PcmSamples {
    /// 8/16/24/32-bit integer PCM, widened to `i32`
    Int(Vec<i32>),
    /// 32-bit float PCM
    Float(Vec<f32>),
}

impl PcmSamples {
    pub fn len(&self) -> usize {
        match self {
            PcmSamples::Int(samples) => samples.len(),
            PcmSamples::Float(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// WAV contents at full on-disk precision
#[derive(Debug, Clone, PartialEq)]
pub struct PcmAudio {
    samples: PcmSamples,
    format: PcmFormat,
    sample_rate: u32,
    channels: u16,
}

impl PcmAudio {
    /// Quantise a normalised waveform into `format`
    ///
    /// Integer samples are rescaled by `2^(bits-1) - 1`, rounded, and clamped
    /// to the format's range.
    pub fn from_waveform(waveform: &Waveform, format: PcmFormat) -> Self {
        let samples = match format.sample_format {
            SampleFormat::Float => PcmSamples::Float(waveform.samples().to_vec()),
            SampleFormat::Int => {
                let max = format.int_full_scale() as f64;
                PcmSamples::Int(
                    waveform
                        .samples()
                        .iter()
                        .map(|&sample| {
                            (sample as f64 * max).round().clamp(-max - 1.0, max) as i32
                        })
                        .collect(),
                )
            }
        };
        Self {
            samples,
            format,
            sample_rate: waveform.sample_rate(),
            channels: waveform.channels(),
        }
    }

    pub fn samples(&self) -> &PcmSamples {
        &self.samples
    }

    pub fn format(&self) -> PcmFormat {
        self.format
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of whole sample frames (one sample per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Normalised `f32` view for analysis
    pub fn to_waveform(&self) -> Waveform {
        let samples = match &self.samples {
            PcmSamples::Float(samples) => samples.clone(),
            PcmSamples::Int(samples) => {
                let scale = self.format.int_full_scale() as f64;
                samples
                    .iter()
                    .map(|&sample| (sample as f64 / scale) as f32)
                    .collect()
            }
        };
        Waveform::new(samples, self.sample_rate, self.channels)
    }

    /// Copy the sample frames in `start..end` without converting them
    ///
    /// Indices are in frames and are clamped to the audio length.
    pub fn slice_frames(&self, start: usize, end: usize) -> Self {
        let channels = self.channels.max(1) as usize;
        let end = end.min(self.frame_count());
        let start = start.min(end);
        let range = start * channels..end * channels;
        let samples = match &self.samples {
            PcmSamples::Int(samples) => PcmSamples::Int(samples[range].to_vec()),
            PcmSamples::Float(samples) => PcmSamples::Float(samples[range].to_vec()),
        };
        Self {
            samples,
            format: self.format,
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }
}

/// Read a WAV file at its on-disk precision
pub fn read_pcm(path: &Path) -> Result<PcmAudio, AudioFileError> {
    let mut reader = WavReader::open(path).map_err(|err| match err {
        hound::Error::Unsupported => AudioFileError::UnsupportedFormat {
            path: path.to_path_buf(),
            details: "hound does not support this WAV layout".to_string(),
        },
        hound::Error::IoError(io) => AudioFileError::OpenFailed {
            path: path.to_path_buf(),
            reason: io.to_string(),
        },
        other => AudioFileError::DecodeFailed {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    })?;
    let spec = reader.spec();
    let format = PcmFormat {
        bits_per_sample: spec.bits_per_sample,
        sample_format: spec.sample_format,
    };
    format.check_supported(path)?;

    let samples = match format.sample_format {
        SampleFormat::Float => {
            PcmSamples::Float(collect_samples::<f32, _, _>(&mut reader, path, |v| v)?)
        }
        SampleFormat::Int => PcmSamples::Int(match format.bits_per_sample {
            8 => collect_samples::<i8, _, _>(&mut reader, path, i32::from)?,
            16 => collect_samples::<i16, _, _>(&mut reader, path, i32::from)?,
            _ => collect_samples::<i32, _, _>(&mut reader, path, |v| v)?,
        }),
    };

    log::debug!(
        "[Wav] Read {} samples from {} ({} Hz, {} ch, {} bit {:?})",
        samples.len(),
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    Ok(PcmAudio {
        samples,
        format,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

/// Read a WAV file into a normalised waveform plus its on-disk format
pub fn read_wav(path: &Path) -> Result<(Waveform, PcmFormat), AudioFileError> {
    let audio = read_pcm(path)?;
    Ok((audio.to_waveform(), audio.format()))
}

fn collect_samples<S, T, R>(
    reader: &mut WavReader<R>,
    path: &Path,
    convert: impl Fn(S) -> T,
) -> Result<Vec<T>, AudioFileError>
where
    S: hound::Sample,
    R: Read,
{
    reader
        .samples::<S>()
        .map(|sample| {
            sample
                .map(&convert)
                .map_err(|err| AudioFileError::DecodeFailed {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                })
        })
        .collect()
}

/// Write `audio` to `path` in its own format
///
/// The parent directory must already exist. An existing file at `path` is
/// replaced only once the new one is complete.
pub fn write_pcm(path: &Path, audio: &PcmAudio) -> Result<(), AudioFileError> {
    let format = audio.format();
    format.check_supported(path)?;

    let spec = WavSpec {
        channels: audio.channels(),
        sample_rate: audio.sample_rate(),
        bits_per_sample: format.bits_per_sample,
        sample_format: format.sample_format,
    };
    let open_err = |reason: String| AudioFileError::OpenFailed {
        path: path.to_path_buf(),
        reason,
    };
    let encode_err = |err: hound::Error| AudioFileError::EncodeFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Deleted on drop unless persisted
    let mut staging = NamedTempFile::new_in(dir).map_err(|err| open_err(err.to_string()))?;

    let mut writer = WavWriter::new(BufWriter::new(staging.as_file_mut()), spec)
        .map_err(|err| open_err(err.to_string()))?;
    match audio.samples() {
        PcmSamples::Float(samples) => {
            for &sample in samples {
                writer.write_sample(sample).map_err(encode_err)?;
            }
        }
        PcmSamples::Int(samples) => {
            for &sample in samples {
                match format.bits_per_sample {
                    8 => writer.write_sample(sample as i8),
                    16 => writer.write_sample(sample as i16),
                    _ => writer.write_sample(sample),
                }
                .map_err(encode_err)?;
            }
        }
    }
    writer.finalize().map_err(encode_err)?;

    staging
        .persist(path)
        .map_err(|err| open_err(err.error.to_string()))?;

    log::debug!(
        "[Wav] Wrote {} samples to {}",
        audio.samples().len(),
        path.display()
    );
    Ok(())
}

/// Write a normalised waveform to `path` using the given on-disk format
///
/// The parent directory must already exist.
pub fn write_wav(
    path: &Path,
    waveform: &Waveform,
    format: PcmFormat,
) -> Result<(), AudioFileError> {
    format.check_supported(path)?;
    write_pcm(path, &PcmAudio::from_waveform(waveform, format))
}
