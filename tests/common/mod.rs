//! Shared WAV fixture helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

pub const FRAME: usize = 2048;

/// Square wave at `amplitude` (as 16-bit PCM), RMS == amplitude
pub fn loud_i16(len: usize, amplitude: i16) -> Vec<i16> {
    (0..len)
        .map(|i| if i % 2 == 0 { amplitude } else { -amplitude })
        .collect()
}

pub fn silence_i16(len: usize) -> Vec<i16> {
    vec![0; len]
}

pub fn write_i16(path: &Path, samples: &[i16], sample_rate: u32, channels: u16) {
    fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("create fixture directory");
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("create fixture wav");
    for &sample in samples {
        writer.write_sample(sample).expect("write fixture sample");
    }
    writer.finalize().expect("finalize fixture wav");
}

pub fn read_i16(path: &Path) -> (Vec<i16>, WavSpec) {
    let mut reader = WavReader::open(path).expect("open output wav");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .map(|s| s.expect("decode output sample"))
        .collect();
    (samples, spec)
}
