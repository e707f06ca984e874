//! End-to-end tests for the library organizer
//!
//! These tests build a small sample library on disk, run the organizer
//! against it, and check the category tree it produces:
//! - matching files are trimmed and copied under `<target>/<category>/`
//! - unmatched names and foreign extensions are left alone
//! - sample rate, channel count and bit depth survive the round trip
//! - kept 32-bit integer samples are written back unchanged

mod common;

use std::path::Path;

use common::{loud_i16, read_i16, silence_i16, write_i16, FRAME};
use hound::{SampleFormat, WavSpec, WavWriter};
use sample_curator::config::{AppConfig, OrganizeConfig};
use sample_curator::library::{organize_waveforms, Organizer};

fn build_library(root: &Path) -> Vec<i16> {
    let kick = loud_i16(FRAME * 3 + 500, 16_000);
    write_i16(&root.join("a").join("Kick_01.wav"), &kick, 44_100, 1);
    write_i16(&root.join("b").join("unrelated.wav"), &loud_i16(FRAME, 16_000), 44_100, 1);
    write_i16(&root.join("c").join("snare_FX.WAV"), &loud_i16(FRAME, 16_000), 44_100, 1);
    kick
}

#[test]
fn test_default_run_matches_reference_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("library");
    let target = dir.path().join("out");
    let kick = build_library(&source);

    let report = organize_waveforms(&source, &target).unwrap();

    let kick_out = target.join("kick").join("Kick_01.wav");
    assert!(kick_out.is_file(), "expected {}", kick_out.display());
    let (samples, spec) = read_i16(&kick_out);
    assert_eq!(samples, kick, "loud sample must be copied unchanged");
    assert_eq!(spec.sample_rate, 44_100);

    // No keyword: not copied anywhere
    assert_eq!(report.unmatched.len(), 1);
    assert!(report.unmatched[0].ends_with("unrelated.wav"));

    // Upper-case extension is not a waveform file under the default policy
    assert!(!target.join("snare").exists());
    assert_eq!(report.wrong_extension, 1);

    assert_eq!(report.scanned, 3);
    assert_eq!(report.organized.len(), 1);
    assert!(report.failures.is_empty());

    let entries: Vec<_> = std::fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["kick"]);
}

#[test]
fn test_case_insensitive_extension_picks_up_upper_case_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("library");
    let target = dir.path().join("out");
    build_library(&source);

    let config = AppConfig {
        organize: OrganizeConfig {
            extension_case_sensitive: false,
            ..OrganizeConfig::default()
        },
        ..AppConfig::default()
    };
    let report = Organizer::new(&config).unwrap().run(&source, &target).unwrap();

    assert!(target.join("snare").join("snare_FX.WAV").is_file());
    assert_eq!(report.organized.len(), 2);
    assert_eq!(report.wrong_extension, 0);
}

#[test]
fn test_head_and_tail_silence_trimmed_and_rate_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("library");
    let target = dir.path().join("out");

    let mut samples = silence_i16(FRAME * 2);
    samples.extend(loud_i16(FRAME, 12_000));
    samples.extend(silence_i16(FRAME + 123));
    write_i16(&source.join("Clap_Tight.wav"), &samples, 22_050, 1);

    let report = organize_waveforms(&source, &target).unwrap();
    let organized = &report.organized[0];
    assert_eq!(organized.category, "clap");
    assert_eq!(organized.frames_before, samples.len());
    assert_eq!(organized.frames_after, FRAME);

    let (trimmed, spec) = read_i16(&target.join("clap").join("Clap_Tight.wav"));
    assert_eq!(trimmed, loud_i16(FRAME, 12_000));
    assert_eq!(spec.sample_rate, 22_050);
}

#[test]
fn test_tie_break_uses_list_order_not_position() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("library");
    let target = dir.path().join("out");
    write_i16(&source.join("snare_over_kick.wav"), &loud_i16(FRAME, 9_000), 48_000, 1);

    let report = organize_waveforms(&source, &target).unwrap();
    assert_eq!(report.organized[0].category, "kick");
    assert!(target.join("kick").join("snare_over_kick.wav").is_file());
}

#[test]
fn test_stereo_24_bit_layout_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("library");
    let target = dir.path().join("out");
    std::fs::create_dir_all(&source).unwrap();

    let spec = WavSpec {
        channels: 2,
        sample_rate: 96_000,
        bits_per_sample: 24,
        sample_format: SampleFormat::Int,
    };
    let path = source.join("impact_hit.wav");
    let mut writer = WavWriter::create(&path, spec).unwrap();
    let mut expected = Vec::new();
    for frame in 0..FRAME * 3 {
        // Silent first frame, loud afterwards; right channel at half level
        let value: i32 = if frame < FRAME {
            0
        } else if frame % 2 == 0 {
            4_000_000
        } else {
            -4_000_000
        };
        writer.write_sample(value).unwrap();
        writer.write_sample(value / 2).unwrap();
        if frame >= FRAME {
            expected.push(value);
            expected.push(value / 2);
        }
    }
    writer.finalize().unwrap();

    organize_waveforms(&source, &target).unwrap();

    let mut reader = hound::WavReader::open(target.join("impact").join("impact_hit.wav")).unwrap();
    assert_eq!(reader.spec(), spec);
    let written: Vec<i32> = reader.samples::<i32>().map(|s| s.unwrap()).collect();
    assert_eq!(written, expected);
}

#[test]
fn test_colliding_names_last_one_wins() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("library");
    let target = dir.path().join("out");
    write_i16(&source.join("pack_a").join("crash.wav"), &loud_i16(FRAME, 1_000), 44_100, 1);
    write_i16(&source.join("pack_b").join("crash.wav"), &loud_i16(FRAME * 2, 8_000), 44_100, 1);

    let report = organize_waveforms(&source, &target).unwrap();
    assert_eq!(report.organized.len(), 2);

    let (samples, _) = read_i16(&target.join("crash").join("crash.wav"));
    assert_eq!(samples.len(), FRAME * 2);
}

#[test]
fn test_int32_samples_kept_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("library");
    let target = dir.path().join("out");
    std::fs::create_dir_all(&source).unwrap();

    let spec = WavSpec {
        channels: 1,
        sample_rate: 48_000,
        bits_per_sample: 32,
        sample_format: SampleFormat::Int,
    };
    let path = source.join("kick_32.wav");
    let mut writer = WavWriter::create(&path, spec).unwrap();
    let mut expected = Vec::new();
    for i in 0..FRAME * 3 {
        // Leading silent frame, then values an f32 cannot represent
        let value: i32 = if i < FRAME {
            0
        } else if i % 2 == 0 {
            1_000_000_001
        } else {
            -1_000_000_003
        };
        writer.write_sample(value).unwrap();
        if i >= FRAME {
            expected.push(value);
        }
    }
    writer.finalize().unwrap();

    let report = organize_waveforms(&source, &target).unwrap();
    assert_eq!(report.organized[0].frames_after, FRAME * 2);

    let mut reader = hound::WavReader::open(target.join("kick").join("kick_32.wav")).unwrap();
    assert_eq!(reader.spec(), spec);
    let written: Vec<i32> = reader.samples::<i32>().map(|s| s.unwrap()).collect();
    assert_eq!(written, expected);
}
