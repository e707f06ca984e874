// RMS module - per-frame root-mean-square energy
//
// Frames are consecutive and non-overlapping (hop = frame_length). The final
// partial frame is zero-padded to a full frame: its sum of squares is divided
// by `frame_length`, not by the number of real samples it holds.

/// Number of analysis frames covering `len` samples, counting a trailing
/// partial frame
pub fn frame_count(len: usize, frame_length: usize) -> usize {
    if frame_length == 0 {
        return 0;
    }
    len.div_ceil(frame_length)
}

/// Compute RMS energy for each frame of `samples`
///
/// Formula: RMS = sqrt((1 / N) × Σ x[n]²), N = frame_length
///
/// # Returns
/// One non-negative value per frame; empty for empty input or a zero
/// frame length
pub fn frame_rms(samples: &[f32], frame_length: usize) -> Vec<f32> {
    if frame_length == 0 {
        return Vec::new();
    }

    samples
        .chunks(frame_length)
        .map(|frame| {
            let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
            (sum_sq / frame_length as f32).sqrt()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_signal_rms_equals_amplitude() {
        let rms = frame_rms(&[0.5; 8], 4);
        assert_eq!(rms.len(), 2);
        for value in rms {
            assert!((value - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_partial_frame_is_zero_padded() {
        // 6 samples, frame of 4: last frame holds 2 real samples + 2 zeros
        let rms = frame_rms(&[1.0; 6], 4);
        assert_eq!(rms.len(), 2);
        assert!((rms[0] - 1.0).abs() < 1e-6);
        assert!((rms[1] - (2.0f32 / 4.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_sign_does_not_matter() {
        let rms = frame_rms(&[1.0, -1.0, 1.0, -1.0], 4);
        assert!((rms[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_and_degenerate_inputs() {
        assert!(frame_rms(&[], 2048).is_empty());
        assert!(frame_rms(&[0.3; 10], 0).is_empty());
        assert_eq!(frame_count(0, 2048), 0);
        assert_eq!(frame_count(10, 0), 0);
    }

    #[test]
    fn test_frame_count_matches_series_length() {
        for len in [1, 2047, 2048, 2049, 10_000] {
            assert_eq!(frame_rms(&vec![0.1; len], 2048).len(), frame_count(len, 2048));
        }
    }
}
