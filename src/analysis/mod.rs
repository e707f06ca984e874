// Analysis module - frame energy and silence trimming
//
// The trimmer only ever sees in-memory sample slices; WAV decoding and
// directory handling live in `audio` and `library`.
//
// Pipeline: samples → frame_rms (RMS per non-overlapping frame)
//           → find_bounds (first/last frame at or above threshold)
//           → slice

pub mod rms;
pub mod trimmer;

pub use rms::{frame_count, frame_rms};
pub use trimmer::{clip_waveform, find_bounds, RmsSink, TrimBounds, Trimmer};
