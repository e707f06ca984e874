// RMS Plot - text rendering of a frame energy series
//
// Used when `plot_rms` is enabled so the threshold can be tuned by eye
// without a graphics stack. Each column shows the loudest frame in its
// bucket as `*`; the threshold row is drawn with `-`.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::analysis::RmsSink;

/// Default plot width in columns
pub const DEFAULT_PLOT_WIDTH: usize = 72;

/// Default plot height in rows
pub const DEFAULT_PLOT_HEIGHT: usize = 12;

/// Render `rms` as a line plot with a threshold marker
///
/// Series longer than `width` are bucketed by maximum so short transients
/// stay visible.
pub fn render_rms_plot(rms: &[f32], threshold: f32, width: usize, height: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "RMS Plot ({} frames, threshold {:.4})",
        rms.len(),
        threshold
    );
    if rms.is_empty() || width == 0 || height == 0 {
        out.push_str("(no frames)\n");
        return out;
    }

    let columns = width.min(rms.len());
    let levels: Vec<f32> = (0..columns)
        .map(|col| {
            let lo = col * rms.len() / columns;
            let hi = ((col + 1) * rms.len() / columns).max(lo + 1);
            rms[lo..hi].iter().copied().fold(0.0, f32::max)
        })
        .collect();

    let peak = levels.iter().copied().fold(threshold.max(0.0), f32::max);
    let scale = if peak > 0.0 { peak } else { 1.0 };
    let top = height - 1;
    let row_of = |value: f32| ((value / scale).clamp(0.0, 1.0) * top as f32).round() as usize;
    let threshold_row = row_of(threshold);

    for row in (0..height).rev() {
        let label = scale * row as f32 / top.max(1) as f32;
        let mut line = format!("{:>8.4} |", label);
        for &level in &levels {
            let cell = if row_of(level) == row {
                '*'
            } else if row == threshold_row {
                '-'
            } else {
                ' '
            };
            line.push(cell);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out, "{:>8} +{}", "", "-".repeat(columns));
    let last = format!("{}", rms.len() - 1);
    let pad = columns.saturating_sub(last.len() + 1);
    let _ = writeln!(out, "{:>8}  0{}{}", "", " ".repeat(pad), last);
    let _ = writeln!(out, "{:>8}  Frame", "");
    out
}

/// [`RmsSink`] that writes a text plot to a terminal or buffer
pub struct TerminalPlot<W: Write> {
    out: RefCell<W>,
    width: usize,
    height: usize,
}

impl TerminalPlot<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalPlot<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> RmsSink for TerminalPlot<W> {
    fn observe(&self, rms: &[f32], threshold: f32) {
        let plot = render_rms_plot(rms, threshold, self.width, self.height);
        let mut out = self.out.borrow_mut();
        if let Err(err) = out.write_all(plot.as_bytes()).and_then(|_| out.flush()) {
            log::warn!("[RmsPlot] Failed to write plot: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_has_one_point_per_column() {
        let rms = [0.0, 0.1, 0.5, 0.9, 0.4, 0.0];
        let plot = render_rms_plot(&rms, 0.2, 72, 8);

        assert!(plot.starts_with("RMS Plot (6 frames, threshold 0.2000)"));
        assert_eq!(plot.matches('*').count(), rms.len());
        assert!(plot.contains("Frame"));
    }

    #[test]
    fn test_long_series_bucketed_to_width() {
        let rms: Vec<f32> = (0..1000).map(|i| (i % 10) as f32 / 10.0).collect();
        let plot = render_rms_plot(&rms, 0.5, 40, 10);
        assert_eq!(plot.matches('*').count(), 40);
    }

    #[test]
    fn test_threshold_row_marked() {
        let rms = [0.0; 4];
        let plot = render_rms_plot(&rms, 1.0, 10, 5);
        // Top row is the threshold row; silent frames sit on the bottom row.
        let top = plot.lines().nth(1).unwrap();
        assert!(top.ends_with("|----"), "unexpected top row: {top:?}");
    }

    #[test]
    fn test_empty_series() {
        let plot = render_rms_plot(&[], 0.1, 72, 12);
        assert!(plot.contains("(no frames)"));
    }

    #[test]
    fn test_terminal_plot_writes_to_buffer() {
        let sink = TerminalPlot::new(Vec::new()).with_size(20, 4);
        sink.observe(&[0.2, 0.8], 0.5);
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.contains("RMS Plot (2 frames"));
        assert_eq!(written.matches('*').count(), 2);
    }
}
