// Debug module - diagnostic side channels for the trimmer

pub mod rms_plot;

pub use rms_plot::{render_rms_plot, TerminalPlot};
