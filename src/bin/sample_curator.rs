use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sample_curator::audio::{read_pcm, write_pcm};
use sample_curator::config::{AppConfig, TrimConfig};
use sample_curator::library::{OrganizeReport, Organizer};
use sample_curator::Trimmer;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "sample_curator",
    about = "Trim silence from WAV samples and sort them into category folders"
)]
struct Cli {
    /// JSON config file; missing keys keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Trim and sort every matching WAV under a directory tree
    Organize {
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        target: PathBuf,
        #[command(flatten)]
        trim: TrimArgs,
        /// Accept `.WAV`, `.Wav`, ... as well as `.wav`
        #[arg(long)]
        ignore_extension_case: bool,
        /// Stop at the first file that fails instead of skipping it
        #[arg(long)]
        fail_fast: bool,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Trim a single WAV file
    Trim {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[command(flatten)]
        trim: TrimArgs,
    },
    /// List category keywords in tie-break order
    Categories,
}

#[derive(Args, Debug, Clone)]
struct TrimArgs {
    /// Analysis window size in samples
    #[arg(long)]
    frame_length: Option<usize>,
    /// Minimum RMS energy for a frame to count as sound
    #[arg(long)]
    threshold: Option<f32>,
    /// Print each file's RMS series as a text plot on stderr
    #[arg(long)]
    plot_rms: bool,
}

impl TrimArgs {
    fn apply(&self, config: &mut TrimConfig) {
        if let Some(frame_length) = self.frame_length {
            config.frame_length = frame_length;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        config.plot_rms |= self.plot_rms;
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = cli
        .config
        .as_ref()
        .map(AppConfig::load_from_file)
        .unwrap_or_default();

    match cli.command {
        Commands::Organize {
            source,
            target,
            trim,
            ignore_extension_case,
            fail_fast,
            report,
        } => {
            trim.apply(&mut config.trim);
            config.organize.extension_case_sensitive &= !ignore_extension_case;
            config.organize.fail_fast |= fail_fast;
            run_organize(&config, &source, &target, report)
        }
        Commands::Trim {
            input,
            output,
            trim,
        } => {
            trim.apply(&mut config.trim);
            run_trim(&config.trim, &input, &output)
        }
        Commands::Categories => run_categories(&config),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_organize(
    config: &AppConfig,
    source: &Path,
    target: &Path,
    report_path: Option<PathBuf>,
) -> Result<ExitCode> {
    let organizer = Organizer::new(config).context("invalid organizer configuration")?;
    let report = organizer
        .run(source, target)
        .with_context(|| format!("organizing {}", source.display()))?;

    emit_report(&report, report_path)?;

    if report.has_failures() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::from(0))
    }
}

fn run_trim(config: &TrimConfig, input: &Path, output: &Path) -> Result<ExitCode> {
    let trimmer = Trimmer::new(config.clone()).context("invalid trim configuration")?;
    let audio = read_pcm(input)?;
    let trimmed = trimmer.clip_pcm(&audio);
    write_pcm(output, &trimmed)?;

    let summary = TrimSummary {
        input,
        output,
        sample_rate: audio.sample_rate(),
        channels: audio.channels(),
        frames_before: audio.frame_count(),
        frames_after: trimmed.frame_count(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(ExitCode::from(0))
}

fn run_categories(config: &AppConfig) -> Result<ExitCode> {
    let organizer = Organizer::new(config).context("invalid category configuration")?;
    for (idx, name) in organizer.vocabulary().names().enumerate() {
        println!("{:>2} {}", idx + 1, name);
    }
    Ok(ExitCode::from(0))
}

fn emit_report(report: &OrganizeReport, output_path: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(path) = output_path {
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{json}");
    }

    Ok(())
}

#[derive(Serialize)]
struct TrimSummary<'a> {
    input: &'a Path,
    output: &'a Path,
    sample_rate: u32,
    channels: u16,
    frames_before: usize,
    frames_after: usize,
}
