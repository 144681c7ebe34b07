use crate::promoter::ALL_SCORES;
use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="promfinder",
          version=&**FULL_VERSION,
          about="Bacterial promoter finder based on -35/-10 consensus elements",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Find and rank promoter candidates")]
    Scan(ScanArgs),
    #[clap(about = "Validate a sequence file and summarize its content")]
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("scan")))]
#[command(arg_required_else_help(true))]
pub struct ScanArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "sequence")]
    #[clap(help = "Text file with the DNA sequence (optionally gzipped)")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub sequence_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Write the report to this file instead of stdout")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: Option<PathBuf>,

    #[clap(short = 'n')]
    #[clap(long = "top")]
    #[clap(help = "Number of candidates to report")]
    #[clap(value_name = "TOP")]
    #[clap(default_value = "5")]
    pub top: usize,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "min-score")]
    #[clap(value_name = "SCORE")]
    #[clap(help = "Minimum candidate score to report (40, 60, 80 or 100)")]
    #[clap(default_value = "40")]
    #[arg(value_parser = check_min_score)]
    pub min_score: u32,

    #[clap(help_heading("Output"))]
    #[clap(long = "width")]
    #[clap(value_name = "WIDTH")]
    #[clap(help = "Bases per line in the sequence view")]
    #[clap(default_value = "60")]
    #[arg(value_parser = positive_usize)]
    pub width: usize,

    #[clap(help_heading("Output"))]
    #[clap(long = "flank-len")]
    #[clap(value_name = "FLANK_LEN")]
    #[clap(help = "Bases shown around each candidate in the sequence view")]
    #[clap(default_value = "10")]
    pub flank_len: usize,

    #[clap(help_heading("Output"))]
    #[clap(long = "show-sequence")]
    #[clap(help = "Print the cleaned input sequence in the report")]
    pub show_sequence: bool,

    #[clap(help_heading("Output"))]
    #[clap(long = "no-color")]
    #[clap(help = "Disable motif highlighting")]
    pub no_color: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("validate")))]
#[command(arg_required_else_help(true))]
pub struct ValidateArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "sequence")]
    #[clap(help = "Text file with the DNA sequence (optionally gzipped)")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_file_exists)]
    pub sequence_path: PathBuf,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_min_score(s: &str) -> Result<u32> {
    let score: u32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid score", s))?;
    if ALL_SCORES.contains(&score) {
        Ok(score)
    } else {
        Err(format!(
            "Score must be one of {}, got: {}",
            itertools::join(ALL_SCORES.iter().rev(), ", "),
            score
        ))
    }
}

fn positive_usize(s: &str) -> Result<usize> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;
    if value == 0 {
        Err("Value must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
