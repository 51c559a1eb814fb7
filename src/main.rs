//! Word Tetris tools - CLI
//!
//! Vocabulary scans, word-bank checks and repair, and pronunciation audio
//! downloads for the Word Tetris game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use word_tetris_tools::{
    audio::{AssetNaming, DEFAULT_ENDPOINT, DownloadConfig, HttpSpeechSource},
    bank::CheckConfig,
    commands::{
        AudioOptions, analyze_file, check_bank_file, find_cross_file_duplicates, fix_bank_file,
        run_audio, run_scan, validate_file,
    },
    output::{
        print_audio_report, print_check_report, print_dedupe_report, print_fix_outcome,
        print_scan_summary, print_text_analysis, print_validation,
    },
};

/// CSV file name written inside the scanned directory
const DEFAULT_REPORT_NAME: &str = "words.csv";

#[derive(Parser)]
#[command(
    name = "word_tetris",
    about = "Vocabulary, word-bank and audio tools for Word Tetris",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory of JSON word files and write a CSV report
    Scan {
        /// Directory to scan
        #[arg(short, long, env = "WORD_TETRIS_WORDS_DIR", default_value = "words")]
        input: PathBuf,

        /// Output CSV path (default: <input>/words.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the phonics word bank for duplicates and tier problems
    Check {
        /// Word bank file
        #[arg(short, long, env = "WORD_TETRIS_BANK", default_value = "words.json")]
        file: PathBuf,

        /// Distinct words each tier needs
        #[arg(long, default_value_t = CheckConfig::default().min_per_tier)]
        min_per_tier: usize,
    },

    /// Remove duplicates and rebalance tiers in the word bank
    Fix {
        /// Word bank file
        #[arg(short, long, env = "WORD_TETRIS_BANK", default_value = "words.json")]
        file: PathBuf,

        /// Report changes without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Find words without pronunciation audio and download them
    Audio {
        /// Directory of JSON word files
        #[arg(long, env = "WORD_TETRIS_WORDS_DIR", default_value = "words")]
        words_dir: PathBuf,

        /// Directory holding audio clips
        #[arg(long, env = "WORD_TETRIS_AUDIO_DIR", default_value = "audio")]
        audio_dir: PathBuf,

        /// TTS endpoint template; {word} is replaced by the word
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Provider tag in clip file names
        #[arg(long, default_value = "youdao")]
        suffix: String,

        /// List missing words without downloading
        #[arg(long)]
        dry_run: bool,
    },

    /// Count words in a free-text document
    Analyze {
        /// Text file to analyze
        file: PathBuf,
    },

    /// Validate a single JSON word file
    Validate {
        /// JSON file to validate
        file: PathBuf,
    },

    /// Check a word file against every other file for repeated words
    Dedupe {
        /// JSON file to check
        file: PathBuf,

        /// Directory of existing word files
        #[arg(short = 'd', long, env = "WORD_TETRIS_WORDS_DIR", default_value = "words")]
        words_dir: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "word_tetris_tools=warn,word_tetris=warn",
        1 => "word_tetris_tools=info,word_tetris=info",
        _ => "word_tetris_tools=debug,word_tetris=debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Scan { input, output } => run_scan_command(&input, output),
        Commands::Check { file, min_per_tier } => run_check_command(&file, min_per_tier),
        Commands::Fix { file, dry_run } => run_fix_command(&file, dry_run),
        Commands::Audio {
            words_dir,
            audio_dir,
            endpoint,
            suffix,
            dry_run,
        } => run_audio_command(words_dir, audio_dir, &endpoint, suffix, dry_run),
        Commands::Analyze { file } => {
            print_text_analysis(&analyze_file(&file)?);
            Ok(())
        }
        Commands::Validate { file } => {
            print_validation(&validate_file(&file)?);
            Ok(())
        }
        Commands::Dedupe { file, words_dir } => run_dedupe_command(&file, &words_dir),
    }
}

fn run_scan_command(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| input.join(DEFAULT_REPORT_NAME));
    let summary = run_scan(input, &output)?;
    print_scan_summary(&summary);
    Ok(())
}

fn run_check_command(file: &Path, min_per_tier: usize) -> Result<()> {
    let config = CheckConfig { min_per_tier };
    let report = check_bank_file(file, &config)?;
    print_check_report(&report);

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_fix_command(file: &Path, dry_run: bool) -> Result<()> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let outcome = fix_bank_file(file, &today, dry_run)?;
    print_fix_outcome(&outcome);
    Ok(())
}

fn run_audio_command(
    words_dir: PathBuf,
    audio_dir: PathBuf,
    endpoint: &str,
    suffix: String,
    dry_run: bool,
) -> Result<()> {
    let interrupt = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupt);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .context("Failed to install Ctrl-C handler")?;

    let source = HttpSpeechSource::new(endpoint)
        .with_context(|| format!("Invalid endpoint: {endpoint}"))?;

    let options = AudioOptions {
        words_dir,
        audio_dir,
        naming: AssetNaming {
            suffix,
            ..AssetNaming::default()
        },
        download: DownloadConfig::default(),
        dry_run,
    };

    let report = run_audio(&options, &source, interrupt)?;
    print_audio_report(&report);
    Ok(())
}

fn run_dedupe_command(file: &Path, words_dir: &Path) -> Result<()> {
    let report = find_cross_file_duplicates(file, words_dir)?;
    print_dedupe_report(&report);

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
