//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audio_report, print_check_report, print_dedupe_report, print_download_stats,
    print_fix_outcome, print_scan_summary, print_text_analysis, print_validation,
};
