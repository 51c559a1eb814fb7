//! Command implementations

pub mod analyze;
pub mod audio;
pub mod check;
pub mod dedupe;
pub mod fix;
pub mod scan;
pub mod validate;

pub use analyze::{TextAnalysis, analyze_file, analyze_text};
pub use audio::{AudioOptions, AudioReport, run_audio};
pub use check::check_bank_file;
pub use dedupe::{DedupeReport, find_cross_file_duplicates};
pub use fix::{FixOutcome, fix_bank_file};
pub use scan::{ScanSummary, run_scan};
pub use validate::{ValidationReport, validate_file};
