//! Word-bank fix command
//!
//! Backs the bank up, repairs it and writes it back in place.

use crate::bank::{RepairResult, create_backup, load_bank, repair_bank, save_bank};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Outcome of a fix run
pub struct FixOutcome {
    pub result: RepairResult,
    pub backup: Option<PathBuf>,
    pub written: bool,
}

/// Repair the bank at `path`
///
/// With `dry_run` nothing is written; the returned result shows what would
/// change.
///
/// # Errors
///
/// Returns an error if the bank cannot be read or parsed, the backup cannot
/// be created, or the repaired bank cannot be written.
pub fn fix_bank_file(path: &Path, today: &str, dry_run: bool) -> Result<FixOutcome> {
    let mut bank = load_bank(path)?;

    let backup = if dry_run {
        None
    } else {
        Some(create_backup(path).context("Failed to create backup, nothing written")?)
    };

    let result = repair_bank(&mut bank, today);

    if !dry_run {
        save_bank(&bank, path)?;
    }

    Ok(FixOutcome {
        result,
        backup,
        written: !dry_run,
    })
}
