//! Display functions for command results

use super::formatters::{percent, share_bar, word_columns};
use crate::audio::DownloadStats;
use crate::bank::CheckReport;
use crate::commands::{
    AudioReport, DedupeReport, FixOutcome, ScanSummary, TextAnalysis, ValidationReport,
};
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

/// Print the result of a word scan
pub fn print_scan_summary(summary: &ScanSummary) {
    for path in &summary.unreadable_files {
        println!("{} unreadable, skipped: {}", "[WARN]".yellow(), path.display());
    }
    for path in &summary.fallback_files {
        println!(
            "{} not valid JSON, text fallback used: {}",
            "[WARN]".yellow(),
            path.display()
        );
    }
    println!("{} Scanned JSON files: {}", "[OK]".green(), summary.files);
    println!(
        "{} Total words (per-file sum): {}",
        "[OK]".green(),
        summary.total_words
    );
    println!("{} Wrote to: {}", "[OK]".green(), summary.output.display());
}

/// Print the word-bank analysis report
#[allow(clippy::too_many_lines)] // Comprehensive output formatting
pub fn print_check_report(report: &CheckReport) {
    banner("WORD BANK ANALYSIS");
    println!("Version:      {}", or_na(report.version.as_deref()));
    println!("Description:  {}", or_na(report.description.as_deref()));
    println!("Last Updated: {}", or_na(report.last_updated.as_deref()));
    println!(
        "Total Words:  {}",
        report
            .declared_total
            .map_or_else(|| "N/A".to_string(), |n| n.to_string())
    );

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("   Total words:     {}", report.total_words);
    println!("   Unique words:    {}", report.unique_words);
    println!("   Duplicate words: {}", report.duplicate_count());

    println!("\n📈 {}", "Difficulty Distribution".bright_cyan().bold());
    for tier in &report.tiers {
        let bar = share_bar(tier.total, report.total_words, 30);
        println!(
            "   Difficulty {}: [{}] {} words (unique: {})",
            tier.tier,
            bar.green(),
            tier.total,
            tier.distinct
        );
        println!("      Examples: {}", tier.samples.join(", "));
        if tier.distinct > tier.samples.len() {
            println!(
                "      ... and {} more words",
                tier.distinct - tier.samples.len()
            );
        }
    }

    println!();
    if report.duplicates.is_empty() {
        println!("{}", "✅ No duplicate words found".green().bold());
    } else {
        println!("{}", "⚠️  Duplicate words found:".yellow().bold());
        for dup in &report.duplicates {
            println!("   '{}' appears in:", dup.word.bright_yellow());
            for occ in &dup.occurrences {
                println!(
                    "      - {} (difficulty {}) - {}",
                    occ.lesson, occ.difficulty, occ.meaning
                );
            }
        }
    }

    println!("\n📚 {}", "Lessons".bright_cyan().bold());
    for lesson in &report.lessons {
        println!(
            "   {}: {} - {}",
            lesson.name.bold(),
            lesson.phoneme,
            lesson.description
        );
        println!("      Word count: {}", lesson.word_count);
        for (tier, words) in &lesson.by_tier {
            println!(
                "      Difficulty {}: {} words - {}",
                tier,
                words.len(),
                words.join(", ")
            );
        }
    }

    println!("\n🔒 {}", "Tier Exclusivity".bright_cyan().bold());
    if report.overlaps.is_empty() {
        println!("{}", "   ✅ All tiers are exclusive".green());
    } else {
        for overlap in &report.overlaps {
            let words: Vec<&str> = overlap.words.iter().map(String::as_str).collect();
            println!(
                "   {} Difficulty {} and {} share words: {}",
                "❌".red(),
                overlap.first,
                overlap.second,
                words.join(", ")
            );
        }
    }

    println!("\n🎯 {}", "Coverage".bright_cyan().bold());
    for tier in crate::tiers::Difficulty::KNOWN {
        let count = report.distinct_in(tier);
        if let Some(short) = report.shortfalls.iter().find(|s| s.tier == tier) {
            println!(
                "   {} Difficulty {} insufficient words: {} < {}",
                "⚠️ ".yellow(),
                tier,
                short.count,
                short.required
            );
        } else {
            println!(
                "   {} Difficulty {} sufficient words: {} >= {}",
                "✅".green(),
                tier,
                count,
                report.min_per_tier
            );
        }
    }

    println!();
    if report.has_errors() {
        println!("{}", "❌ Word bank has consistency errors".red().bold());
    } else {
        println!("{}", "✅ Analysis complete".green().bold());
    }
}

/// Print the result of a word-bank fix
pub fn print_fix_outcome(outcome: &FixOutcome) {
    banner("WORD BANK FIX");
    let result = &outcome.result;

    if let Some(backup) = &outcome.backup {
        println!("Backup created: {}", backup.display());
    }

    println!("\n🧹 {}", "Step 1: Removing duplicate words".bright_cyan().bold());
    for removed in &result.removed {
        println!(
            "   Removing duplicate '{}' from {}",
            removed.word, removed.lesson
        );
    }
    if result.removed.is_empty() {
        println!("   No duplicates");
    }

    println!("\n⚖️  {}", "Step 2: Rebalancing difficulty".bright_cyan().bold());
    println!("   Changed difficulty for {} words", result.changes.len());
    for change in &result.changes {
        println!(
            "     {}: {} -> {} ({})",
            change.word, change.old, change.new, change.lesson
        );
    }

    println!("\n📝 {}", "Step 3: Metadata".bright_cyan().bold());
    println!("   Total words after fix: {}", result.total_words);
    if let Some(version) = &result.version {
        println!("   Version: {version}");
    }
    for tier in crate::tiers::Difficulty::KNOWN {
        let count = result.count_in(tier);
        println!(
            "   Difficulty {}: [{}] {:4} words ({:5.1}%)",
            tier,
            share_bar(count, result.total_words, 30).green(),
            count,
            percent(count, result.total_words)
        );
    }

    println!();
    if outcome.written {
        println!("{}", "✅ Fix completed successfully!".green().bold());
    } else {
        println!("{}", "Dry run: nothing was written".yellow().bold());
    }
}

/// Print the download statistics block
pub fn print_download_stats(stats: &DownloadStats) {
    banner("DOWNLOAD STATISTICS");
    println!("   Total words:     {}", stats.total_words);
    println!("   Existing files:  {}", stats.existing_files);
    println!("   Already present: {}", stats.skipped);
    println!(
        "   Downloaded:      {}",
        stats.downloaded.to_string().green()
    );
    println!("   Failed:          {}", stats.failed.to_string().red());
    if stats.interrupted {
        println!(
            "   Not attempted:   {}",
            stats.pending.to_string().yellow()
        );
    }

    if !stats.failed_words.is_empty() {
        println!("   Failed words:    {}", stats.failed_words.join(", "));
    }

    println!();
    if stats.interrupted {
        println!("{}", "⏹️  Interrupted by user".yellow().bold());
    } else if stats.failed > 0 {
        println!(
            "{}",
            "⚠️  Some downloads failed, re-run to retry".yellow().bold()
        );
    } else if stats.downloaded > 0 {
        println!("{}", "✅ All audio files downloaded!".green().bold());
    } else {
        println!("{}", "✅ All audio files are up to date!".green().bold());
    }
}

/// Print the result of an audio run
pub fn print_audio_report(report: &AudioReport) {
    println!("🔍 Scanned {} JSON files", report.json_files);
    println!("   {} unique words", report.stats.total_words);
    println!("   {} audio files present", report.stats.existing_files);

    if report.dry_run {
        println!(
            "\n{} words missing audio:",
            report.missing.len().to_string().bright_yellow().bold()
        );
        for row in word_columns(&report.missing, 8, 15) {
            println!("   {row}");
        }
        return;
    }

    print_download_stats(&report.stats);
}

/// Print free-text analysis
pub fn print_text_analysis(result: &TextAnalysis) {
    banner("DOCUMENT ANALYSIS");
    println!("File:                 {}", result.file);
    println!("Total words (repeats): {}", result.total_words);
    println!(
        "Unique words:          {}",
        result.unique_words.to_string().bright_yellow().bold()
    );
    println!("\n{}", "Unique words (alphabetical):".bright_cyan());
    println!("{}", "─".repeat(60).cyan());
    for row in word_columns(&result.words, 10, 15) {
        println!("{row}");
    }
}

/// Print a single-file validation result
pub fn print_validation(report: &ValidationReport) {
    println!("{} {} is valid JSON", "✅".green(), report.file);
    println!("ID:     {}", or_na(report.id.as_deref()));
    println!("Name:   {}", or_na(report.name.as_deref()));
    println!("Words:  {}", report.token_count);
}

/// Print a cross-file duplicate check
pub fn print_dedupe_report(report: &DedupeReport) {
    println!("🔍 Checking: {}", report.file);
    println!("📁 Other files scanned: {}", report.other_files);
    println!("📚 Distinct words in other files: {}", report.other_words);
    println!("📖 Words in this file: {}", report.new_words);
    println!();

    if report.is_clean() {
        println!("{}", "✅ No duplicates, every word is new".green().bold());
        return;
    }

    println!(
        "{}",
        format!(
            "❌ {} words already appear in other files:",
            report.duplicates.len()
        )
        .red()
        .bold()
    );
    for chunk in report.duplicates.chunks(5) {
        println!("   {}", chunk.join(", "));
    }
    println!("\n⚠️  Remove these words from the file's word list");
}
