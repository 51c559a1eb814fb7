//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a tier's share of all words
#[must_use]
pub fn share_bar(count: usize, total: usize, width: usize) -> String {
    create_progress_bar(count as f64, total as f64, width)
}

/// Lay words out in fixed-width columns, `per_line` to a row
#[must_use]
pub fn word_columns(words: &[String], per_line: usize, width: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{w:width$}"))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Percentage of `part` in `whole`, zero when `whole` is zero
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn share_bar_with_no_words() {
        assert_eq!(share_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn word_columns_wraps_rows() {
        let words: Vec<String> = ["cat", "dog", "owl"].iter().map(|w| (*w).to_string()).collect();
        let rows = word_columns(&words, 2, 5);
        assert_eq!(rows, vec!["cat   dog", "owl"]);
    }

    #[test]
    fn percent_handles_zero() {
        assert!(percent(3, 0).abs() < f64::EPSILON);
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
