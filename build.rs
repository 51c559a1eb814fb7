//! Build script to generate the embedded tier exception table
//!
//! Reads `data/tier_exceptions.txt` (one `word tier` pair per line, `#` comments)
//! and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_exception_table(
        "data/tier_exceptions.txt",
        &Path::new(&out_dir).join("tier_exceptions.rs"),
        "TIER_EXCEPTIONS",
        "Words whose difficulty tier does not follow the length rule",
    );

    println!("cargo:rerun-if-changed=data/tier_exceptions.txt");
}

fn generate_exception_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(String, u8)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut parts = line.split_whitespace();
            let word = parts
                .next()
                .unwrap_or_else(|| panic!("Missing word in line: {line}"))
                .to_lowercase();
            let tier: u8 = parts
                .next()
                .and_then(|t| t.parse().ok())
                .unwrap_or_else(|| panic!("Missing or invalid tier in line: {line}"));
            assert!((1..=3).contains(&tier), "Tier out of range in line: {line}");
            (word, tier)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated tier exception table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, u8)] = &[").unwrap();

    for (word, tier) in entries {
        writeln!(output, "    (\"{word}\", {tier}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
