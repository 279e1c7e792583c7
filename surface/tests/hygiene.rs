//! Hygiene — enforces coding standards at test time.
//!
//! Scans the surface crate's production sources for antipatterns. Every
//! pattern has a budget of zero: panicking macros crash the page, and
//! silently discarded errors hide broken canvas calls.

use std::fs;
use std::path::Path;

/// Patterns that must not appear in production code.
const FORBIDDEN: &[&str] = &[
    // Panics — these crash the process.
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
    "todo!(",
    "unimplemented!(",
    // Silent loss — discards errors without inspecting.
    "let _ =",
    ".ok()",
    // Style / structure.
    "#[allow(dead_code)]",
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` modules.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    let mut out = Vec::new();
    for file in files {
        for (idx, line) in file.content.lines().enumerate() {
            if line.contains(pattern) {
                out.push(format!("  {}:{}: {}", file.path, idx + 1, line.trim()));
            }
        }
    }
    out
}

#[test]
fn production_sources_are_clean() {
    let files = source_files();
    let mut report = String::new();
    for pattern in FORBIDDEN {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push_str(&format!("`{pattern}` ({} hits):\n{}\n", found.len(), found.join("\n")));
        }
    }
    assert!(report.is_empty(), "forbidden patterns in production code:\n{report}");
}
