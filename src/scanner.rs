use std::{
    collections::BTreeSet,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Bytes read from a `.ts` file to tell a Linguist catalog from TypeScript.
const SNIFF_LEN: usize = 512;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Catalog paths in lexical order.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(Path::new(base_dir).join(p));
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = Path::new(base_dir).join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|entry| entry.is_dir())),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && has_catalog_extension(path) {
                if looks_like_catalog(path) {
                    files.insert(path_str.into());
                } else if verbose {
                    eprintln!(
                        "{} Skipping {}: not a Qt Linguist catalog",
                        "note:".bold().cyan(),
                        path.display()
                    );
                }
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_catalog_extension(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("ts"))
}

/// `.ts` is shared with TypeScript sources, so peek at the head of the file
/// for the `<TS` root or the `<!DOCTYPE TS>` declaration.
fn looks_like_catalog(path: &Path) -> bool {
    let mut head = Vec::with_capacity(SNIFF_LEN);
    let Ok(file) = File::open(path) else {
        // Unreadable files are kept so loading reports the error.
        return true;
    };
    if file.take(SNIFF_LEN as u64).read_to_end(&mut head).is_err() {
        return true;
    }
    let head = String::from_utf8_lossy(&head);
    let trimmed = head.trim_start_matches('\u{feff}').trim_start();
    ["<?xml", "<!DOCTYPE TS", "<TS"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}
