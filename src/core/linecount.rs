//! Recursive source line counting.

use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Exclusion substrings that always apply, whatever the caller supplies.
pub const DEFAULT_EXCLUDES: [&str; 2] = ["test", "Test"];

/// Line count of a single matching file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as produced by the traversal (prefixed by the root)
    pub path: PathBuf,
    /// Number of newline-delimited lines
    pub lines: usize,
}

/// Configuration for a line counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCountConfig {
    /// Directory to traverse
    pub root: PathBuf,
    /// Target file extension, with or without the leading dot
    pub extension: String,
    /// Caller supplied exclusion substrings
    pub excludes: Vec<String>,
}

impl Default for LineCountConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "java".into(),
            excludes: Vec::new(),
        }
    }
}

impl LineCountConfig {
    /// Caller supplied exclusions followed by [`DEFAULT_EXCLUDES`].
    pub fn effective_excludes(&self) -> Vec<String> {
        let mut excludes = self.excludes.clone();
        for default in DEFAULT_EXCLUDES {
            if !excludes.iter().any(|e| e == default) {
                excludes.push(default.to_string());
            }
        }
        excludes
    }
}

/// Builder for [`LineCountConfig`].
pub struct LineCountConfigBuilder {
    pub config: LineCountConfig,
}

impl LineCountConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LineCountConfig::default(),
        }
    }

    /// Sets the directory to traverse.
    pub fn root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.config.root = root.into();
        self
    }

    /// Sets the target extension.
    pub fn extension(mut self, ext: &str) -> Self {
        self.config.extension = ext.to_string();
        self
    }

    /// Adds one exclusion substring.
    pub fn exclude(mut self, pattern: &str) -> Self {
        self.config.excludes.push(pattern.to_string());
        self
    }

    /// Adds several exclusion substrings.
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excludes.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> LineCountConfig {
        self.config
    }
}

impl Default for LineCountConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate result of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCountReport {
    /// Counted files in traversal order
    pub files: Vec<FileRecord>,
    /// Sum of all file line counts
    pub total_lines: usize,
}

impl LineCountReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Writes one `path: count` line per file, then the summary line.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        for record in &self.files {
            writeln!(out, "{}: {}", record.path.display(), record.lines)?;
        }
        writeln!(
            out,
            "{} file, total line number: {}",
            self.file_count(),
            self.total_lines
        )?;
        Ok(())
    }
}

/// True when any exclusion substring occurs in the path.
pub fn is_excluded<S: AsRef<str>>(path: &Path, excludes: &[S]) -> bool {
    let path = path.to_string_lossy();
    excludes.iter().any(|e| path.contains(e.as_ref()))
}

/// True when the path's extension equals `ext` (leading dot ignored).
pub fn matches_extension(path: &Path, ext: &str) -> bool {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == ext)
}

/// Counts newline-delimited lines of a UTF-8 text file.
///
/// A trailing line without a newline still counts. Invalid UTF-8 is an error.
pub fn count_file_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut count = 0;
    for line in BufReader::new(file).lines() {
        line.with_context(|| format!("failed to read {} as UTF-8 text", path.display()))?;
        count += 1;
    }
    Ok(count)
}

/// Walks `config.root` and counts lines of every matching, non-excluded file.
///
/// Exclusions are tested against the same path that is reported, root
/// prefix included. The first traversal or read failure aborts the run.
pub fn count_lines(config: &LineCountConfig) -> Result<LineCountReport> {
    let excludes = config.effective_excludes();
    let mut report = LineCountReport::default();

    debug!(root = %config.root.display(), ext = %config.extension, ?excludes, "counting lines");

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to walk {}", config.root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !matches_extension(path, &config.extension) {
            continue;
        }
        if is_excluded(path, &excludes) {
            debug!(path = %path.display(), "excluded");
            continue;
        }

        let lines = count_file_lines(path)?;
        report.total_lines += lines;
        report.files.push(FileRecord {
            path: path.to_path_buf(),
            lines,
        });
    }

    info!(
        files = report.file_count(),
        total = report.total_lines,
        "line count finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = LineCountConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.extension, "java");
        assert!(config.excludes.is_empty());
        assert_eq!(config.effective_excludes(), vec!["test", "Test"]);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LineCountConfigBuilder::new()
            .root("/src")
            .extension(".rs")
            .exclude("generated")
            .excludes(["vendor", "test"])
            .build();

        assert_eq!(config.root, PathBuf::from("/src"));
        assert_eq!(config.extension, ".rs");
        assert_eq!(config.excludes, vec!["generated", "vendor", "test"]);
        // "test" is not duplicated
        assert_eq!(
            config.effective_excludes(),
            vec!["generated", "vendor", "test", "Test"]
        );
    }

    #[test]
    fn test_matches_extension() {
        assert!(matches_extension(Path::new("a/B.java"), "java"));
        assert!(matches_extension(Path::new("a/B.java"), ".java"));
        assert!(!matches_extension(Path::new("a/B.javax"), "java"));
        assert!(!matches_extension(Path::new("a/java"), "java"));
    }

    #[test]
    fn test_is_excluded() {
        let excludes = ["gen", "Test"];
        assert!(is_excluded(Path::new("src/gen/A.java"), &excludes));
        assert!(is_excluded(Path::new("src/FooTest.java"), &excludes));
        assert!(!is_excluded(Path::new("src/main/A.java"), &excludes));
    }

    #[test]
    fn test_count_file_lines() {
        let dir = TempDir::new().unwrap();
        let five = dir.path().join("five.java");
        fs::write(&five, "a\nb\nc\nd\ne\n").unwrap();
        assert_eq!(count_file_lines(&five).unwrap(), 5);

        let unterminated = dir.path().join("two.java");
        fs::write(&unterminated, "a\nb").unwrap();
        assert_eq!(count_file_lines(&unterminated).unwrap(), 2);

        let empty = dir.path().join("empty.java");
        fs::write(&empty, "").unwrap();
        assert_eq!(count_file_lines(&empty).unwrap(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.java");
        fs::write(&bad, [b'a', b'\n', 0xff, 0xfe, b'\n']).unwrap();
        assert!(count_file_lines(&bad).is_err());
    }

    #[test]
    fn test_render() {
        let report = LineCountReport {
            files: vec![
                FileRecord { path: PathBuf::from("./A.java"), lines: 3 },
                FileRecord { path: PathBuf::from("./b/C.java"), lines: 4 },
            ],
            total_lines: 7,
        };
        let mut out = Vec::new();
        report.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "./A.java: 3\n./b/C.java: 4\n2 file, total line number: 7\n"
        );
    }
}
