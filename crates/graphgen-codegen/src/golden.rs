//! Byte-for-byte comparison of generated artifacts against reference files.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{GoldenError, GoldenResult};
use crate::generator::Artifact;

/// Default number of differing lines reported per file.
pub const DEFAULT_MAX_REPORTED: usize = 10;

/// Compares artifacts with a directory of reference files.
#[derive(Debug, Clone)]
pub struct GoldenHarness {
    reference_dir: PathBuf,
    max_reported: usize,
}

/// One differing line. `None` means the side has no such line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    /// 1-based line number.
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// A reference file whose content differs from its artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub key: String,
    /// The first differing lines, capped by the harness limit.
    pub diffs: Vec<LineDiff>,
    /// Number of differing lines in total.
    pub total: usize,
}

/// Outcome of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoldenReport {
    pub matched: Vec<String>,
    pub mismatches: Vec<Mismatch>,
    /// Artifacts without a reference file.
    pub missing: Vec<String>,
    /// Reference files no artifact produced.
    pub stale: Vec<String>,
}

impl GoldenReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.missing.is_empty() && self.stale.is_empty()
    }
}

impl fmt::Display for GoldenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "{} file(s) match the reference", self.matched.len());
        }

        for mismatch in &self.mismatches {
            writeln!(f, "mismatch: {} ({} line(s) differ)", mismatch.key, mismatch.total)?;
            for diff in &mismatch.diffs {
                writeln!(
                    f,
                    "  line {}:\n    - {}\n    + {}",
                    diff.line,
                    diff.expected.as_deref().unwrap_or("<none>"),
                    diff.actual.as_deref().unwrap_or("<none>")
                )?;
            }
            if mismatch.total > mismatch.diffs.len() {
                writeln!(f, "  ... {} more", mismatch.total - mismatch.diffs.len())?;
            }
        }
        for key in &self.missing {
            writeln!(f, "missing reference: {key}")?;
        }
        for key in &self.stale {
            writeln!(f, "stale reference: {key}")?;
        }
        writeln!(
            f,
            "{} matched, {} mismatched, {} missing, {} stale",
            self.matched.len(),
            self.mismatches.len(),
            self.missing.len(),
            self.stale.len()
        )
    }
}

impl GoldenHarness {
    pub fn new(reference_dir: impl Into<PathBuf>) -> Self {
        Self {
            reference_dir: reference_dir.into(),
            max_reported: DEFAULT_MAX_REPORTED,
        }
    }

    /// Cap the number of differing lines listed per file.
    pub fn with_max_reported(mut self, max: usize) -> Self {
        self.max_reported = max;
        self
    }

    pub fn reference_dir(&self) -> &Path {
        &self.reference_dir
    }

    /// Compare `artifacts` with the reference directory.
    pub fn verify(&self, artifacts: &[Artifact]) -> GoldenResult<GoldenReport> {
        let mut report = GoldenReport::default();
        let produced: BTreeSet<&str> = artifacts.iter().map(|a| a.key.as_str()).collect();

        for artifact in artifacts {
            let path = self.reference_path(&artifact.key);
            if !path.is_file() {
                report.missing.push(artifact.key.clone());
                continue;
            }
            let expected = std::fs::read_to_string(&path).map_err(|source| GoldenError::Io {
                path: path.clone(),
                source,
            })?;

            if expected == artifact.contents {
                report.matched.push(artifact.key.clone());
            } else {
                debug!(file = %artifact.key, "Reference mismatch");
                report
                    .mismatches
                    .push(self.diff(&artifact.key, &expected, &artifact.contents));
            }
        }

        if self.reference_dir.is_dir() {
            for key in self.reference_keys()? {
                if !produced.contains(key.as_str()) {
                    report.stale.push(key);
                }
            }
        }

        if report.is_clean() {
            info!(files = report.matched.len(), "Output matches reference");
        } else {
            warn!(
                mismatched = report.mismatches.len(),
                missing = report.missing.len(),
                stale = report.stale.len(),
                "Output differs from reference"
            );
        }
        Ok(report)
    }

    /// Replace the reference directory with `artifacts`.
    pub fn accept(&self, artifacts: &[Artifact]) -> GoldenResult<()> {
        if self.reference_dir.exists() {
            std::fs::remove_dir_all(&self.reference_dir).map_err(|source| GoldenError::Io {
                path: self.reference_dir.clone(),
                source,
            })?;
        }

        for artifact in artifacts {
            let path = self.reference_path(&artifact.key);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| GoldenError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(&path, &artifact.contents)
                .map_err(|source| GoldenError::Io { path, source })?;
        }

        info!(
            dir = %self.reference_dir.display(),
            files = artifacts.len(),
            "Accepted reference output"
        );
        Ok(())
    }

    fn reference_path(&self, key: &str) -> PathBuf {
        key.split('/')
            .fold(self.reference_dir.clone(), |path, part| path.join(part))
    }

    /// Every file below the reference directory, as `/`-separated keys.
    fn reference_keys(&self) -> GoldenResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.reference_dir).sort_by_file_name() {
            let entry = entry.map_err(|source| GoldenError::Walk {
                path: self.reference_dir.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.reference_dir) {
                let key = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn diff(&self, key: &str, expected: &str, actual: &str) -> Mismatch {
        let expected: Vec<&str> = expected.split('\n').collect();
        let actual: Vec<&str> = actual.split('\n').collect();
        let mut diffs = Vec::new();
        let mut total = 0;

        for i in 0..expected.len().max(actual.len()) {
            let left = expected.get(i).copied();
            let right = actual.get(i).copied();
            if left == right {
                continue;
            }
            total += 1;
            if diffs.len() < self.max_reported {
                diffs.push(LineDiff {
                    line: i + 1,
                    expected: left.map(str::to_string),
                    actual: right.map(str::to_string),
                });
            }
        }

        Mismatch {
            key: key.to_string(),
            diffs,
            total,
        }
    }
}
