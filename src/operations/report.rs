use crate::error::RenameError;
use crate::operations::PlannedMove;
use crate::utils::file_utils::relative_display;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: RenameError,
}

/// Attempted vs. succeeded counts for one stage, plus what went wrong.
#[derive(Debug, Default)]
pub struct StageReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<FileFailure>,
}

impl StageReport {
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, path: &Path, error: RenameError) {
        self.attempted += 1;
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            error,
        });
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub dry_run: bool,
    pub discovered: usize,
    /// Scanned candidate files.
    pub rewrite: StageReport,
    /// Files whose directives were (or would be) rewritten.
    pub rewritten_files: Vec<PathBuf>,
    pub rename: StageReport,
    pub renamed_files: Vec<PlannedMove>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        !self.rewrite.failures.is_empty() || !self.rename.failures.is_empty()
    }

    pub fn display(&self, root: &Path) {
        println!();
        for line in self.summary_lines(root) {
            println!("{line}");
        }
    }

    /// The summary block: per-stage counts, then one line per failure.
    pub fn summary_lines(&self, root: &Path) -> Vec<String> {
        let (updated, renamed) = if self.dry_run {
            ("would update", "would rename")
        } else {
            ("updated", "renamed")
        };

        let mut lines = vec![
            "📊 Summary".to_string(),
            format!("    discovered: {}", self.discovered),
            format!(
                "    scanned:    {}/{} files ({} failed, {} {})",
                self.rewrite.succeeded,
                self.rewrite.attempted,
                self.rewrite.failed(),
                self.rewritten_files.len(),
                updated
            ),
            format!(
                "    {renamed}: {}/{} files ({} failed)",
                self.rename.succeeded,
                self.rename.attempted,
                self.rename.failed()
            ),
        ];

        let failures: Vec<&FileFailure> = self
            .rewrite
            .failures
            .iter()
            .chain(self.rename.failures.iter())
            .collect();
        if failures.is_empty() {
            return lines;
        }

        lines.push(String::new());
        lines.push(format!("⚠️  {} operation(s) failed:", failures.len()));
        for (i, failure) in failures.iter().enumerate() {
            let prefix = if i == failures.len() - 1 {
                "    └── "
            } else {
                "    ├── "
            };
            lines.push(format!(
                "{}{}: {}",
                prefix,
                relative_display(&failure.path, root),
                failure.error
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_stage_report_counts() {
        let mut stage = StageReport::default();
        stage.record_success();
        stage.record_success();
        stage.record_failure(
            Path::new("a.cpp"),
            RenameError::FileRead {
                path: PathBuf::from("a.cpp"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        );

        assert_eq!(stage.attempted, 3);
        assert_eq!(stage.succeeded, 2);
        assert_eq!(stage.failed(), 1);
        assert_eq!(stage.failures[0].path, PathBuf::from("a.cpp"));
    }

    #[test]
    fn test_run_report_has_failures() {
        let mut report = RunReport::default();
        assert!(!report.has_failures());

        report.rename.record_failure(
            Path::new("a.hpp"),
            RenameError::DestinationExists {
                from: PathBuf::from("a.hpp"),
                to: PathBuf::from("a.h"),
            },
        );
        assert!(report.has_failures());
    }

    #[test]
    fn test_summary_lines_for_empty_run() {
        let report = RunReport {
            dry_run: true,
            ..RunReport::default()
        };

        assert_eq!(
            report.summary_lines(Path::new("source")),
            vec![
                "📊 Summary".to_string(),
                "    discovered: 0".to_string(),
                "    scanned:    0/0 files (0 failed, 0 would update)".to_string(),
                "    would rename: 0/0 files (0 failed)".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_lines_list_failures_relative_to_root() {
        let mut report = RunReport::default();
        report.rewrite.record_success();
        report.rename.record_failure(
            Path::new("source/a.hpp"),
            RenameError::DestinationExists {
                from: PathBuf::from("source/a.hpp"),
                to: PathBuf::from("source/a.h"),
            },
        );

        let lines = report.summary_lines(Path::new("source"));
        assert_eq!(lines[2], "    scanned:    1/1 files (0 failed, 0 updated)");
        assert_eq!(lines[3], "    renamed: 0/1 files (1 failed)");
        assert_eq!(lines[5], "⚠️  1 operation(s) failed:");
        assert!(lines[6].starts_with("    └── a.hpp: "));
    }
}
