#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! One `defect` record per defect in traversal order, followed by a single
//! `summary` record.

use crate::engine::WalkReport;
use crate::types::Defect;
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output formatter
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format one defect as a single JSON line (without trailing newline)
    ///
    /// Paths that are not valid UTF-8 are written lossily, the same way the
    /// human output displays them.
    pub fn format_defect(&self, defect: &Defect) -> serde_json::Result<String> {
        let record = DefectRecord {
            record_type: "defect",
            file: defect.file.to_string_lossy().into_owned(),
            line: defect.line,
        };
        serde_json::to_string(&record)
    }

    /// Format the closing summary record (without trailing newline)
    pub fn format_summary(
        &self,
        roots: &[PathBuf],
        report: &WalkReport,
    ) -> serde_json::Result<String> {
        let record = SummaryRecord {
            record_type: "summary",
            roots: roots
                .iter()
                .map(|root| root.to_string_lossy().into_owned())
                .collect(),
            files_checked: report.files_checked,
            defects: report.defect_count(),
            passed: report.passed(),
        };
        serde_json::to_string(&record)
    }
}

/// Defect record for JSONL output
#[derive(Debug, Serialize)]
struct DefectRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: String,
    line: usize,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    roots: Vec<String>,
    files_checked: usize,
    defects: usize,
    passed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(defects: Vec<Defect>, files_checked: usize) -> WalkReport {
        WalkReport {
            defects,
            files_checked,
            ..WalkReport::default()
        }
    }

    fn parse(line: &str) -> serde_json::Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_format_defect() {
        let line = JsonlFormatter::new()
            .format_defect(&Defect::new("/repo/src/lib.rs", 4))
            .unwrap();
        let value = parse(&line);

        assert_eq!(value["type"], "defect");
        assert_eq!(value["file"], "/repo/src/lib.rs");
        assert_eq!(value["line"], 4);
    }

    #[cfg(unix)]
    #[test]
    fn test_format_defect_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let file = PathBuf::from(OsStr::from_bytes(b"/repo/src/bad\xffname.rs"));
        let line = JsonlFormatter::new()
            .format_defect(&Defect::new(file, 3))
            .unwrap();
        assert!(!line.is_empty());

        let value = parse(&line);
        assert_eq!(value["type"], "defect");
        assert_eq!(value["file"], "/repo/src/bad\u{FFFD}name.rs");
        assert_eq!(value["line"], 3);
    }

    #[test]
    fn test_format_clean_summary() {
        let roots = vec![PathBuf::from("./src")];
        let line = JsonlFormatter::new()
            .format_summary(&roots, &report(vec![], 2))
            .unwrap();

        let summary = parse(&line);
        assert_eq!(summary["type"], "summary");
        assert_eq!(summary["roots"][0], "./src");
        assert_eq!(summary["files_checked"], 2);
        assert_eq!(summary["defects"], 0);
        assert_eq!(summary["passed"], true);
    }

    #[test]
    fn test_format_failing_summary() {
        let roots = vec![PathBuf::from("src"), PathBuf::from("lib")];
        let defects = vec![Defect::new("/z.rs", 9), Defect::new("/a.rs", 1)];
        let line = JsonlFormatter::new()
            .format_summary(&roots, &report(defects, 2))
            .unwrap();

        let summary = parse(&line);
        assert_eq!(summary["roots"][1], "lib");
        assert_eq!(summary["defects"], 2);
        assert_eq!(summary["passed"], false);
    }
}
