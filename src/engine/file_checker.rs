#![forbid(unsafe_code)]

//! Line-textual documentation check for a single file
//!
//! A file is checked only when its extension is configured. Each line is
//! classified on its trimmed text; a declaration line passes only when the
//! physical line directly above it contains the documentation marker.

use crate::config::Config;
use crate::error::FileCheckError;
use crate::types::{Defect, LineKind, extension_of};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Immutable settings for the documentation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRules {
    extensions: HashSet<String>,
    keywords: Vec<String>,
    ignore_prefixes: Vec<String>,
    doc_marker: String,
}

impl CommentRules {
    /// Creates a new rule set
    ///
    /// `keywords` and `ignore_prefixes` keep their order; the first matching
    /// prefix decides that a line is ignored.
    pub fn new(
        extensions: impl IntoIterator<Item = String>,
        keywords: Vec<String>,
        ignore_prefixes: Vec<String>,
        doc_marker: impl Into<String>,
    ) -> Self {
        Self {
            extensions: extensions.into_iter().collect(),
            keywords,
            ignore_prefixes,
            doc_marker: doc_marker.into(),
        }
    }

    /// Returns true if the text after the last `.` of `path` is a checked extension
    pub fn is_checkable(&self, path: &Path) -> bool {
        self.extensions.contains(&extension_of(path))
    }

    /// Classifies one raw line
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if self
            .ignore_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
        {
            return LineKind::Ignored;
        }

        // Whole tokens only: `fn` must not match `function_counter`
        let mut tokens = trimmed.split(' ');
        if tokens.any(|token| self.keywords.iter().any(|keyword| keyword == token)) {
            LineKind::Declaration
        } else {
            LineKind::Plain
        }
    }

    /// Returns true if `previous` counts as documentation for the line below it
    pub fn is_documented_by(&self, previous: &str) -> bool {
        previous.contains(self.doc_marker.as_str())
    }
}

impl Default for CommentRules {
    fn default() -> Self {
        Config::default().comment_rules()
    }
}

/// Outcome of checking one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Extension is not configured; the file was not opened
    NotCheckable,
    /// File was read and scanned
    Checked(Vec<Defect>),
}

impl FileOutcome {
    pub fn defect_count(&self) -> usize {
        match self {
            FileOutcome::NotCheckable => 0,
            FileOutcome::Checked(defects) => defects.len(),
        }
    }
}

/// Checks single files against a [`CommentRules`] set
#[derive(Debug, Clone, Default)]
pub struct FileChecker {
    rules: CommentRules,
}

impl FileChecker {
    /// Creates a new FileChecker
    pub fn new(rules: CommentRules) -> Self {
        Self { rules }
    }

    /// Check a file on disk
    ///
    /// Files whose extension is not configured are never opened. The file is
    /// read in full and closed before scanning.
    ///
    /// # Errors
    ///
    /// Returns `FileCheckError::Read` if the file cannot be opened or is not valid UTF-8.
    pub fn check_file(&self, path: &Path) -> Result<FileOutcome, FileCheckError> {
        if !self.rules.is_checkable(path) {
            return Ok(FileOutcome::NotCheckable);
        }

        let content = fs::read_to_string(path).map_err(|source| FileCheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(FileOutcome::Checked(self.check_source(path, &content)))
    }

    /// Scan already-loaded file content
    ///
    /// Defects are returned in line order and carry `path` unchanged.
    pub fn check_source(&self, path: &Path, content: &str) -> Vec<Defect> {
        let lines = physical_lines(content);
        let mut defects = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if self.rules.classify(line) != LineKind::Declaration {
                continue;
            }

            // The physical predecessor, even when it is itself an ignored line
            let previous = if i == 0 { "" } else { lines[i - 1] };

            if !self.rules.is_documented_by(previous) {
                defects.push(Defect::new(path, i + 1));
            }
        }

        defects
    }
}

/// Splits `content` on `\n`, `\r\n` and a lone `\r`
///
/// A trailing terminator does not start an extra empty line.
fn physical_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn checker() -> FileChecker {
        FileChecker::default()
    }

    fn lines_of(defects: &[Defect]) -> Vec<usize> {
        defects.iter().map(|d| d.line).collect()
    }

    #[test]
    fn test_documented_and_undocumented_functions() {
        let source = "/// Adds two numbers.\n\
                      fn add(a, b) { return a + b }\n\
                      fn missing_doc(a, b) { return a - b }\n";
        let defects = checker().check_source(Path::new("/src/math.rs"), source);
        assert_eq!(defects, vec![Defect::new("/src/math.rs", 3)]);
    }

    #[test]
    fn test_empty_source() {
        assert!(checker().check_source(Path::new("/a.rs"), "").is_empty());
    }

    #[test]
    fn test_declaration_on_first_line() {
        let defects = checker().check_source(Path::new("/a.rs"), "struct Point;\n");
        assert_eq!(lines_of(&defects), vec![1]);
    }

    #[test]
    fn test_keyword_substring_is_not_a_declaration() {
        let source = "let function_counter = 0;\nlet fn_ptr = f;\nlet x = structure;\n";
        assert!(checker().check_source(Path::new("/a.rs"), source).is_empty());
    }

    #[test]
    fn test_keyword_must_be_whole_token() {
        let rules = CommentRules::default();
        assert_eq!(rules.classify("pub fn run() {"), LineKind::Declaration);
        assert_eq!(rules.classify("    pub(crate) struct Walker {"), LineKind::Declaration);
        assert_eq!(rules.classify("fn(x) -> y"), LineKind::Plain);
        assert_eq!(rules.classify("let f: fn() = g;"), LineKind::Plain);
        assert_eq!(rules.classify("let f = fn_name;"), LineKind::Plain);
    }

    #[test]
    fn test_tab_is_not_a_token_separator() {
        let rules = CommentRules::default();
        assert_eq!(rules.classify("\tfn run() {"), LineKind::Declaration);
        assert_eq!(rules.classify("pub\tfn run() {"), LineKind::Plain);
    }

    #[test]
    fn test_blank_line_breaks_documentation() {
        let source = "/// Documented, but too far away.\n\nfn far() {}\n";
        let defects = checker().check_source(Path::new("/a.rs"), source);
        assert_eq!(lines_of(&defects), vec![3]);
    }

    #[test]
    fn test_attribute_between_doc_and_declaration() {
        let source = "/// A point.\n#[derive(Debug)]\nstruct Point;\n";
        let defects = checker().check_source(Path::new("/a.rs"), source);
        assert_eq!(lines_of(&defects), vec![3]);
    }

    #[test]
    fn test_ignored_lines_are_never_defects() {
        let source = "// fn commented_out() {}\n/* struct Old; */\n * fn in_block()\n*/ fn tail()\n";
        assert!(checker().check_source(Path::new("/a.rs"), source).is_empty());
    }

    #[test]
    fn test_ignored_previous_line_still_counts() {
        let rules = CommentRules::new(
            vec!["rs".to_string()],
            vec!["fn".to_string()],
            vec!["//".to_string()],
            "@doc",
        );
        let checker = FileChecker::new(rules);

        // The ignored comment line is the physical predecessor and carries the marker
        let source = "// @doc run things\nfn run() {}\n";
        assert!(checker.check_source(Path::new("/a.rs"), source).is_empty());

        // An ignored line without the marker does not let the check look further up
        let source = "// @doc run things\n// plain note\nfn run() {}\n";
        let defects = checker.check_source(Path::new("/a.rs"), source);
        assert_eq!(lines_of(&defects), vec![3]);
    }

    #[test]
    fn test_marker_is_a_raw_substring_of_previous_line() {
        let source = "let x = 1; /// trailing doc\nfn run() {}\n";
        assert!(checker().check_source(Path::new("/a.rs"), source).is_empty());

        let source = "    /// Indented doc\n    fn method(&self) {}\n";
        assert!(checker().check_source(Path::new("/a.rs"), source).is_empty());
    }

    #[test]
    fn test_plain_comment_is_not_documentation() {
        let source = "// not a doc comment\nfn run() {}\n";
        let defects = checker().check_source(Path::new("/a.rs"), source);
        assert_eq!(lines_of(&defects), vec![2]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let source = "/// Doc\r\nfn a() {}\r\nfn b() {}\r\n";
        let defects = checker().check_source(Path::new("/a.rs"), source);
        assert_eq!(lines_of(&defects), vec![3]);
    }

    #[test]
    fn test_lone_cr_line_endings() {
        let source = "/// Doc\rfn a() {}\rfn b() {}\r\rstruct C;\r";
        let defects = checker().check_source(Path::new("/a.rs"), source);
        assert_eq!(lines_of(&defects), vec![3, 5]);
    }

    #[test]
    fn test_physical_lines_mixed_terminators() {
        assert_eq!(physical_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(physical_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(physical_lines("\r\n"), vec![""]);
        assert!(physical_lines("").is_empty());
    }

    #[test]
    fn test_line_numbers_count_every_physical_line() {
        let source = "\n\n// comment\n\nstruct Late;\n";
        let defects = checker().check_source(Path::new("/a.rs"), source);
        assert_eq!(lines_of(&defects), vec![5]);
    }

    #[test]
    fn test_is_checkable() {
        let rules = CommentRules::default();
        assert!(rules.is_checkable(Path::new("/src/lib.rs")));
        assert!(!rules.is_checkable(Path::new("/src/lib.py")));
        assert!(!rules.is_checkable(Path::new("/src/Makefile")));
        assert!(!rules.is_checkable(Path::new("/src/lib.rs.bak")));
    }

    #[test]
    fn test_check_file_skips_unchecked_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "fn undocumented() {}\nstruct Nope;\n").unwrap();

        let outcome = checker().check_file(&path).unwrap();
        assert_eq!(outcome, FileOutcome::NotCheckable);
        assert_eq!(outcome.defect_count(), 0);
    }

    #[test]
    fn test_check_file_unchecked_extension_is_never_opened() {
        // Would fail to read if it were opened
        let outcome = checker()
            .check_file(Path::new("/nonexistent/dir/notes.md"))
            .unwrap();
        assert_eq!(outcome, FileOutcome::NotCheckable);
    }

    #[test]
    fn test_check_file_reports_path_and_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lib.rs");
        fs::write(&path, "/// Doc\nfn a() {}\n\nfn b() {}\n").unwrap();

        let outcome = checker().check_file(&path).unwrap();
        assert_eq!(outcome, FileOutcome::Checked(vec![Defect::new(&path, 4)]));
        assert_eq!(outcome.defect_count(), 1);
    }

    #[test]
    fn test_check_file_missing() {
        let result = checker().check_file(Path::new("/nonexistent/dir/lib.rs"));
        match result {
            Err(FileCheckError::Read { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/dir/lib.rs"));
            }
            other => panic!("Expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_file_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.rs");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x66, 0x6e]).unwrap();

        assert!(checker().check_file(&path).is_err());
    }
}
