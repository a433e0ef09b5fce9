#![forbid(unsafe_code)]

//! Recursive traversal of root directories
//!
//! The walker enumerates every entry below a root in file-name order, hands
//! regular files to the [`FileChecker`] on a rayon pool and folds the results
//! back in traversal order, so defects come out the same on every run.

use crate::config::Config;
use crate::engine::file_checker::{FileChecker, FileOutcome};
use crate::error::WalkError;
use crate::types::{Defect, GlobPattern};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Traversal options that do not affect how a single file is checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Patterns matched against paths relative to the root
    pub exclude: Vec<GlobPattern>,
    /// Respect .gitignore files
    pub gitignore: bool,
}

/// Reason why an entry was not checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Path, or a directory above it, matched an exclude pattern
    ExcludedByPattern,
    /// Extension is not in the checked set
    UncheckedExtension,
    /// Neither a regular file nor a directory (symlink, socket, ...)
    NotAFile,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ExcludedByPattern => "excluded by pattern",
            SkipReason::UncheckedExtension => "unchecked extension",
            SkipReason::NotAFile => "not a regular file",
        }
    }
}

/// An entry that was seen but not checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Progress events emitted while walking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    /// About to walk a root, as it was configured
    RootStarted(&'a Path),
    /// A defect was found
    Defect(&'a Defect),
}

/// Aggregated result of one or more walks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// Defects in traversal order
    pub defects: Vec<Defect>,
    /// Files that were read and scanned
    pub files_checked: usize,
    /// Entries that were not checked
    pub skipped: Vec<SkippedEntry>,
    /// Unreadable files and traversal errors below a valid root
    pub warnings: Vec<String>,
}

impl WalkReport {
    pub fn defect_count(&self) -> usize {
        self.defects.len()
    }

    /// True when no defects were found
    pub fn passed(&self) -> bool {
        self.defects.is_empty()
    }

    /// Adds another report to this one
    pub fn merge(&mut self, other: WalkReport) {
        self.defects.extend(other.defects);
        self.files_checked += other.files_checked;
        self.skipped.extend(other.skipped);
        self.warnings.extend(other.warnings);
    }
}

/// Walks root directories and checks every file beneath them
pub struct TreeWalker {
    checker: FileChecker,
    exclude_set: Option<GlobSet>,
    gitignore: bool,
}

impl TreeWalker {
    /// Creates a new TreeWalker
    ///
    /// # Errors
    ///
    /// Returns `WalkError::InvalidGlob` if an exclude pattern does not compile.
    pub fn new(checker: FileChecker, options: &WalkOptions) -> Result<Self, WalkError> {
        let exclude_set = if options.exclude.is_empty() {
            None
        } else {
            Some(Self::build_globset(&options.exclude)?)
        };

        Ok(Self {
            checker,
            exclude_set,
            gitignore: options.gitignore,
        })
    }

    /// Creates a TreeWalker from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, WalkError> {
        let options = WalkOptions {
            exclude: config.doccheck.exclude.clone(),
            gitignore: config.doccheck.gitignore,
        };
        Self::new(FileChecker::new(config.comment_rules()), &options)
    }

    /// Builds a GlobSet from patterns
    fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, WalkError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern.as_str()).map_err(|e| WalkError::InvalidGlob {
                pattern: pattern.as_str().to_string(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| WalkError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Returns the absolute form of `root`
    ///
    /// # Errors
    ///
    /// Returns `WalkError::RootNotFound` if `root` is not an existing directory.
    pub fn resolve_root(root: &Path) -> Result<PathBuf, WalkError> {
        if !root.is_dir() {
            return Err(WalkError::RootNotFound(root.to_path_buf()));
        }
        Ok(std::path::absolute(root)?)
    }

    /// Walk a single root, discarding progress events
    pub fn walk(&self, root: &Path) -> Result<WalkReport, WalkError> {
        self.walk_with(root, |_| {})
    }

    /// Walk a single root, calling `on_defect` for each defect in traversal order
    ///
    /// Files are checked in parallel; `on_defect` runs after every file below
    /// `root` has been checked.
    pub fn walk_with<F>(&self, root: &Path, mut on_defect: F) -> Result<WalkReport, WalkError>
    where
        F: FnMut(&Defect),
    {
        let root = Self::resolve_root(root)?;
        let mut report = WalkReport::default();

        let files = self.discover(&root, &mut report);

        // Each file is opened, read and closed inside its own check
        let outcomes: Vec<_> = files
            .par_iter()
            .map(|path| self.checker.check_file(path))
            .collect();

        for (path, outcome) in files.into_iter().zip(outcomes) {
            match outcome {
                Ok(FileOutcome::NotCheckable) => report.skipped.push(SkippedEntry {
                    path,
                    reason: SkipReason::UncheckedExtension,
                }),
                Ok(FileOutcome::Checked(defects)) => {
                    report.files_checked += 1;
                    for defect in &defects {
                        on_defect(defect);
                    }
                    report.defects.extend(defects);
                }
                Err(e) => report.warnings.push(e.to_string()),
            }
        }

        Ok(report)
    }

    /// Walk several roots in order and merge their reports
    ///
    /// Every root is validated before anything is walked, so a missing root
    /// fails the whole run without emitting any event.
    pub fn walk_roots<F>(
        &self,
        roots: &[PathBuf],
        mut on_event: F,
    ) -> Result<WalkReport, WalkError>
    where
        F: FnMut(WalkEvent<'_>),
    {
        for root in roots {
            Self::resolve_root(root)?;
        }

        let mut report = WalkReport::default();
        for root in roots {
            on_event(WalkEvent::RootStarted(root));
            let root_report =
                self.walk_with(root, |defect| on_event(WalkEvent::Defect(defect)))?;
            report.merge(root_report);
        }

        Ok(report)
    }

    /// Lists regular files below `root` in traversal order
    ///
    /// Exclude patterns are matched on the path relative to `root`; a matching
    /// directory is pruned together with everything below it.
    fn discover(&self, root: &Path, report: &mut WalkReport) -> Vec<PathBuf> {
        let pruned = Arc::new(Mutex::new(Vec::new()));

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .git_ignore(self.gitignore)
            .git_exclude(self.gitignore)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        if let Some(exclude_set) = self.exclude_set.clone() {
            let root = root.to_path_buf();
            let pruned = Arc::clone(&pruned);
            builder.filter_entry(move |entry| {
                let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
                if !exclude_set.is_match(relative) {
                    return true;
                }
                if let Ok(mut pruned) = pruned.lock() {
                    pruned.push(entry.path().to_path_buf());
                }
                false
            });
        }

        let mut files = Vec::new();

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    report.warnings.push(format!("Walk error: {}", e));
                    continue;
                }
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }

            let path = entry.into_path();

            if !file_type.is_file() {
                report.skipped.push(SkippedEntry {
                    path,
                    reason: SkipReason::NotAFile,
                });
                continue;
            }

            files.push(path);
        }

        if let Ok(mut pruned) = pruned.lock() {
            report.skipped.extend(pruned.drain(..).map(|path| SkippedEntry {
                path,
                reason: SkipReason::ExcludedByPattern,
            }));
        }

        files
    }
}
