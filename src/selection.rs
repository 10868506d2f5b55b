//! Input file selection
//!
//! Resolves which flight logs a run should process: either the paths the
//! user named explicitly, or every IGC file in a directory.

use anyhow::{Context, Result};
use glob::{glob_with, MatchOptions, Pattern};
use log::warn;
use std::path::{Path, PathBuf};

/// File extension of IGC flight logs (matched case-insensitively)
pub const IGC_EXTENSION: &str = "igc";

/// Files chosen for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    /// Files to process, in the order given or discovered
    pub existing: Vec<PathBuf>,
    /// Requested paths that do not exist
    pub missing: Vec<PathBuf>,
    /// True when the files came from directory discovery rather than arguments
    pub discovered: bool,
}

impl FileSelection {
    pub fn is_empty(&self) -> bool {
        self.existing.is_empty()
    }

    /// One-line warning naming every missing path, if any
    pub fn missing_warning(&self) -> Option<String> {
        if self.missing.is_empty() {
            return None;
        }
        let names: Vec<String> = self
            .missing
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        Some(format!(
            "Warning: The following files were not found and will be skipped: {}",
            names.join(", ")
        ))
    }

    /// Message printed when there is nothing to process
    pub fn empty_message(&self) -> &'static str {
        if self.discovered {
            "No IGC files found in current directory"
        } else {
            "No existing files to process"
        }
    }
}

/// Split explicitly requested paths into existing and missing ones
pub fn partition_existing(paths: &[String]) -> FileSelection {
    let (existing, missing): (Vec<PathBuf>, Vec<PathBuf>) = paths
        .iter()
        .map(PathBuf::from)
        .partition(|path| path.exists());

    FileSelection {
        existing,
        missing,
        discovered: false,
    }
}

/// Find IGC files directly inside `dir` (not recursive).
///
/// An empty `dir` means the current working directory, and the returned
/// paths are then bare file names.
pub fn discover_igc_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .with_context(|| format!("Directory path is not valid UTF-8: {:?}", dir))?;
    let pattern = Path::new(&Pattern::escape(dir_str)).join(format!("*.{IGC_EXTENSION}"));
    let pattern = pattern.to_string_lossy();

    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob_with(&pattern, options)
        .with_context(|| format!("Invalid glob pattern '{}'", pattern))?
    {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Cannot read directory entry: {}", e),
        }
    }

    Ok(files)
}

/// Resolve the files to process.
///
/// Explicit `paths` win; when there are none, IGC files in `dir` are used.
pub fn select_files_in(dir: &Path, paths: &[String]) -> Result<FileSelection> {
    if !paths.is_empty() {
        return Ok(partition_existing(paths));
    }

    Ok(FileSelection {
        existing: discover_igc_files(dir)?,
        missing: Vec::new(),
        discovered: true,
    })
}

/// Resolve the files to process, discovering in the current working directory
pub fn select_files(paths: &[String]) -> Result<FileSelection> {
    select_files_in(Path::new(""), paths)
}
