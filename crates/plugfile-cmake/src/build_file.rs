use crate::cmake_parser::extract_project_name;
use crate::manifest_updater::{insert_after_anchor, InsertOutcome};
use plugfile_foundation::{ProjectName, ScaffoldError, ScaffoldResult};
use std::path::{Path, PathBuf};

/// A `CMakeLists.txt` held as an ordered sequence of lines.
///
/// Every line keeps its original terminator so lines that are not touched by
/// an insertion are written back byte-for-byte.
#[derive(Debug, Clone)]
pub struct BuildFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl BuildFile {
    /// Read the whole build file into memory
    pub fn load(path: impl AsRef<Path>) -> ScaffoldResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        let build_file = Self::from_content(path, &content);
        tracing::debug!(
            path = %path.display(),
            lines = build_file.lines.len(),
            "Loaded build file"
        );
        Ok(build_file)
    }

    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines including their terminators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn project_name(&self) -> ProjectName {
        extract_project_name(&self.lines)
    }

    /// Insert `entry` directly after the first line containing `marker`
    pub fn register(&mut self, marker: &str, entry: &str) -> InsertOutcome {
        let outcome = insert_after_anchor(&mut self.lines, marker, entry);
        match outcome {
            InsertOutcome::Inserted { line_index } => tracing::debug!(
                marker = %marker,
                line = line_index + 1,
                entry = %entry.trim(),
                "Registered entry in build file"
            ),
            InsertOutcome::AnchorNotFound => tracing::warn!(
                marker = %marker,
                path = %self.path.display(),
                "Anchor line not found, entry was not registered"
            ),
        }
        outcome
    }

    pub fn contents(&self) -> String {
        self.lines.concat()
    }

    /// Write the full line sequence back to the file it was loaded from
    pub fn save(&self) -> ScaffoldResult<()> {
        std::fs::write(&self.path, self.contents()).map_err(|e| ScaffoldError::io(&self.path, e))
    }
}
