//! Fixed directory convention of a plugin project
//!
//! ```text
//! <root>/plugin/CMakeLists.txt
//! <root>/plugin/include/<project-name>/...   headers
//! <root>/plugin/source/...                   sources
//! ```

use crate::source_path::SourcePath;
use std::fmt;
use std::path::{Path, PathBuf};

/// Build description file, relative to the project root
pub const BUILD_FILE: &str = "plugin/CMakeLists.txt";
/// Parent of the per-project include directory
pub const INCLUDE_ROOT: &str = "plugin/include";
pub const SOURCE_ROOT: &str = "plugin/source";

/// Name of a plugin project as declared in the build file.
///
/// When the build file has no `project(` declaration the sentinel `null`
/// stands in, and paths derived from it will point into
/// `plugin/include/null/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub const SENTINEL: &'static str = "null";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn sentinel() -> Self {
        Self(Self::SENTINEL.to_string())
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == Self::SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Concrete filesystem locations for one header/source pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    /// Directory that must exist before the header is written
    pub include_dir: PathBuf,
    pub header: PathBuf,
    pub source: PathBuf,
}

/// A plugin project rooted at a directory (normally the working directory)
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_file(&self) -> PathBuf {
        self.root.join(BUILD_FILE)
    }

    /// `plugin/include/<project>`
    pub fn project_include_dir(&self, project: &ProjectName) -> PathBuf {
        self.root.join(INCLUDE_ROOT).join(project.as_str())
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_ROOT)
    }

    /// Derive header/source locations for `source_path` inside `project`
    pub fn resolve(&self, project: &ProjectName, source_path: &SourcePath) -> TargetPaths {
        let project_include = self.project_include_dir(project);
        TargetPaths {
            include_dir: project_include.join(source_path.dir_prefix()),
            header: project_include.join(source_path.header_file()),
            source: self.source_dir().join(source_path.source_file()),
        }
    }
}
