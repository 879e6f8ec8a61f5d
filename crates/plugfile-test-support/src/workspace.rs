use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Location of the build file inside a plugin project
pub const BUILD_FILE: &str = "plugin/CMakeLists.txt";

/// A `plugin/CMakeLists.txt` shaped like the ones plugfile patches.
///
/// `project_line` is written verbatim so tests can vary the declaration.
pub fn plugin_cmake(project_line: &str) -> String {
    format!(
        "cmake_minimum_required(VERSION 3.22)\n\
{}\n\
\n\
set(INCLUDE_DIR ${{CMAKE_CURRENT_SOURCE_DIR}}/include/${{PROJECT_NAME}})\n\
\n\
target_sources(${{PROJECT_NAME}}\n\
\tPRIVATE\n\
\t\t\t\tsource/PluginEditor.cpp\n\
\t\t\t\t${{INCLUDE_DIR}}/PluginProcessor.h\n\
\t\t\t\tsource/PluginProcessor.cpp\n\
)\n",
        project_line
    )
}

/// Manages a temporary directory for a test scenario.
/// Cleans up automatically when dropped.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a new empty workspace.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Creates a workspace with a plugin project named `name`.
    ///
    /// Lays out `plugin/CMakeLists.txt`, `plugin/include/<name>/` and
    /// `plugin/source/`.
    pub fn with_plugin_project(name: &str) -> Self {
        let workspace = Self::new();
        workspace.create_file(
            BUILD_FILE,
            &plugin_cmake(&format!("project({} VERSION 0.1.0)", name)),
        );
        workspace.create_directory(&format!("plugin/include/{}", name));
        workspace.create_directory("plugin/source");
        workspace
    }

    /// Returns the root path of the workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates a file with content within the workspace.
    /// Automatically creates parent directories.
    pub fn create_file(&self, rel_path: &str, content: &str) {
        let file_path = self.path().join(rel_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent dirs for '{}': {}", rel_path, e)
            });
        }
        fs::write(&file_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", file_path.display(), e));
    }

    /// Creates a directory within the workspace.
    pub fn create_directory(&self, rel_path: &str) {
        let dir_path = self.path().join(rel_path);
        fs::create_dir_all(&dir_path).unwrap_or_else(|e| {
            panic!("Failed to create directory '{}': {}", dir_path.display(), e)
        });
    }

    /// Reads a file from the workspace.
    pub fn read_file(&self, rel_path: &str) -> String {
        let file_path = self.path().join(rel_path);
        fs::read_to_string(&file_path)
            .unwrap_or_else(|e| panic!("Failed to read file '{}': {}", file_path.display(), e))
    }

    /// Reads the build file.
    pub fn read_build_file(&self) -> String {
        self.read_file(BUILD_FILE)
    }

    /// Build file lines without terminators.
    pub fn build_file_lines(&self) -> Vec<String> {
        self.read_build_file().lines().map(str::to_string).collect()
    }

    /// Check if a file exists in the workspace.
    pub fn file_exists(&self, rel_path: &str) -> bool {
        self.path().join(rel_path).exists()
    }

    /// Check if a directory exists in the workspace.
    pub fn dir_exists(&self, rel_path: &str) -> bool {
        self.path().join(rel_path).is_dir()
    }

    /// Get the absolute path to a file in the workspace.
    pub fn absolute_path(&self, rel_path: &str) -> PathBuf {
        self.path().join(rel_path)
    }
}
