//! CMake build file support for plugfile
//!
//! `CMakeLists.txt` is handled purely as an ordered sequence of lines: the
//! project name is read from the first `project(` declaration, and new
//! header/source entries are registered by inserting a line directly after an
//! anchor line.

mod build_file;
mod cmake_parser;
mod manifest_updater;

pub use build_file::BuildFile;
pub use cmake_parser::{extract_project_name, PROJECT_MARKER};
pub use manifest_updater::{
    find_anchor, header_registration, insert_after_anchor, source_registration, InsertOutcome,
    HEADER_ANCHOR, REGISTRATION_INDENT,
};
