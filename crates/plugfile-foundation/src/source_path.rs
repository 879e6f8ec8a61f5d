//! User-supplied source path segmentation
//!
//! A source path is the relative location and base name of a new header/source
//! pair, without extension (for example `dsp/Filter`). It is split into the
//! directory prefix that has to exist under the include root (`dsp/`) and the
//! bare base name (`Filter`) that names the `.cpp` file.

use crate::error::{ScaffoldError, ScaffoldResult};
use std::fmt;

pub const HEADER_EXTENSION: &str = "h";
pub const SOURCE_EXTENSION: &str = "cpp";

/// A validated, segmented source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    raw: String,
    dir_prefix: String,
    base_name: String,
}

impl SourcePath {
    /// Parse and validate a `/`-separated relative path.
    ///
    /// Everything up to and including the last `/` becomes the directory
    /// prefix; the remainder is the base name.
    pub fn parse(raw: &str) -> ScaffoldResult<Self> {
        if raw.trim().is_empty() {
            return Err(ScaffoldError::invalid_source_path(raw, "path is empty"));
        }
        if raw.starts_with('/') {
            return Err(ScaffoldError::invalid_source_path(
                raw,
                "path must be relative to the include directory",
            ));
        }
        if raw.split('/').any(|segment| segment == "..") {
            return Err(ScaffoldError::invalid_source_path(
                raw,
                "'..' segments are not allowed",
            ));
        }

        let (dir_prefix, base_name) = match raw.rfind('/') {
            Some(pos) => (&raw[..=pos], &raw[pos + 1..]),
            None => ("", raw),
        };

        if base_name.is_empty() {
            return Err(ScaffoldError::invalid_source_path(
                raw,
                "base name is empty",
            ));
        }

        Ok(Self {
            raw: raw.to_string(),
            dir_prefix: dir_prefix.to_string(),
            base_name: base_name.to_string(),
        })
    }

    /// The path exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Directory part including its trailing `/`, empty for a bare name
    pub fn dir_prefix(&self) -> &str {
        &self.dir_prefix
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Header path relative to the project include directory (`dsp/Filter.h`)
    pub fn header_file(&self) -> String {
        format!("{}.{}", self.raw, HEADER_EXTENSION)
    }

    /// Source file name relative to the source directory (`Filter.cpp`)
    pub fn source_file(&self) -> String {
        format!("{}.{}", self.base_name, SOURCE_EXTENSION)
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
