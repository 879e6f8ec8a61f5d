//! Anchor-based registration of new files in the build file

use plugfile_foundation::SourcePath;

/// Line that header registrations are placed after
pub const HEADER_ANCHOR: &str = "PluginProcessor.h";
/// Indentation of entries inside the source list
pub const REGISTRATION_INDENT: &str = "\t\t\t\t";

/// Result of one insertion attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The new line now sits at `line_index`
    Inserted { line_index: usize },
    /// No line contains the marker; nothing was changed
    AnchorNotFound,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }
}

/// Index of the first line containing `marker`
pub fn find_anchor<S: AsRef<str>>(lines: &[S], marker: &str) -> Option<usize> {
    lines.iter().position(|line| line.as_ref().contains(marker))
}

/// Insert `entry` as a new line directly after the first line containing
/// `marker`.
///
/// `lines` carry their terminators. The new line takes the anchor's
/// terminator style; an unterminated last anchor line gets a `\n` so the two
/// lines stay separate.
pub fn insert_after_anchor(lines: &mut Vec<String>, marker: &str, entry: &str) -> InsertOutcome {
    let Some(anchor) = find_anchor(lines.as_slice(), marker) else {
        return InsertOutcome::AnchorNotFound;
    };

    let anchor_line = &mut lines[anchor];
    let terminator = if anchor_line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };
    if !anchor_line.ends_with('\n') {
        anchor_line.push('\n');
    }

    let line_index = anchor + 1;
    lines.insert(line_index, format!("{}{}", entry, terminator));
    InsertOutcome::Inserted { line_index }
}

/// `${INCLUDE_DIR}/<src_path>.h` entry for a new header
pub fn header_registration(source_path: &SourcePath) -> String {
    format!(
        "{}${{INCLUDE_DIR}}/{}",
        REGISTRATION_INDENT,
        source_path.header_file()
    )
}

/// `source/<base>.cpp` entry for a new source file
pub fn source_registration(source_path: &SourcePath) -> String {
    format!("{}source/{}", REGISTRATION_INDENT, source_path.source_file())
}
