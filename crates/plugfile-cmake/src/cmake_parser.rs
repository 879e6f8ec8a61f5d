use once_cell::sync::Lazy;
use plugfile_foundation::ProjectName;
use regex::Regex;

/// Substring that marks a project declaration line
pub const PROJECT_MARKER: &str = "project(";

// Name runs from after the marker (leading blanks skipped) to the next blank or ')'.
static PROJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"project\(\s*([^\s)]*)").expect("project regex is valid"));

/// Extract the project name from the first line containing `project(`.
///
/// Falls back to the `null` sentinel when no line declares a project or the
/// declaration carries no name.
pub fn extract_project_name<S: AsRef<str>>(lines: &[S]) -> ProjectName {
    let declaration = lines
        .iter()
        .map(AsRef::as_ref)
        .find(|line| line.contains(PROJECT_MARKER));

    let Some(line) = declaration else {
        tracing::warn!("No project( declaration found, using sentinel project name");
        return ProjectName::sentinel();
    };

    match PROJECT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
    {
        Some(name) => {
            tracing::debug!(project = %name, "Resolved project name");
            ProjectName::new(name)
        }
        None => {
            tracing::warn!(line = %line.trim_end(), "project( declaration has no name, using sentinel");
            ProjectName::sentinel()
        }
    }
}
