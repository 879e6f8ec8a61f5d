//! Foundation layer for plugfile
//!
//! Shared error type, the fixed plugin project layout, and the rules for
//! turning a user-supplied source path into concrete header/source paths.

pub mod error;
pub mod layout;
pub mod source_path;

pub use error::{ScaffoldError, ScaffoldResult};
pub use layout::{ProjectLayout, ProjectName, TargetPaths};
pub use source_path::SourcePath;
