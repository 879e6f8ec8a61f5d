//! Scaffolding service: creates header/source pairs and registers them in
//! the plugin build file.

pub mod file_creator;
pub mod scaffolder;

pub use scaffolder::{CreatedFile, ScaffoldReport, ScaffoldRequest, ScaffoldStep, Scaffolder};
