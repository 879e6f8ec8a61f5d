//! Test support utilities and fixtures for plugfile integration tests

pub mod workspace;

pub use workspace::{plugin_cmake, TestWorkspace, BUILD_FILE};
