//! Command line arguments

use clap::Parser;
use std::ffi::OsString;

/// Legacy single-dash spelling of `--header_only`
const LEGACY_HEADER_ONLY: &str = "-ho";

/// The main CLI struct.
#[derive(Parser, Debug)]
#[command(name = "plugfile")]
#[command(about = "Create new header/source files")]
#[command(version)]
pub struct Cli {
    /// Location and name for the new header file, without extension
    /// (e.g. dsp/Filter)
    pub src_path: String,

    /// Only create the header file and its CMakeLists.txt entry
    #[arg(long = "header_only", visible_alias = "header-only")]
    pub header_only: bool,
}

impl Cli {
    /// Parse arguments, accepting `-ho` for `--header_only`
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }
}

/// clap short flags are a single character, so `-ho` would read as `-h -o`
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == LEGACY_HEADER_ONLY {
                OsString::from("--header_only")
            } else {
                arg
            }
        })
        .collect()
}
