//! CLI command handling for plugfile

mod args;

pub use args::Cli;

use anyhow::Context;
use plugfile_config::{logging, AppConfig};
use plugfile_foundation::{ProjectLayout, SourcePath};
use plugfile_services::{ScaffoldReport, ScaffoldRequest, ScaffoldStep, Scaffolder};
use tracing::debug;

/// Parse arguments, scaffold the files and print progress
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_args(std::env::args_os());

    let root = std::env::current_dir().context("Failed to read working directory")?;
    let config = AppConfig::load_from(&root).context("Failed to load configuration")?;
    logging::initialize(&config);
    debug!(root = %root.display(), ?cli, "Starting plugfile");

    let source_path = SourcePath::parse(&cli.src_path)?;
    let request = ScaffoldRequest {
        source_path,
        header_only: cli.header_only,
    };

    let scaffolder = Scaffolder::new(ProjectLayout::new(&root), config.boilerplate);
    let report = scaffolder
        .scaffold_with(&request, print_step)
        .with_context(|| format!("Failed to create files for '{}'", request.source_path))?;

    print_summary(&report);
    Ok(())
}

/// Printed as each step starts, so a failed run still shows how far it got
fn print_step(step: ScaffoldStep<'_>) {
    match step {
        ScaffoldStep::IncludeDir(dir) => println!("Enclosing folder is: {}", dir.display()),
        ScaffoldStep::Header(path) => println!("Creating header file: {}", path.header_file()),
        ScaffoldStep::Source(path) => println!("Creating source file: {}", path.source_file()),
    }
}

fn print_summary(report: &ScaffoldReport) {
    for file in report.unregistered() {
        eprintln!(
            "Warning: {} was not added to {}: no line contains '{}'",
            file.path.display(),
            report.build_file.display(),
            file.anchor
        );
    }

    println!("File creation finished");
}
