//! Header/source scaffolding
//!
//! A run is a straight line with one optional step:
//!
//! 1. load `plugin/CMakeLists.txt` and resolve the project name
//! 2. create `plugin/include/<project>/<dir prefix>`
//! 3. register the header after the `PluginProcessor.h` line, write the header
//! 4. unless header-only: register `source/<base>.cpp` after the first line
//!    mentioning the base name, write the source
//!
//! There is no rollback. If step 4 fails the build file keeps the header
//! registration from step 3. Callers that report progress use
//! [`Scaffolder::scaffold_with`], which announces steps 2 to 4 before they run.

use crate::file_creator::{ensure_dir, write_boilerplate};
use plugfile_cmake::{
    header_registration, source_registration, BuildFile, InsertOutcome, HEADER_ANCHOR,
};
use plugfile_config::BoilerplateConfig;
use plugfile_foundation::{ProjectLayout, ProjectName, ScaffoldResult, SourcePath, TargetPaths};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What to scaffold
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub source_path: SourcePath,
    /// Skip the `.cpp` file and its registration
    pub header_only: bool,
}

/// One file written by a run together with its build file registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub path: PathBuf,
    /// Marker that located the registration line
    pub anchor: String,
    pub registration: InsertOutcome,
    /// A file already existed at `path` and was replaced
    pub overwritten: bool,
}

/// Step about to run, passed to the progress callback of
/// [`Scaffolder::scaffold_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep<'a> {
    /// Creating the header's enclosing directory
    IncludeDir(&'a Path),
    /// Registering and writing the header
    Header(&'a SourcePath),
    /// Registering and writing the source
    Source(&'a SourcePath),
}

/// Outcome of a scaffolding run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub project: ProjectName,
    pub build_file: PathBuf,
    /// Directory the header was placed in
    pub include_dir: PathBuf,
    pub header: CreatedFile,
    /// `None` for header-only runs
    pub source: Option<CreatedFile>,
}

impl ScaffoldReport {
    /// Registrations that found no anchor line
    pub fn unregistered(&self) -> impl Iterator<Item = &CreatedFile> {
        std::iter::once(&self.header)
            .chain(self.source.iter())
            .filter(|file| !file.registration.is_inserted())
    }
}

/// Creates header/source pairs inside a plugin project
pub struct Scaffolder {
    layout: ProjectLayout,
    boilerplate: BoilerplateConfig,
}

impl Scaffolder {
    pub fn new(layout: ProjectLayout, boilerplate: BoilerplateConfig) -> Self {
        Self {
            layout,
            boilerplate,
        }
    }

    pub fn scaffold(&self, request: &ScaffoldRequest) -> ScaffoldResult<ScaffoldReport> {
        self.scaffold_with(request, |_| {})
    }

    /// Like [`Scaffolder::scaffold`], calling `on_step` before each step runs.
    ///
    /// Steps announced before a failure stay announced; nothing is undone.
    pub fn scaffold_with<F>(
        &self,
        request: &ScaffoldRequest,
        mut on_step: F,
    ) -> ScaffoldResult<ScaffoldReport>
    where
        F: FnMut(ScaffoldStep<'_>),
    {
        let build_path = self.layout.build_file();
        let build_file = BuildFile::load(&build_path)?;

        let project = build_file.project_name();
        if project.is_sentinel() {
            warn!(
                path = %build_path.display(),
                "No project name in build file, files go to plugin/include/{}",
                ProjectName::SENTINEL
            );
        }

        let targets = self.layout.resolve(&project, &request.source_path);
        info!(
            project = %project,
            source_path = %request.source_path,
            header_only = request.header_only,
            "Scaffolding files"
        );

        on_step(ScaffoldStep::IncludeDir(&targets.include_dir));
        ensure_dir(&targets.include_dir)?;

        on_step(ScaffoldStep::Header(&request.source_path));
        let header = self.create_header(build_file, &request.source_path, &targets)?;

        let source = if request.header_only {
            debug!("Header-only run, skipping source file");
            None
        } else {
            on_step(ScaffoldStep::Source(&request.source_path));
            Some(self.create_source(&build_path, &request.source_path, &targets)?)
        };

        Ok(ScaffoldReport {
            project,
            build_file: build_path,
            include_dir: targets.include_dir,
            header,
            source,
        })
    }

    fn create_header(
        &self,
        mut build_file: BuildFile,
        source_path: &SourcePath,
        targets: &TargetPaths,
    ) -> ScaffoldResult<CreatedFile> {
        let registration = build_file.register(HEADER_ANCHOR, &header_registration(source_path));
        build_file.save()?;

        let overwritten = write_boilerplate(&targets.header, &self.boilerplate.header)?;

        Ok(CreatedFile {
            path: targets.header.clone(),
            anchor: HEADER_ANCHOR.to_string(),
            registration,
            overwritten,
        })
    }

    fn create_source(
        &self,
        build_path: &Path,
        source_path: &SourcePath,
        targets: &TargetPaths,
    ) -> ScaffoldResult<CreatedFile> {
        // Reload so the header registration is visible as the anchor
        let mut build_file = BuildFile::load(build_path)?;
        let anchor = source_path.base_name();
        let registration = build_file.register(anchor, &source_registration(source_path));
        build_file.save()?;

        let overwritten = write_boilerplate(&targets.source, &self.boilerplate.source)?;

        Ok(CreatedFile {
            path: targets.source.clone(),
            anchor: anchor.to_string(),
            registration,
            overwritten,
        })
    }
}
