//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "run a project".

pub mod database_service;
pub mod launch_service;
pub mod skeleton_service;

pub use database_service::DatabaseService;
pub use launch_service::LaunchService;
pub use skeleton_service::{GeneratorOptions, SkeletonService};

use tracing::{debug, warn};

use crate::{
    application::{
        GenerationStep, ManifestOutcome,
        ports::{Filesystem, ScaffoldObserver, Toolchain},
    },
    domain::{ProjectName, SkeletonLayout},
    error::{GoginitError, GoginitResult},
};

/// Runs steps in order, notifying the observer and recording completions.
///
/// A failing step is wrapped as `GoginitError::Step`; nothing after it runs
/// because callers propagate with `?`.
pub(crate) struct StepRunner<'a> {
    observer: &'a dyn ScaffoldObserver,
    completed: Vec<GenerationStep>,
}

impl<'a> StepRunner<'a> {
    pub(crate) fn new(observer: &'a dyn ScaffoldObserver) -> Self {
        Self {
            observer,
            completed: Vec::new(),
        }
    }

    pub(crate) fn run<T>(
        &mut self,
        step: GenerationStep,
        f: impl FnOnce(&dyn ScaffoldObserver) -> GoginitResult<T>,
    ) -> GoginitResult<T> {
        self.begin(step);
        match f(self.observer) {
            Ok(value) => {
                self.finish(step);
                Ok(value)
            }
            Err(e) => {
                warn!(%step, error = %e, "step failed");
                Err(GoginitError::step(step, e))
            }
        }
    }

    /// Announce a step whose body reports its own failures.
    pub(crate) fn begin(&self, step: GenerationStep) {
        debug!(%step, "step started");
        self.observer.on_step_started(step);
    }

    pub(crate) fn finish(&mut self, step: GenerationStep) {
        debug!(%step, "step completed");
        self.observer.on_step_completed(step);
        self.completed.push(step);
    }

    pub(crate) fn into_completed(self) -> Vec<GenerationStep> {
        self.completed
    }
}

/// Initialize `go.mod` in the project root unless it already exists.
pub(crate) fn ensure_manifest(
    filesystem: &dyn Filesystem,
    toolchain: &dyn Toolchain,
    layout: &SkeletonLayout,
    name: &ProjectName,
    step: GenerationStep,
    observer: &dyn ScaffoldObserver,
) -> GoginitResult<ManifestOutcome> {
    if filesystem.exists(&layout.manifest_path()) {
        observer.on_notice(
            step,
            &format!(
                "go.mod already exists in {}, skipping initialization",
                layout.root().display()
            ),
        );
        return Ok(ManifestOutcome::AlreadyPresent);
    }

    toolchain.init_module(layout.root(), name.as_str())?;

    let go_version = match toolchain.version() {
        Ok(version) => {
            observer.on_notice(
                step,
                &format!("Initialized Go module {} with {}", name, version),
            );
            Some(version)
        }
        Err(e) => {
            warn!(error = %e, "could not query go version");
            observer.on_notice(step, &format!("Initialized Go module {}", name));
            None
        }
    };

    Ok(ManifestOutcome::Initialized { go_version })
}
