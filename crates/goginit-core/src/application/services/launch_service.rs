//! Runs a generated project with `go run`.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Toolchain},
    },
    domain::{ProjectName, SkeletonLayout},
    error::GoginitResult,
};

pub struct LaunchService {
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn Toolchain>,
}

impl LaunchService {
    pub fn new(filesystem: Box<dyn Filesystem>, toolchain: Box<dyn Toolchain>) -> Self {
        Self {
            filesystem,
            toolchain,
        }
    }

    /// Locate `cmd/<name>/main.go` under the project root `dir`.
    ///
    /// Returns the path relative to `dir`.
    pub fn resolve(&self, dir: &Path, name: &ProjectName) -> GoginitResult<PathBuf> {
        let relative = SkeletonLayout::entry_point_relative(name);
        let absolute = dir.join(&relative);
        if !self.filesystem.exists(&absolute) {
            return Err(ApplicationError::EntryPointMissing { path: absolute }.into());
        }
        Ok(relative)
    }

    /// Run a resolved entry point from `dir`. Blocks until the server exits.
    #[instrument(skip_all, fields(dir = %dir.display(), entry = %entry.display()))]
    pub fn launch(&self, dir: &Path, entry: &Path) -> GoginitResult<()> {
        info!("Launching project");
        self.toolchain.run(dir, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::{MockFilesystem, MockToolchain},
        error::{ErrorCategory, GoginitError},
    };

    fn name() -> ProjectName {
        ProjectName::parse("blog").unwrap()
    }

    #[test]
    fn resolve_returns_relative_entry_point() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path| path == Path::new("/srv/blog/cmd/blog/main.go"))
            .returning(|_| true);

        let service = LaunchService::new(Box::new(fs), Box::new(MockToolchain::new()));
        let entry = service.resolve(Path::new("/srv/blog"), &name()).unwrap();

        assert_eq!(entry, PathBuf::from("cmd/blog/main.go"));
    }

    #[test]
    fn missing_entry_point_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);

        let mut tc = MockToolchain::new();
        tc.expect_run().never();

        let service = LaunchService::new(Box::new(fs), Box::new(tc));
        let err = service.resolve(Path::new("/srv"), &name()).unwrap_err();

        assert!(matches!(
            err,
            GoginitError::Application(ApplicationError::EntryPointMissing { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn launch_runs_in_project_dir() {
        let mut tc = MockToolchain::new();
        tc.expect_run()
            .withf(|dir, source| {
                dir == Path::new("/srv/blog") && source == Path::new("cmd/blog/main.go")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LaunchService::new(Box::new(MockFilesystem::new()), Box::new(tc));
        service
            .launch(Path::new("/srv/blog"), Path::new("cmd/blog/main.go"))
            .unwrap();
    }
}
