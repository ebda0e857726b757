//! SQLite bootstrap for a generated project.
//!
//! Every failure here is fatal to the run: see `GenerationStep::is_fatal`.

use tracing::{info, instrument};

use crate::{
    application::{
        DatabaseReport, GenerationStep,
        ports::{Filesystem, ScaffoldObserver, TemplateRenderer, Toolchain},
        services::{StepRunner, ensure_manifest},
    },
    domain::{
        ProjectName, RenderContext, SkeletonLayout,
        templates::{DB_INIT_TEMPLATE, SQLITE_DRIVER},
    },
    error::GoginitResult,
};

/// Installs the driver, creates the database file and writes `pkg/db/db.go`.
///
/// Borrows its ports, so it can run standalone or inside `SkeletonService`.
pub struct DatabaseService<'a> {
    filesystem: &'a dyn Filesystem,
    toolchain: &'a dyn Toolchain,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> DatabaseService<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        toolchain: &'a dyn Toolchain,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            filesystem,
            toolchain,
            renderer,
        }
    }

    /// Bootstrap the database for the project laid out by `layout`.
    pub fn bootstrap(
        &self,
        layout: &SkeletonLayout,
        name: &ProjectName,
        observer: &dyn ScaffoldObserver,
    ) -> GoginitResult<DatabaseReport> {
        let mut steps = StepRunner::new(observer);
        self.bootstrap_steps(layout, name, &mut steps)
    }

    #[instrument(skip_all, fields(project = %name))]
    pub(crate) fn bootstrap_steps(
        &self,
        layout: &SkeletonLayout,
        name: &ProjectName,
        steps: &mut StepRunner<'_>,
    ) -> GoginitResult<DatabaseReport> {
        let root = layout.root();

        let manifest = steps.run(GenerationStep::RecheckManifest, |observer| {
            ensure_manifest(
                self.filesystem,
                self.toolchain,
                layout,
                name,
                GenerationStep::RecheckManifest,
                observer,
            )
        })?;

        steps.run(GenerationStep::InstallDriver, |_| {
            self.toolchain.get(root, SQLITE_DRIVER)
        })?;

        steps.run(GenerationStep::TidyModules, |_| self.toolchain.tidy(root))?;

        let db_dir = layout.db_dir();
        steps.run(GenerationStep::EnsureDatabaseDir, |observer| {
            if self.filesystem.exists(&db_dir) {
                observer.on_notice(
                    GenerationStep::EnsureDatabaseDir,
                    &format!("Directory {} already exists", db_dir.display()),
                );
                Ok(())
            } else {
                self.filesystem.create_dir_all(&db_dir)
            }
        })?;

        let database_file = layout.db_file_path();
        steps.run(GenerationStep::CreateDatabaseFile, |_| {
            self.filesystem.create_empty_file(&database_file)
        })?;

        let source_file = layout.db_source_path();
        steps.run(GenerationStep::RenderDatabaseSource, |_| {
            let source = self
                .renderer
                .render(DB_INIT_TEMPLATE, &RenderContext::new(name))?;
            self.filesystem.write_file(&source_file, &source)
        })?;

        info!(database = %database_file.display(), "Database ready");

        Ok(DatabaseReport {
            manifest,
            driver: SQLITE_DRIVER.to_string(),
            database_file,
            source_file,
        })
    }
}
