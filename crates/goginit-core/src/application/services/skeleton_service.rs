//! Skeleton Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Create the directory skeleton and package stubs
//! 2. Initialize the Go module
//! 3. Resolve the framework and fetch its dependency
//! 4. Write the entry point
//! 5. Optionally bootstrap the SQLite database
//!
//! Steps run strictly in order and the first failure stops the run. Nothing
//! written before the failure is removed.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        GenerationReport, GenerationStep,
        ports::{Filesystem, ScaffoldObserver, TemplateRenderer, Toolchain},
        services::{DatabaseService, StepRunner, ensure_manifest},
    },
    domain::{
        DomainValidator as validator, LayoutOptions, ProjectSpec, SkeletonLayout, registry,
    },
    error::{GoginitError, GoginitResult},
};

/// Knobs that shape generated output without changing the spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub layout: LayoutOptions,
}

/// Project generator.
pub struct SkeletonService {
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn Toolchain>,
    renderer: Box<dyn TemplateRenderer>,
    options: GeneratorOptions,
}

impl SkeletonService {
    /// Create a new generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use goginit_core::application::SkeletonService;
    ///
    /// let service = SkeletonService::new(
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(toolchain),  // impl Toolchain
    ///     Box::new(renderer),   // impl TemplateRenderer
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        toolchain: Box<dyn Toolchain>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            filesystem,
            toolchain,
            renderer,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// The layout `generate` would produce for `spec` under `base`.
    pub fn layout_for(&self, spec: &ProjectSpec, base: &Path) -> SkeletonLayout {
        SkeletonLayout::new(base, spec.name(), self.options.layout)
    }

    /// Whether the project root for `spec` already exists under `base`.
    pub fn root_exists(&self, spec: &ProjectSpec, base: &Path) -> bool {
        self.filesystem.exists(self.layout_for(spec, base).root())
    }

    /// Generate the project described by `spec` under `base`.
    #[instrument(
        skip_all,
        fields(
            project = %spec.name(),
            framework = %spec.framework(),
            base = %base.display()
        )
    )]
    pub fn generate(
        &self,
        spec: &ProjectSpec,
        base: &Path,
        observer: &dyn ScaffoldObserver,
    ) -> GoginitResult<GenerationReport> {
        info!("Generating project {}", spec);

        validator::validate_spec(spec)?;
        let layout = self.layout_for(spec, base);
        validator::validate_layout(&layout)?;

        let root = layout.root();
        let mut steps = StepRunner::new(observer);
        let mut files_written = Vec::new();

        steps.run(GenerationStep::CreateDirectories, |_| {
            for dir in layout.directories() {
                self.filesystem.create_dir_all(&root.join(dir))?;
            }
            Ok(())
        })?;

        steps.run(GenerationStep::WriteStubs, |_| {
            for stub in layout.stubs() {
                let path = root.join(&stub.path);
                self.filesystem.write_file(&path, &stub.content)?;
                files_written.push(path);
            }
            Ok(())
        })?;

        let manifest = steps.run(GenerationStep::EnsureManifest, |observer| {
            ensure_manifest(
                self.filesystem.as_ref(),
                self.toolchain.as_ref(),
                &layout,
                spec.name(),
                GenerationStep::EnsureManifest,
                observer,
            )
        })?;

        let descriptor = steps.run(GenerationStep::ResolveFramework, |_| {
            registry::lookup(spec.framework()).map_err(GoginitError::from)
        })?;

        steps.run(GenerationStep::FetchDependency, |observer| {
            match descriptor.dependency {
                Some(dependency) => self.toolchain.get(root, dependency),
                None => {
                    observer.on_notice(
                        GenerationStep::FetchDependency,
                        &format!(
                            "{} uses only the standard library, nothing to fetch",
                            descriptor.key
                        ),
                    );
                    Ok(())
                }
            }
        })?;

        steps.run(GenerationStep::WriteEntryPoint, |_| {
            let path = layout.entry_point_path();
            self.filesystem.write_file(&path, descriptor.template)?;
            files_written.push(path);
            Ok(())
        })?;

        let database = if spec.setup_db() {
            steps.begin(GenerationStep::BootstrapDatabase);
            let report = self.database().bootstrap_steps(&layout, spec.name(), &mut steps)?;
            files_written.push(report.database_file.clone());
            files_written.push(report.source_file.clone());
            steps.finish(GenerationStep::BootstrapDatabase);
            Some(report)
        } else {
            None
        };

        info!(files = files_written.len(), "Generation completed");

        Ok(GenerationReport {
            spec: spec.clone(),
            root: root.to_path_buf(),
            completed: steps.into_completed(),
            manifest,
            files_written,
            database,
        })
    }

    fn database(&self) -> DatabaseService<'_> {
        DatabaseService::new(
            self.filesystem.as_ref(),
            self.toolchain.as_ref(),
            self.renderer.as_ref(),
        )
    }
}
