//! Implementation of the `goginit init` command.
//!
//! Responsibility: collect a `ProjectSpec` (flags or wizard), call the core
//! generator, and display results. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use console::Term;
use tracing::{debug, info, instrument, warn};

use goginit_adapters::{GoToolchain, LocalFilesystem, SimpleRenderer};
use goginit_core::{
    application::{GenerationReport, ManifestOutcome, SkeletonService},
    domain::{DomainError, ProjectName, ProjectSpec, WizardOutcome},
    error::GoginitError,
};

use crate::{
    cli::{InitArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    progress::SpinnerObserver,
    wizard,
};

/// Execute the `goginit init` command.
///
/// Dispatch sequence:
/// 1. Build the spec from flags, or run the wizard
/// 2. Confirm before scaffolding into an existing directory
/// 3. Generate via `SkeletonService` with spinner feedback
/// 4. Print a summary and next steps
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Collect the spec
    let spec = match spec_from_flags(&args, &config)? {
        Some(spec) => spec,
        None => match run_wizard(&args, &config, &output)? {
            WizardOutcome::Complete(spec) => spec,
            WizardOutcome::Cancelled => {
                info!("Wizard cancelled");
                output.info("Cancelled, nothing was created.")?;
                return Ok(());
            }
        },
    };

    let base = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory")?,
    };

    debug!(
        project = %spec.name(),
        framework = spec.framework(),
        setup_db = spec.setup_db(),
        base = %base.display(),
        "Spec resolved"
    );

    let service = build_service(&config, args.utils);

    // 2. Existing root: manifest is kept, sources are overwritten
    if service.root_exists(&spec, &base) {
        let root = service.layout_for(&spec, &base).root().to_path_buf();
        if !args.yes && !global.quiet && std::io::stdin().is_terminal() {
            if !confirm_existing(&root)? {
                output.info("Cancelled, nothing was changed.")?;
                return Ok(());
            }
        } else {
            output.warning(&format!(
                "{} already exists; go.mod is kept, generated files are overwritten",
                root.display()
            ))?;
        }
    }

    // 3. Generate
    output.header(&format!("Creating '{}' ({})...", spec.name(), spec.framework()))?;
    info!(project = %spec.name(), "Generation started");

    let observer = SpinnerObserver::new(&output);
    let result = service.generate(&spec, &base, &observer);
    observer.finish();
    let report = result?;

    info!(project = %spec.name(), root = %report.root.display(), "Generation completed");

    // 4. Summary
    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }
    print_summary(&report, &base, &output)
}

/// Spec from `--name` plus `--framework` or `defaults.framework`.
///
/// `None` when no name was given, meaning the wizard has to ask.
fn spec_from_flags(args: &InitArgs, config: &AppConfig) -> CliResult<Option<ProjectSpec>> {
    let Some(raw_name) = args.name.as_deref() else {
        return Ok(None);
    };
    let name = ProjectName::parse(raw_name).map_err(GoginitError::from)?;

    let framework = args
        .framework
        .as_deref()
        .or(config.defaults.framework.as_deref())
        .map(normalize_framework)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| GoginitError::from(DomainError::MissingSelection { field: "framework" }))?;

    let setup_db = args.setup_db().unwrap_or(config.defaults.setup_db);
    Ok(Some(ProjectSpec::new(name, framework, setup_db)))
}

/// Keys are matched exactly by the registry; flags are forgiving.
fn normalize_framework(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

fn run_wizard(args: &InitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<WizardOutcome> {
    if args.framework.is_some() {
        warn!("--framework is ignored without --name");
        output.warning("--framework is ignored without --name; choose it in the wizard")?;
    }

    let db_flag = args.setup_db();
    let mut options = config.wizard_options();
    if db_flag.is_some() {
        options.offer_database = false;
    }

    let outcome = wizard::run(&Term::stdout(), options, output.supports_color())?;

    Ok(match (outcome, db_flag) {
        (WizardOutcome::Complete(spec), Some(setup_db)) => WizardOutcome::Complete(
            ProjectSpec::new(spec.name().clone(), spec.framework(), setup_db),
        ),
        (outcome, _) => outcome,
    })
}

fn build_service(config: &AppConfig, include_utils: bool) -> SkeletonService {
    SkeletonService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoToolchain::with_binary(&config.toolchain.go_binary)),
        Box::new(SimpleRenderer::new()),
    )
    .with_options(config.generator_options(include_utils))
}

#[cfg(feature = "interactive")]
fn confirm_existing(root: &Path) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!(
            "{} already exists. Generate into it anyway?",
            root.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::from(std::io::Error::other(e)))
}

#[cfg(not(feature = "interactive"))]
fn confirm_existing(_root: &Path) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn print_summary(report: &GenerationReport, base: &Path, out: &OutputManager) -> CliResult<()> {
    let name = report.spec.name();
    out.success(&format!("Project '{name}' created at {}", report.root.display()))?;

    if let ManifestOutcome::Initialized {
        go_version: Some(version),
    } = &report.manifest
    {
        out.print(&format!("  Go:        {version}"))?;
    }
    out.print(&format!("  Framework: {}", report.spec.framework()))?;
    if let Some(db) = &report.database {
        out.print(&format!("  Database:  {}", display_relative(&db.database_file, &report.root)))?;
    }

    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", display_relative(&report.root, base)))?;
    out.print(&format!("  goginit start {name}"))?;
    Ok(())
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(PathBuf::from)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
