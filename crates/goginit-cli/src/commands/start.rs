//! `goginit start` — run a generated project with `go run`.

use tracing::{error, instrument};

use goginit_adapters::{GoToolchain, LocalFilesystem};
use goginit_core::{application::LaunchService, domain::ProjectName, error::GoginitError};

use crate::{
    cli::StartArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Run `cmd/<name>/main.go` from the project root.
///
/// Failures are only reported: a missing entry point or a server that exits
/// with an error prints `Failed to run server` and the command still succeeds.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: StartArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = ProjectName::parse(&args.name).map_err(GoginitError::from)?;
    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory")?,
    };

    let launcher = LaunchService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoToolchain::with_binary(&config.toolchain.go_binary)),
    );
    let entry = match launcher.resolve(&dir, &name) {
        Ok(entry) => entry,
        Err(e) => {
            error!(error = %e, "No entry point to run");
            output.error(&format!("Failed to run server: {e}"))?;
            return Ok(());
        }
    };

    output.print(&format!("Running server: {}", entry.display()))?;

    if let Err(e) = launcher.launch(&dir, &entry) {
        error!(error = %e, "Server exited with an error");
        output.error(&format!("Failed to run server: {e}"))?;
    }
    Ok(())
}
