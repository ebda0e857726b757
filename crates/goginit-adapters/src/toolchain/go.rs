//! Go toolchain adapter using `std::process::Command`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use goginit_core::{
    application::{ApplicationError, ports::Toolchain},
    error::GoginitResult,
};
use tracing::{debug, info, instrument};

const DEFAULT_BINARY: &str = "go";

/// Runs the `go` binary. Every command gets an explicit working directory.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    binary: PathBuf,
}

impl GoToolchain {
    /// Use `go` from `PATH`.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn display(&self, args: &[&str]) -> String {
        let mut line = self.binary.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run to completion with captured output. Non-zero exit is an error
    /// carrying the combined stdout and stderr.
    fn capture(&self, dir: Option<&Path>, args: &[&str]) -> GoginitResult<String> {
        let command_line = self.display(args);
        debug!(command = %command_line, dir = ?dir, "running");

        let mut command = Command::new(&self.binary);
        command.args(args).stdin(Stdio::null());
        if let Some(dir) = dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| ApplicationError::ExternalTool {
            command: command_line.clone(),
            reason: format!("failed to start: {e}"),
        })?;

        let combined = combined_output(&output);
        if !output.status.success() {
            return Err(ApplicationError::ExternalTool {
                command: command_line,
                reason: if combined.is_empty() {
                    output.status.to_string()
                } else {
                    format!("{}: {}", output.status, combined)
                },
            }
            .into());
        }

        Ok(combined)
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolchain for GoToolchain {
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    fn init_module(&self, dir: &Path, module: &str) -> GoginitResult<()> {
        self.capture(Some(dir), &["mod", "init", module]).map(drop)
    }

    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    fn get(&self, dir: &Path, package: &str) -> GoginitResult<()> {
        let output = self.capture(Some(dir), &["get", package])?;
        if !output.is_empty() {
            debug!(%output, "go get output");
        }
        Ok(())
    }

    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    fn tidy(&self, dir: &Path) -> GoginitResult<()> {
        self.capture(Some(dir), &["mod", "tidy"]).map(drop)
    }

    fn version(&self) -> GoginitResult<String> {
        let output = self.capture(None, &["version"])?;
        Ok(parse_version(&output))
    }

    fn run(&self, dir: &Path, source: &Path) -> GoginitResult<()> {
        let source_arg = source.display().to_string();
        let command_line = self.display(&["run", &source_arg]);
        info!(command = %command_line, dir = %dir.display(), "running server");

        let status = Command::new(&self.binary)
            .arg("run")
            .arg(source)
            .current_dir(dir)
            .status()
            .map_err(|e| ApplicationError::ExternalTool {
                command: command_line.clone(),
                reason: format!("failed to start: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::ExternalTool {
                command: command_line,
                reason: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        if !text.trim().is_empty() {
            text.push('\n');
        }
        text.push_str(&stderr);
    }
    text.trim().to_string()
}

/// `go version go1.22.4 linux/amd64` -> `go1.22.4`
fn parse_version(output: &str) -> String {
    output
        .split_whitespace()
        .find(|token| {
            token
                .strip_prefix("go")
                .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        })
        .unwrap_or_else(|| output.trim())
        .to_string()
}
