//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the option structs built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GOGINIT__<SECTION>__<KEY>`, e.g.
//!    `GOGINIT__DEFAULTS__FRAMEWORK=chi`
//! 3. Config file (`--config`, `GOGINIT_CONFIG`, or the platform path)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use goginit_core::{
    application::GeneratorOptions,
    domain::{LayoutOptions, WizardOptions},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "GOGINIT";

/// Separator between prefix, sections and keys in environment overrides.
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when `init` runs without the wizard.
    pub defaults: Defaults,
    /// Wizard behaviour.
    pub wizard: WizardConfig,
    /// Skeleton layout.
    pub layout: LayoutConfig,
    /// External `go` binary.
    pub toolchain: ToolchainConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub framework: Option<String>,
    pub setup_db: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Show the "Setup Database" step.
    pub offer_database: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            offer_database: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Also create `pkg/utils`.
    pub include_utils: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub go_binary: PathBuf,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            go_binary: PathBuf::from("go"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file and the process environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the platform path is read when present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        Self::load_with(&path, required, environment())
    }

    fn load_with(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read {}", path.display()))?
            .try_deserialize::<Self>()
            .context("Failed to deserialize configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.goginit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "goginit", "goginit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".goginit.toml"))
    }

    /// Path `config` subcommands read and write: `--config` when given.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    pub fn wizard_options(&self) -> WizardOptions {
        WizardOptions {
            offer_database: self.wizard.offer_database,
        }
    }

    /// Generator options; `include_utils` is OR-ed with the `--utils` flag.
    pub fn generator_options(&self, include_utils: bool) -> GeneratorOptions {
        GeneratorOptions {
            layout: LayoutOptions {
                include_utils: include_utils || self.layout.include_utils,
            },
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
