//! `goginit config` — read and write configuration values.

use std::path::Path;

use serde_json::Value as JsonValue;
use toml::{Table, Value as TomlValue};
use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` path; `set`, `path` and `init` act on it
/// when given and on the platform path otherwise.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::active_path(config_file);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            info!(%key, path = %path.display(), "Configuration updated");
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
                return Ok(());
            }
            write_config(&path, &to_toml(&AppConfig::default())?)?;
            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// JSON view of `config` at a dotted key; only leaves are addressable.
fn leaf(config: &AppConfig, key: &str) -> CliResult<JsonValue> {
    let unknown = || CliError::UnknownConfigKey { key: key.into() };
    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    let pointer = format!("/{}", key.replace('.', "/"));
    match tree.pointer(&pointer) {
        None | Some(JsonValue::Object(_)) => Err(unknown()),
        Some(value) => Ok(value.clone()),
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    Ok(match leaf(config, key)? {
        JsonValue::Null => "(unset)".into(),
        JsonValue::String(s) => s,
        other => other.to_string(),
    })
}

/// Update one key in the TOML file at `path`, keeping everything else.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let value = match leaf(&AppConfig::default(), key)? {
        JsonValue::Bool(_) => {
            TomlValue::Boolean(raw.parse().map_err(|e| CliError::InvalidInput {
                message: format!("'{key}' expects true or false, got '{raw}'"),
                source: Some(Box::new(e)),
            })?)
        }
        _ => TomlValue::String(raw.into()),
    };

    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<Table>(&text).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        Table::new()
    };

    insert(&mut table, key, value)?;

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    toml::from_str::<AppConfig>(&text).map_err(|e| CliError::ConfigError {
        message: format!("Resulting configuration is invalid: {e}"),
        source: Some(Box::new(e)),
    })?;

    write_config(path, &text)
}

fn insert(table: &mut Table, key: &str, value: TomlValue) -> CliResult<()> {
    let mut segments: Vec<&str> = key.split('.').collect();
    let Some(last) = segments.pop() else {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    };

    let mut current = table;
    for segment in segments {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| TomlValue::Table(Table::new()));
        current = entry.as_table_mut().ok_or_else(|| CliError::ConfigError {
            message: format!("'{segment}' is not a table in the config file"),
            source: None,
        })?;
    }
    current.insert(last.to_string(), value);
    Ok(())
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn write_config(path: &Path, text: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.framework").unwrap(), "(unset)");
        assert_eq!(get_config_value(&cfg, "wizard.offer_database").unwrap(), "true");
        assert_eq!(get_config_value(&cfg, "toolchain.go_binary").unwrap(), "go");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
        // sections are not leaves
        assert!(get_config_value(&cfg, "defaults").is_err());
        // the database driver is fixed
        assert!(matches!(
            get_config_value(&cfg, "generation.db_driver"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn set_creates_file_and_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        set_config_value(&path, "defaults.framework", "chi").unwrap();
        set_config_value(&path, "layout.include_utils", "true").unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.defaults.framework.as_deref(), Some("chi"));
        assert!(cfg.layout.include_utils);
    }

    #[test]
    fn set_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[toolchain]\ngo_binary = \"/opt/go/bin/go\"\n").unwrap();

        set_config_value(&path, "defaults.setup_db", "true").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("/opt/go/bin/go"));
        assert!(text.contains("setup_db = true"));
    }

    #[test]
    fn set_rejects_non_boolean_for_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(
            set_config_value(&path, "wizard.offer_database", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            set_config_value(&dir.path().join("c.toml"), "defaults.lang", "go"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn defaults_serialise_to_toml() {
        let text = to_toml(&AppConfig::default()).unwrap();
        assert!(text.contains("[wizard]"));
        assert!(text.contains("offer_database = true"));
    }
}
