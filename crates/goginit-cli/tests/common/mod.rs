//! Shared helpers for binary-level tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch workspace with its own empty config file.
pub struct Sandbox {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `goginit` reading the sandbox config, with a clean environment.
    pub fn goginit(&self) -> Command {
        let mut cmd = Command::cargo_bin("goginit").unwrap();
        cmd.env_remove("RUST_LOG")
            .env_remove("GOGINIT_LOG_FILE")
            .env("GOGINIT_CONFIG", &self.config)
            .env("NO_COLOR", "true")
            .current_dir(self.path());
        cmd
    }

    /// Install a stand-in `go` binary and point the config at it.
    ///
    /// It records every invocation in `go-calls.log`, writes go.mod on
    /// `mod init`, and exits with `FAKE_TIDY_STATUS` / `FAKE_RUN_STATUS`.
    #[cfg(unix)]
    pub fn with_fake_go(self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let go = self.path().join("fake-go");
        let log = self.path().join("go-calls.log");
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
case "$1" in
  mod)
    if [ "$2" = init ]; then printf 'module %s\n\ngo 1.22\n' "$3" > go.mod; fi
    if [ "$2" = tidy ]; then exit "${{FAKE_TIDY_STATUS:-0}}"; fi
    ;;
  version)
    echo "go version go1.22.4 linux/amd64"
    ;;
  run)
    echo "serving $2"
    exit "${{FAKE_RUN_STATUS:-0}}"
    ;;
esac
exit 0
"#,
            log = log.display()
        );
        std::fs::write(&go, script).unwrap();
        std::fs::set_permissions(&go, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(
            &self.config,
            format!("[toolchain]\ngo_binary = \"{}\"\n", go.display()),
        )
        .unwrap();
        self
    }

    /// Lines of `go-calls.log`, empty when `go` never ran.
    pub fn go_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join("go-calls.log"))
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
