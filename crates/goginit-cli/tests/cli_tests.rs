//! Binary-level tests for `goginit`.
//!
//! Generation tests swap the `go` binary for a shell script through the
//! `toolchain.go_binary` config key, so they run without a Go install.

mod common;

use predicates::prelude::*;

use common::Sandbox;

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    Sandbox::new()
        .goginit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_matches_package() {
    Sandbox::new()
        .goginit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage() {
    Sandbox::new()
        .goginit()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_table_shows_every_framework() {
    let assert = Sandbox::new().goginit().arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for key in ["echo", "gin", "fiber", "martini", "chi", "mux", "gofr", "fuego", "default"] {
        assert!(stdout.contains(key), "missing {key} in:\n{stdout}");
    }
    assert!(stdout.contains("(standard library)"));
}

#[test]
fn list_json_is_parseable() {
    let assert = Sandbox::new()
        .goginit()
        .args(["list", "--format", "json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[1]["key"], "gin");
    assert_eq!(entries[8]["dependency"], serde_json::Value::Null);
}

#[test]
fn list_csv_and_plain() {
    Sandbox::new()
        .goginit()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key,dependency\n"))
        .stdout(predicate::str::contains("chi,github.com/go-chi/chi/v5"));

    Sandbox::new()
        .goginit()
        .args(["ls", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("echo\ngin\n"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_use_binary_name() {
    Sandbox::new()
        .goginit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goginit"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_path_reports_active_file() {
    let sandbox = Sandbox::new();
    sandbox
        .goginit()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(sandbox.config.display().to_string()));
}

#[test]
fn config_set_then_get() {
    let sandbox = Sandbox::new();
    sandbox
        .goginit()
        .args(["config", "set", "defaults.framework", "fiber"])
        .assert()
        .success();

    sandbox
        .goginit()
        .args(["config", "get", "defaults.framework"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.framework = fiber"));
}

#[test]
fn config_env_override_wins() {
    Sandbox::new()
        .goginit()
        .env("GOGINIT__DEFAULTS__FRAMEWORK", "mux")
        .args(["config", "get", "defaults.framework"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= mux"));
}

#[test]
fn config_init_keeps_existing_file_without_force() {
    let sandbox = Sandbox::new();
    std::fs::write(&sandbox.config, "[defaults]\nframework = \"chi\"\n").unwrap();

    sandbox
        .goginit()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert!(std::fs::read_to_string(&sandbox.config).unwrap().contains("chi"));

    sandbox
        .goginit()
        .args(["config", "init", "--force"])
        .assert()
        .success();
    let text = std::fs::read_to_string(&sandbox.config).unwrap();
    assert!(!text.contains("chi"));
    assert!(text.contains("offer_database = true"));
}

// ── init / start with a stand-in toolchain ────────────────────────────────────

#[cfg(unix)]
mod generation {
    use super::*;

    #[test]
    fn init_blog_with_gin() {
        let sandbox = Sandbox::new().with_fake_go();

        sandbox
            .goginit()
            .args(["init", "--name", "blog", "--framework", "gin", "--no-db"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Project 'blog' created"))
            .stdout(predicate::str::contains("goginit start blog"));

        let root = sandbox.path().join("blog");
        for file in [
            "go.mod",
            "cmd/blog/main.go",
            "internal/handlers/handlers.go",
            "internal/middleware/middleware.go",
            "internal/routes/routes.go",
            "pkg/models/models.go",
            "pkg/db/db.go",
        ] {
            assert!(root.join(file).is_file(), "missing {file}");
        }
        assert!(!root.join("pkg/db/blog.db").exists());
        assert!(!root.join("pkg/utils").exists());
        assert_eq!(
            sandbox.go_calls(),
            vec!["mod init blog", "version", "get github.com/gin-gonic/gin"]
        );
    }

    #[test]
    fn init_framework_flag_is_case_insensitive_and_utils_optional() {
        let sandbox = Sandbox::new().with_fake_go();

        sandbox
            .goginit()
            .args(["init", "-n", "api", "-f", "DEFAULT", "--no-db", "--utils"])
            .assert()
            .success();

        let root = sandbox.path().join("api");
        assert!(root.join("pkg/utils/utils.go").is_file());
        assert!(sandbox.go_calls().iter().all(|c| !c.starts_with("get")));
    }

    #[test]
    fn init_unknown_framework_is_not_found() {
        let sandbox = Sandbox::new().with_fake_go();

        sandbox
            .goginit()
            .args(["init", "-n", "shop", "-f", "unknown-fw", "--db"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("unknown framework: unknown-fw"));

        let root = sandbox.path().join("shop");
        assert!(root.join("go.mod").is_file());
        assert!(root.join("internal/handlers/handlers.go").is_file());
        assert!(!root.join("cmd/shop/main.go").exists());
        assert!(!root.join("pkg/db/shop.db").exists());
    }

    #[test]
    fn init_with_database() {
        let sandbox = Sandbox::new().with_fake_go();

        sandbox
            .goginit()
            .args(["init", "-n", "shop", "-f", "echo", "--db", "-d"])
            .arg(sandbox.path().join("work"))
            .assert()
            .success();

        let root = sandbox.path().join("work/shop");
        assert_eq!(std::fs::metadata(root.join("pkg/db/shop.db")).unwrap().len(), 0);
        let source = std::fs::read_to_string(root.join("pkg/db/db.go")).unwrap();
        assert!(source.contains("./pkg/db/shop.db"));
        assert!(sandbox.go_calls().contains(&"mod tidy".to_string()));
    }

    #[test]
    fn failed_tidy_is_fatal() {
        let sandbox = Sandbox::new().with_fake_go();

        sandbox
            .goginit()
            .env("FAKE_TIDY_STATUS", "1")
            .args(["init", "-n", "shop", "-f", "chi", "--db"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Fatal"))
            .stderr(predicate::str::contains("tidy modules"));

        let root = sandbox.path().join("shop");
        assert!(root.join("cmd/shop/main.go").is_file());
        assert!(!root.join("pkg/db/shop.db").exists());
    }

    #[test]
    fn init_json_report() {
        let sandbox = Sandbox::new().with_fake_go();

        let assert = sandbox
            .goginit()
            .args(["--output-format", "json", "init", "-n", "blog", "-f", "mux", "--no-db"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let start = stdout.find('{').unwrap();
        let report: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();
        assert_eq!(report["manifest"]["status"], "initialized");
        assert_eq!(report["manifest"]["go_version"], "go1.22.4");
        assert_eq!(report["database"], serde_json::Value::Null);
    }

    #[test]
    fn rerun_keeps_manifest() {
        let sandbox = Sandbox::new().with_fake_go();
        let init = || {
            sandbox
                .goginit()
                .args(["init", "-n", "blog", "-f", "gin", "--no-db", "-y"])
                .assert()
                .success();
        };

        init();
        init();

        let inits = sandbox
            .go_calls()
            .iter()
            .filter(|c| c.starts_with("mod init"))
            .count();
        assert_eq!(inits, 1);
    }

    #[test]
    fn start_runs_generated_project() {
        let sandbox = Sandbox::new().with_fake_go();
        sandbox
            .goginit()
            .args(["init", "-n", "blog", "-f", "gin", "--no-db"])
            .assert()
            .success();

        sandbox
            .goginit()
            .args(["start", "blog", "--dir"])
            .arg(sandbox.path().join("blog"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Running server: cmd/blog/main.go"))
            .stdout(predicate::str::contains("serving cmd/blog/main.go"));
    }

    #[test]
    fn failed_server_is_reported_but_succeeds() {
        let sandbox = Sandbox::new().with_fake_go();
        sandbox
            .goginit()
            .args(["init", "-n", "blog", "-f", "gin", "--no-db"])
            .assert()
            .success();

        sandbox
            .goginit()
            .env("FAKE_RUN_STATUS", "1")
            .current_dir(sandbox.path().join("blog"))
            .args(["start", "blog"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed to run server"));
    }

    #[test]
    fn log_file_receives_events() {
        let sandbox = Sandbox::new().with_fake_go();
        let log = sandbox.path().join("logs/goginit.log");

        sandbox
            .goginit()
            .arg("-v")
            .arg("--log-file")
            .arg(&log)
            .args(["init", "-n", "blog", "-f", "gin", "--no-db"])
            .assert()
            .success();

        let text = std::fs::read_to_string(&log).unwrap();
        assert!(text.contains("Generation completed"));
    }
}
