//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "goginit",
    bin_name = "goginit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Interactive Go backend scaffolding",
    long_about = "GoGinit asks for a project name, a web framework and whether \
                  to set up SQLite, then generates a ready-to-run Go module.",
    after_help = "EXAMPLES:\n\
        \x20 goginit init\n\
        \x20 goginit init --name blog --framework gin --no-db\n\
        \x20 goginit start blog\n\
        \x20 goginit list --format json\n\
        \x20 goginit completions bash > /usr/share/bash-completion/completions/goginit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new Go project.
    #[command(
        visible_alias = "i",
        about = "Create a new Go project",
        after_help = "EXAMPLES:\n\
            \x20 goginit init                                   # interactive wizard\n\
            \x20 goginit init -n blog -f gin --no-db            # no prompts\n\
            \x20 goginit init -n shop -f echo --db --dir ~/src  # with SQLite"
    )]
    Init(InitArgs),

    /// Run a generated project.
    #[command(
        visible_alias = "s",
        about = "Run a generated project with `go run`",
        after_help = "EXAMPLES:\n\
            \x20 goginit start blog\n\
            \x20 goginit start blog --dir ~/src/blog"
    )]
    Start(StartArgs),

    /// List supported frameworks.
    #[command(
        visible_alias = "ls",
        about = "List supported frameworks",
        after_help = "EXAMPLES:\n\
            \x20 goginit list\n\
            \x20 goginit list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 goginit completions bash > ~/.local/share/bash-completion/completions/goginit\n\
            \x20 goginit completions zsh  > ~/.zfunc/_goginit\n\
            \x20 goginit completions fish > ~/.config/fish/completions/goginit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the GoGinit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 goginit config init\n\
            \x20 goginit config get defaults.framework\n\
            \x20 goginit config set defaults.framework chi\n\
            \x20 goginit config list"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `goginit init`.
///
/// Giving both `--name` and `--framework` skips the wizard.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; becomes the directory and the Go module path.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Framework key from `goginit list`.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "Framework to use (e.g. gin, echo, chi)"
    )]
    pub framework: Option<String>,

    /// Set up SQLite.
    #[arg(long = "db", overrides_with = "no_db", help = "Set up a SQLite database")]
    pub db: bool,

    /// Skip database setup.
    #[arg(long = "no-db", overrides_with = "db", help = "Skip database setup")]
    pub no_db: bool,

    /// Parent directory of the new project.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Create the project under DIR (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Also create `pkg/utils`.
    #[arg(long = "utils", help = "Include a pkg/utils package")]
    pub utils: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Do not ask before re-scaffolding an existing directory"
    )]
    pub yes: bool,
}

impl InitArgs {
    /// Explicit database choice from `--db` / `--no-db`, last one wins.
    pub fn setup_db(&self) -> Option<bool> {
        match (self.db, self.no_db) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// `true` when the flags alone describe the project.
    pub fn is_non_interactive(&self) -> bool {
        self.name.is_some() && self.framework.is_some()
    }
}

// ── start ─────────────────────────────────────────────────────────────────────

/// Arguments for `goginit start`.
#[derive(Debug, Args)]
pub struct StartArgs {
    /// Name of the project to run.
    #[arg(value_name = "PROJECT", help = "Project name")]
    pub name: String,

    /// Project root (default: current directory).
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project root containing cmd/<PROJECT>/main.go"
    )]
    pub dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `goginit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `goginit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `goginit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write the built-in defaults to the configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_bare_init() {
        let cli = Cli::parse_from(["goginit", "init"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert!(!args.is_non_interactive());
        assert_eq!(args.setup_db(), None);
    }

    #[test]
    fn parse_non_interactive_init() {
        let cli = Cli::parse_from([
            "goginit",
            "init",
            "--name",
            "blog",
            "--framework",
            "gin",
            "--no-db",
            "--dir",
            "/tmp/work",
            "--utils",
            "-y",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert!(args.is_non_interactive());
        assert_eq!(args.name.as_deref(), Some("blog"));
        assert_eq!(args.setup_db(), Some(false));
        assert_eq!(args.dir, Some(PathBuf::from("/tmp/work")));
        assert!(args.utils);
        assert!(args.yes);
    }

    #[test]
    fn last_database_flag_wins() {
        let cli = Cli::parse_from(["goginit", "init", "--no-db", "--db"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.setup_db(), Some(true));
    }

    #[test]
    fn parse_start_with_dir() {
        let cli = Cli::parse_from(["goginit", "start", "blog", "-d", "/srv/blog"]);
        let Commands::Start(args) = cli.command else {
            panic!("expected Start command");
        };
        assert_eq!(args.name, "blog");
        assert_eq!(args.dir, Some(PathBuf::from("/srv/blog")));
    }

    #[test]
    fn start_requires_project_name() {
        assert!(Cli::try_parse_from(["goginit", "start"]).is_err());
    }

    #[test]
    fn list_alias_and_format() {
        let cli = Cli::parse_from(["goginit", "ls", "--format", "csv"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Csv);
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::parse_from(["goginit", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["goginit", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["goginit", "list", "-vv", "--log-file", "/tmp/goginit.log"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("/tmp/goginit.log")));
    }
}
