//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`; `auto` in both resolves
    /// to Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        let stdout_is_tty = io::stdout().is_terminal();
        let resolved_format = match requested {
            OutputFormat::Auto if stdout_is_tty => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode — errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout. Written even in quiet mode so that
    /// scripted callers always get a parseable result.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn args(quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
            log_file: None,
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        // Human avoids TTY detection in tests
        OutputManager::new(
            &args(quiet, no_color, OutputFormat::Human),
            &AppConfig::default(),
        )
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(false, false, OutputFormat::Human), &config);
        assert!(!out.supports_color());
    }

    #[test]
    fn plain_format_disables_color() {
        let out = OutputManager::new(
            &args(false, false, OutputFormat::Plain),
            &AppConfig::default(),
        );
        assert_eq!(out.format(), OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(false, false, OutputFormat::Auto), &config);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn flag_format_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(false, false, OutputFormat::Plain), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }
}
