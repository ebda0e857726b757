//! Spinner feedback for generation steps.

use std::io;
use std::time::Duration;

use goginit_core::application::{GenerationStep, ScaffoldObserver};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::output::OutputManager;

/// Shows the running step on a spinner and prints one line per finished
/// step or notice above it.
pub struct SpinnerObserver<'a> {
    bar: ProgressBar,
    output: &'a OutputManager,
}

impl<'a> SpinnerObserver<'a> {
    /// The spinner is hidden in quiet mode and when stderr is not a terminal;
    /// step lines still go through `output`.
    pub fn new(output: &'a OutputManager) -> Self {
        let bar = if output.is_quiet() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { bar, output }
    }

    /// Remove the spinner line.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn emit(&self, write: impl FnOnce(&OutputManager) -> io::Result<()>) {
        if let Err(e) = self.bar.suspend(|| write(self.output)) {
            debug!(error = %e, "failed to write progress line");
        }
    }
}

impl ScaffoldObserver for SpinnerObserver<'_> {
    fn on_step_started(&self, step: GenerationStep) {
        self.bar.set_message(format!("{}...", capitalize(step.label())));
    }

    fn on_step_completed(&self, step: GenerationStep) {
        self.emit(|out| out.success(&capitalize(step.label())));
    }

    fn on_notice(&self, _step: GenerationStep, message: &str) {
        self.emit(|out| out.info(message));
    }
}

impl Drop for SpinnerObserver<'_> {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::{GlobalArgs, OutputFormat},
        config::AppConfig,
    };

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn capitalizes_labels() {
        assert_eq!(capitalize("tidy modules"), "Tidy modules");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn quiet_observer_is_hidden_and_accepts_events() {
        let output = quiet_output();
        let observer = SpinnerObserver::new(&output);
        assert!(observer.bar.is_hidden());

        observer.on_step_started(GenerationStep::CreateDirectories);
        observer.on_notice(GenerationStep::EnsureManifest, "go.mod already exists");
        observer.on_step_completed(GenerationStep::CreateDirectories);
        observer.finish();

        assert!(observer.bar.is_finished());
    }
}
