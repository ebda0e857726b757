//! Implementation of the `goginit list` command.

use goginit_core::domain::{FRAMEWORK_REGISTRY, FrameworkDescriptor};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

const STDLIB: &str = "(standard library)";

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Available Frameworks:")?;
            let width = FRAMEWORK_REGISTRY
                .iter()
                .map(|d| d.key.len())
                .max()
                .unwrap_or(0);
            for descriptor in FRAMEWORK_REGISTRY {
                output.print(&format!(
                    "  {:<width$}  {}",
                    descriptor.key,
                    dependency(descriptor)
                ))?;
            }
        }

        // Machine-readable formats bypass quiet mode.
        ListFormat::Json => output.json(&FRAMEWORK_REGISTRY)?,

        ListFormat::List => {
            for descriptor in FRAMEWORK_REGISTRY {
                println!("{}", descriptor.key);
            }
        }

        ListFormat::Csv => {
            for line in csv_lines() {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn dependency(descriptor: &FrameworkDescriptor) -> &'static str {
    descriptor.dependency.unwrap_or(STDLIB)
}

fn csv_lines() -> Vec<String> {
    std::iter::once("key,dependency".to_string())
        .chain(
            FRAMEWORK_REGISTRY
                .iter()
                .map(|d| format!("{},{}", d.key, d.dependency.unwrap_or_default())),
        )
        .collect()
}
