//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `goginit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `Toolchain`: Go module and run commands
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `ScaffoldObserver`: Step progress for the terminal
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, NoopObserver, ScaffoldObserver, TemplateRenderer, Toolchain};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockToolchain};
