//! Infrastructure adapters for GoGinit.
//!
//! This crate implements the ports defined in `goginit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use toolchain::GoToolchain;
