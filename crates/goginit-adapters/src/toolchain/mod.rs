//! Toolchain adapters.

mod go;

pub use go::GoToolchain;
