//! Framework registry.
//!
//! The set of supported web frameworks is closed and known at build time, so
//! it lives in one immutable table. Each framework is described exactly once
//! by its [`FrameworkDescriptor`]; every lookup is a scan of
//! [`FRAMEWORK_REGISTRY`].
//!
//! # Adding a New Framework
//!
//! 1. Add the entry-point source to `templates.rs`
//! 2. Add one [`FrameworkDescriptor`] entry to [`FRAMEWORK_REGISTRY`]
//!
//! The wizard's choice list, `goginit list`, and the generator all derive from
//! the table, in table order.

use serde::Serialize;

use crate::domain::{error::DomainError, templates};

/// Everything the generator needs to know about one framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameworkDescriptor {
    /// Selection key shown in the wizard and accepted by `--framework`.
    pub key: &'static str,

    /// Module path fetched with `go get`. `None` for the stdlib-only sentinel.
    pub dependency: Option<&'static str>,

    /// Body of `cmd/<name>/main.go`, written verbatim.
    #[serde(skip)]
    pub template: &'static str,
}

impl FrameworkDescriptor {
    /// `true` for the `default` sentinel, which needs no dependency fetch.
    pub fn is_stdlib(&self) -> bool {
        self.dependency.is_none()
    }
}

/// Key of the sentinel descriptor that uses only the Go standard library.
pub const DEFAULT_KEY: &str = "default";

/// Single source of truth for framework descriptors.
pub static FRAMEWORK_REGISTRY: &[FrameworkDescriptor] = &[
    FrameworkDescriptor {
        key: "echo",
        dependency: Some("github.com/labstack/echo/v4"),
        template: templates::ECHO,
    },
    FrameworkDescriptor {
        key: "gin",
        dependency: Some("github.com/gin-gonic/gin"),
        template: templates::GIN,
    },
    FrameworkDescriptor {
        key: "fiber",
        dependency: Some("github.com/gofiber/fiber/v3"),
        template: templates::FIBER,
    },
    FrameworkDescriptor {
        key: "martini",
        dependency: Some("github.com/go-martini/martini"),
        template: templates::MARTINI,
    },
    FrameworkDescriptor {
        key: "chi",
        dependency: Some("github.com/go-chi/chi/v5"),
        template: templates::CHI,
    },
    FrameworkDescriptor {
        key: "mux",
        dependency: Some("github.com/gorilla/mux"),
        template: templates::MUX,
    },
    FrameworkDescriptor {
        key: "gofr",
        dependency: Some("gofr.dev/pkg/gofr"),
        template: templates::GOFR,
    },
    FrameworkDescriptor {
        key: "fuego",
        dependency: Some("github.com/go-fuego/fuego"),
        template: templates::FUEGO,
    },
    FrameworkDescriptor {
        key: DEFAULT_KEY,
        dependency: None,
        template: templates::DEFAULT,
    },
];

/// Resolve a framework key to its descriptor.
///
/// Matching is exact; callers normalise user input before building a spec.
pub fn lookup(key: &str) -> Result<&'static FrameworkDescriptor, DomainError> {
    FRAMEWORK_REGISTRY
        .iter()
        .find(|def| def.key == key)
        .ok_or_else(|| DomainError::UnknownFramework { key: key.into() })
}

/// All framework keys in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    FRAMEWORK_REGISTRY.iter().map(|def| def.key)
}
