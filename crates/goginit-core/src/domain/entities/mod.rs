pub mod project_structure;
pub mod template;

pub use project_structure::{LayoutOptions, SkeletonLayout, StubFile};
pub use template::RenderContext;
