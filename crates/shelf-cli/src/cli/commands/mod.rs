//! CLI command handlers, one per file.

mod cover;
mod cover_path;
mod extensions;

pub use cover::{run_cover, CoverArgs};
pub use cover_path::run_cover_path;
pub use extensions::run_extensions;
