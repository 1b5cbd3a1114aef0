pub mod escape;
pub mod extract;
pub mod generate;
pub mod io;
pub mod models;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use escape::to_c_literal;
pub use extract::extract_blocks;
pub use generate::*;
pub use io::{DEFAULT_EXTENSIONS, IoError};
pub use models::{DocBlock, SourceFile};
pub use render::render_html;
