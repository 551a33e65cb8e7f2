pub mod io;
pub mod models;
pub mod navigation;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{content_block::*, course::*, module::*, module_path::*, notebook::*};
pub use navigation::{Direction, navigate, next, outline::*, previous, resolve};
pub use parsing::parse_markup;
