pub(crate) mod terminal;

// Public API - utilities used by the renderer and the CLI
pub use terminal::{Color, Palette};
