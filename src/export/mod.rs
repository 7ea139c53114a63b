//! Export module for saving heightfield data to image files.
//!
//! Supports 16-bit grayscale PNG, which preserves enough height resolution
//! for inspection and for game-engine heightmap imports.

mod png;

pub use png::{export_heightfield_png, PngExportError, PngExportOptions};
