//! Scrollable procedural terrain from layered Perlin noise.
//!
//! This crate provides a deterministic, seed-free 2D Perlin noise primitive
//! with a fixed permutation table, a six-octave composition turning it into
//! terrain elevation, and a scrollable heightfield grid a rendering host can
//! regenerate as the camera moves.

pub mod export;
pub mod noise;
pub mod terrain;

pub use export::{export_heightfield_png, PngExportError, PngExportOptions};
pub use noise::{height_at, sample, Octave, TerrainProfile};
pub use terrain::HeightField;
