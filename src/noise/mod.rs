//! Noise generation module for terrain synthesis.
//!
//! The `perlin` primitive turns a continuous 2D coordinate into a
//! deterministic scalar in roughly [0, 1]; `octaves` layers that primitive
//! into terrain elevation.

mod octaves;
mod perlin;

pub use octaves::{height_at, Octave, TerrainProfile};
pub use perlin::sample;
