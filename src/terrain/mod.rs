//! Terrain module.
//!
//! Provides the scrollable [`HeightField`] grid the host fills from the
//! noise layer.

mod heightfield;

pub use heightfield::HeightField;
