//! Scrollable heightfield grid backed by the terrain noise.

use glam::Vec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::noise::TerrainProfile;

/// A square grid of terrain heights at integer world positions, offset by an
/// accumulated scroll origin.
///
/// Cell (x, z) holds the elevation at world position
/// `(x + origin.x, z + origin.y)`, stored row-major (`z * size + x`).
/// Scrolling only marks the grid stale; [`HeightField::refresh`] regenerates
/// it, so a host that scrolls several times per frame pays for one
/// regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightField {
    /// Grid side length in vertices.
    pub size: u32,
    /// Accumulated world-space scroll offset (x, z).
    pub origin: Vec2,
    /// Height values in row-major order, `size * size` entries.
    pub heights: Vec<f32>,
    /// Whether `heights` is out of date with respect to `origin`.
    #[serde(skip)]
    dirty: bool,
}

impl HeightField {
    /// Creates an ungenerated field of `size * size` vertices at origin (0, 0).
    ///
    /// The field starts dirty; call [`HeightField::refresh`] to fill it.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            origin: Vec2::ZERO,
            heights: vec![0.0; (size as usize) * (size as usize)],
            dirty: true,
        }
    }

    /// Returns the height at grid cell (x, z).
    ///
    /// # Panics
    /// Panics if `x` or `z` is outside the grid.
    pub fn height(&self, x: u32, z: u32) -> f32 {
        assert!(x < self.size && z < self.size, "cell ({}, {}) outside {}x{} grid", x, z, self.size, self.size);
        self.heights[(z * self.size + x) as usize]
    }

    /// Accumulates a world-space scroll offset and marks the grid stale.
    pub fn scroll(&mut self, dx: f32, dz: f32) {
        self.origin += Vec2::new(dx, dz);
        self.dirty = true;
    }

    /// Returns true if the grid needs regeneration.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Regenerates all heights from `profile` if the grid is stale.
    ///
    /// Cells are filled in parallel; the noise functions are pure, so
    /// independent cells need no coordination. Returns whether any work was
    /// done.
    pub fn refresh(&mut self, profile: &TerrainProfile) -> bool {
        if !self.dirty {
            return false;
        }

        // Index math stays in usize: casting i to u32 would wrap for grids
        // wider than 65535 and scatter cells onto wrong coordinates.
        let size = self.size as usize;
        let origin = self.origin;
        self.heights.par_iter_mut().enumerate().for_each(|(i, height)| {
            let x = i % size;
            let z = i / size;
            *height = profile.height_at(x as f32 + origin.x, z as f32 + origin.y);
        });

        self.dirty = false;
        true
    }

    /// Computes the minimum and maximum height across the grid.
    pub fn height_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;

        for &height in &self.heights {
            min = min.min(height);
            max = max.max(height);
        }

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_fills_grid() {
        let profile = TerrainProfile::default();
        let mut field = HeightField::new(32);

        assert!(field.is_dirty());
        assert!(field.refresh(&profile));
        assert!(!field.is_dirty());

        // Heights were generated and vary across the grid.
        let (min, max) = field.height_range();
        assert!(min < max, "grid should have height variation");
    }

    #[test]
    fn test_refresh_is_idempotent_until_scrolled() {
        let profile = TerrainProfile::default();
        let mut field = HeightField::new(16);

        assert!(field.refresh(&profile));
        assert!(!field.refresh(&profile), "clean grid must not regenerate");

        field.scroll(1.5, -2.0);
        assert!(field.is_dirty());
        assert!(field.refresh(&profile));
    }

    #[test]
    fn test_origin_cell_matches_height_at() {
        let profile = TerrainProfile::default();
        let mut field = HeightField::new(8);
        field.refresh(&profile);

        assert_eq!(field.height(0, 0), crate::noise::height_at(0.0, 0.0));
        assert_eq!(field.height(3, 5), crate::noise::height_at(3.0, 5.0));
    }

    #[test]
    fn test_scrolled_grid_samples_offset_positions() {
        let profile = TerrainProfile::default();
        let mut field = HeightField::new(8);
        field.scroll(10.25, -3.5);
        field.refresh(&profile);

        assert_eq!(field.height(2, 6), crate::noise::height_at(2.0 + 10.25, 6.0 - 3.5));
    }

    #[test]
    fn test_regeneration_is_deterministic() {
        let profile = TerrainProfile::default();

        let mut field1 = HeightField::new(24);
        let mut field2 = HeightField::new(24);
        field1.scroll(100.0, 200.0);
        field2.scroll(100.0, 200.0);
        field1.refresh(&profile);
        field2.refresh(&profile);

        assert_eq!(field1.heights, field2.heights);
    }

    #[test]
    fn test_row_major_mapping() {
        // Non-power-of-two width so a wrong stride or truncated index math
        // would misplace every cell past the first row.
        let profile = TerrainProfile::default();
        let mut field = HeightField::new(9);
        field.refresh(&profile);

        assert_eq!(field.height(8, 0), crate::noise::height_at(8.0, 0.0));
        assert_eq!(field.height(0, 1), crate::noise::height_at(0.0, 1.0));
        assert_eq!(field.height(7, 8), crate::noise::height_at(7.0, 8.0));
        assert_eq!(field.heights[9], field.height(0, 1));
    }

    #[test]
    fn test_scroll_accumulates() {
        let mut field = HeightField::new(4);
        field.scroll(1.0, 2.0);
        field.scroll(0.5, -0.5);
        assert_eq!(field.origin, Vec2::new(1.5, 1.5));
    }
}
