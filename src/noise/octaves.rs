//! Multi-octave terrain height composition over the Perlin primitive.

use serde::{Deserialize, Serialize};

use super::perlin;

/// One frequency/amplitude layer of the terrain composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Octave {
    /// Spatial wavelength in world units; the layer samples at `x / wavelength`.
    pub wavelength: f32,
    /// Contribution of this layer to the octave sum.
    pub amplitude: f32,
}

/// Configuration for composing Perlin octaves into terrain elevation.
///
/// The default profile is the standard terrain recipe: six octaves at
/// wavelengths {256, 64, 32, 16, 8, 4} with amplitudes {64, 32, 16, 8, 4, 2},
/// exponent 1.2, vertical offset 140. The 256 -> 64 wavelength jump is wider
/// than the halving of the remaining layers; that asymmetry is part of the
/// terrain's visual tuning and is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainProfile {
    /// Noise layers, summed per sample.
    pub octaves: Vec<Octave>,
    /// Exponent applied to the octave sum; values above 1 sharpen peaks and
    /// flatten valleys.
    pub exponent: f32,
    /// Subtracted after exponentiation to recenter the terrain around y = 0.
    pub vertical_offset: f32,
}

impl Default for TerrainProfile {
    fn default() -> Self {
        Self {
            octaves: vec![
                Octave { wavelength: 256.0, amplitude: 64.0 },
                Octave { wavelength: 64.0, amplitude: 32.0 },
                Octave { wavelength: 32.0, amplitude: 16.0 },
                Octave { wavelength: 16.0, amplitude: 8.0 },
                Octave { wavelength: 8.0, amplitude: 4.0 },
                Octave { wavelength: 4.0, amplitude: 2.0 },
            ],
            exponent: 1.2,
            vertical_offset: 140.0,
        }
    }
}

impl TerrainProfile {
    /// Computes terrain elevation at world-space (x, z).
    ///
    /// Sums `amplitude * sample(x / wavelength, z / wavelength)` over all
    /// octaves, raises the sum to `exponent`, and subtracts
    /// `vertical_offset`. Pure and deterministic.
    ///
    /// A fractional exponent is only defined for non-negative sums; a profile
    /// whose octave sum goes negative yields NaN there. The value is passed
    /// through rather than clamped.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let sum: f32 = self
            .octaves
            .iter()
            .map(|octave| octave.amplitude * perlin::sample(x / octave.wavelength, z / octave.wavelength))
            .sum();
        sum.powf(self.exponent) - self.vertical_offset
    }
}

/// Computes terrain elevation at (x, z) using the default terrain recipe.
///
/// Equivalent to `TerrainProfile::default().height_at(x, z)` without the
/// profile allocation; the octave constants are spelled out so the hot grid
/// loop stays allocation-free.
pub fn height_at(x: f32, z: f32) -> f32 {
    let sum = 64.0 * perlin::sample(x / 256.0, z / 256.0)
        + 32.0 * perlin::sample(x / 64.0, z / 64.0)
        + 16.0 * perlin::sample(x / 32.0, z / 32.0)
        + 8.0 * perlin::sample(x / 16.0, z / 16.0)
        + 4.0 * perlin::sample(x / 8.0, z / 8.0)
        + 2.0 * perlin::sample(x / 4.0, z / 4.0);
    sum.powf(1.2) - 140.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_constants() {
        let profile = TerrainProfile::default();
        assert_eq!(profile.octaves.len(), 6);
        assert_eq!(profile.octaves[0], Octave { wavelength: 256.0, amplitude: 64.0 });
        assert_eq!(profile.octaves[5], Octave { wavelength: 4.0, amplitude: 2.0 });
        assert_eq!(profile.exponent, 1.2);
        assert_eq!(profile.vertical_offset, 140.0);
    }

    #[test]
    fn test_height_at_origin() {
        // Every octave samples the lattice point (0, 0), where the primitive
        // is exactly 0.5, so the sum is 0.5 * (64+32+16+8+4+2) = 63.
        let expected = (63.0f32).powf(1.2) - 140.0;
        assert_eq!(height_at(0.0, 0.0), expected);
        assert!((expected - 4.2808).abs() < 1e-3);
    }

    #[test]
    fn test_height_at_matches_octave_sum() {
        // The composed value must be the literal sum of the six octave terms.
        let (x, z) = (37.5, -12.25);
        let sum = 64.0 * crate::noise::sample(x / 256.0, z / 256.0)
            + 32.0 * crate::noise::sample(x / 64.0, z / 64.0)
            + 16.0 * crate::noise::sample(x / 32.0, z / 32.0)
            + 8.0 * crate::noise::sample(x / 16.0, z / 16.0)
            + 4.0 * crate::noise::sample(x / 8.0, z / 8.0)
            + 2.0 * crate::noise::sample(x / 4.0, z / 4.0);
        assert_eq!(height_at(x, z), sum.powf(1.2) - 140.0);
    }

    #[test]
    fn test_free_function_matches_default_profile() {
        let profile = TerrainProfile::default();
        for (x, z) in [(0.0, 0.0), (100.5, 200.25), (-33.0, 7.125), (511.0, 511.0)] {
            assert_eq!(height_at(x, z), profile.height_at(x, z));
        }
    }

    #[test]
    fn test_negative_sum_yields_nan() {
        // A profile with a negative amplitude can drive the octave sum below
        // zero; powf with a fractional exponent then returns NaN, and the
        // value is passed through unclamped.
        let profile = TerrainProfile {
            octaves: vec![Octave { wavelength: 16.0, amplitude: -8.0 }],
            exponent: 1.2,
            vertical_offset: 0.0,
        };
        assert!(profile.height_at(0.5, 0.5).is_nan());
    }

    #[test]
    fn test_determinism() {
        let profile = TerrainProfile::default();
        let (x, z) = (123.456, 789.012);
        assert_eq!(profile.height_at(x, z), profile.height_at(x, z));
    }
}
