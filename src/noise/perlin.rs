//! Classic 2D Perlin noise over a fixed 256-cell permutation lattice.
//!
//! Each lattice point is associated with one of eight fixed gradient
//! directions, selected by a double lookup into the permutation table. The
//! value at a point is the quintic-faded bilinear interpolation of the
//! gradient dot products at the four surrounding lattice corners.

/// The standard Perlin permutation of 0..=255, duplicated to 512 entries so
/// corner lookups at `index + 1` never need a wrap check.
const PERMUTATION: [u8; 512] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

#[inline]
fn lerp(w: f32, a: f32, b: f32) -> f32 {
    a * (1.0 - w) + b * w
}

/// Quintic easing curve `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivative at t = 0 and t = 1, which is what gives
/// the interpolated field C2 continuity across lattice-cell boundaries.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Dot product between the gradient selected by the low 3 bits of `hash` and
/// the corner-relative offset (dx, dz).
///
/// The gradient set is fixed: (1,1), (-1,1), (1,-1), (-1,-1), (1,0), (0,1),
/// (-1,0), (0,-1) for hash 0..=7. The diagonals are deliberately left
/// unnormalized; the rendered terrain depends on this exact set.
#[inline]
fn grad(hash: u8, dx: f32, dz: f32) -> f32 {
    match hash & 7 {
        0 => dx + dz,
        1 => -dx + dz,
        2 => dx - dz,
        3 => -dx - dz,
        4 => dx,
        5 => dz,
        6 => -dx,
        _ => -dz,
    }
}

/// Samples 2D Perlin noise at (x, z).
///
/// Pure and deterministic: identical inputs always produce bit-identical
/// outputs, and the lattice repeats every 256 units on both axes. Safe to
/// call concurrently from any number of threads.
///
/// # Arguments
/// * `x`, `z` - Any finite coordinates. Negative values wrap correctly onto
///   the lattice (arithmetic floor, then bitmask).
///
/// # Returns
/// A smoothly varying value nominally in [0, 1]. The result is not clamped;
/// the unnormalized diagonal gradients can push it slightly outside that
/// range in rare cells.
pub fn sample(x: f32, z: f32) -> f32 {
    let grid_x = (x.floor() as i32 & 255) as usize;
    let grid_z = (z.floor() as i32 & 255) as usize;
    let fx = x - x.floor();
    let fz = z - z.floor();
    let u = fade(fx);
    let v = fade(fz);

    let hash_bottom_left = PERMUTATION[PERMUTATION[grid_x] as usize + grid_z];
    let hash_bottom_right = PERMUTATION[PERMUTATION[grid_x + 1] as usize + grid_z];
    let hash_top_left = PERMUTATION[PERMUTATION[grid_x] as usize + grid_z + 1];
    let hash_top_right = PERMUTATION[PERMUTATION[grid_x + 1] as usize + grid_z + 1];

    let dot_bottom_left = grad(hash_bottom_left, fx, fz);
    let dot_bottom_right = grad(hash_bottom_right, fx - 1.0, fz);
    let dot_top_left = grad(hash_top_left, fx, fz - 1.0);
    let dot_top_right = grad(hash_top_right, fx - 1.0, fz - 1.0);

    0.5 * lerp(
        v,
        lerp(u, dot_bottom_left, dot_bottom_right),
        lerp(u, dot_top_left, dot_top_right),
    ) + 0.5
}
