//! Randomized placement of decorations on floor tiles.
//!
//! Torches are sparse, grass is dense; both are jittered off the tile centre
//! so the maze doesn't read as a lattice. Decorations carry no gameplay or
//! collision semantics, so nothing checks spacing between them.
//!
//! The random source is injected, which keeps the scatter deterministic
//! under a seeded generator.

use cgmath::Vector3;
use rand::Rng;

use crate::maze::layout::FLOOR_Y;

/// One torch per this many floor tiles, on average.
pub const TORCH_ODDS: u32 = 8;
/// Number of grass texture variants.
pub const GRASS_VARIANTS: usize = 3;
/// Jitter amplitude in tenths of a world unit: offsets land in
/// `[-0.8, 0.8]` in steps of 0.1.
const JITTER_TENTHS: i32 = 8;

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(-JITTER_TENTHS..=JITTER_TENTHS) as f32 / 10.0
}

/// Place a torch on roughly one floor tile in [`TORCH_ODDS`], jittered
/// independently on X and Z.
pub fn scatter_torches<R: Rng + ?Sized>(
    floors: &[Vector3<f32>],
    rng: &mut R,
) -> Vec<Vector3<f32>> {
    let mut torches = Vec::new();
    for floor in floors {
        if rng.gen_range(0..TORCH_ODDS) != 0 {
            continue;
        }
        let x = floor.x + jitter(rng);
        let z = floor.z + jitter(rng);
        torches.push(Vector3::new(x, FLOOR_Y, z));
    }
    torches
}

/// Place exactly one grass tuft per floor tile, assigned uniformly to one of
/// the [`GRASS_VARIANTS`] variant lists.
pub fn scatter_grass<R: Rng + ?Sized>(
    floors: &[Vector3<f32>],
    rng: &mut R,
) -> [Vec<Vector3<f32>>; GRASS_VARIANTS] {
    let mut variants: [Vec<Vector3<f32>>; GRASS_VARIANTS] = Default::default();
    for floor in floors {
        let x = floor.x + jitter(rng);
        let z = floor.z + jitter(rng);
        let variant = rng.gen_range(0..GRASS_VARIANTS);
        variants[variant].push(Vector3::new(x, FLOOR_Y, z));
    }
    variants
}
