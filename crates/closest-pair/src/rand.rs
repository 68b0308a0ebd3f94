//! Reproducible random point clouds.
//!
//! Purpose
//! - Provide small, deterministic samplers for the benchmarks, examples, and
//!   the comparison CLI. Determinism uses a replay token `(seed, index)`
//!   mixed into a single RNG, so a draw can be regenerated from its token.
//!
//! Model
//! - `draw_cloud`: uniform samples inside an axis-aligned rectangle.
//! - `draw_clustered`: a handful of cluster centers plus small jitter, which
//!   stresses the solver with near-duplicate distances.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Axis-aligned sampling rectangle.
///
/// An axis with `min >= max` collapses to the single coordinate `min`.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            x_min: -100.0,
            x_max: 100.0,
            y_min: -100.0,
            y_max: 100.0,
        }
    }
}

impl Bounds2 {
    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            sample_axis(rng, self.x_min, self.x_max),
            sample_axis(rng, self.y_min, self.y_max),
        )
    }
}

#[inline]
fn sample_axis<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `count` points uniformly inside `bounds`.
pub fn draw_cloud(count: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..count).map(|_| bounds.sample(&mut rng)).collect()
}

/// Draw `count` points around `clusters` random centers with uniform jitter
/// of amplitude `spread` per axis.
///
/// Most points land within `spread` of a shared center, so the minimum
/// pairwise distance is typically far below the cloud diameter.
pub fn draw_clustered(
    count: usize,
    clusters: usize,
    spread: f64,
    bounds: Bounds2,
    tok: ReplayToken,
) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let k = clusters.max(1);
    let s = spread.abs().max(1e-12);
    let centers: Vec<Point> = (0..k).map(|_| bounds.sample(&mut rng)).collect();
    (0..count)
        .map(|_| {
            let c = centers[rng.gen_range(0..k)];
            Point::new(
                c.x + rng.gen_range(-s..s),
                c.y + rng.gen_range(-s..s),
            )
        })
        .collect()
}
