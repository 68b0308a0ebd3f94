//! Timing probe: brute force vs divide & conquer on seeded clouds.
//!
//! Prints one line per input size with both solver timings and the observed
//! speedup, after asserting that the two distances agree.

use std::time::Instant;

use closest_pair::prelude::*;

fn main() {
    for &n in &[100usize, 1_000, 10_000] {
        let points = draw_cloud(
            n,
            Bounds2::default(),
            ReplayToken {
                seed: 42,
                index: n as u64,
            },
        );

        let start = Instant::now();
        let dc = closest_pair(&points)
            .expect("finite input")
            .expect("at least two points");
        let dc_ms = start.elapsed().as_secs_f64() * 1e3;

        let start = Instant::now();
        let bf = brute_force(&points).expect("at least two points");
        let bf_ms = start.elapsed().as_secs_f64() * 1e3;

        assert!(
            (dc.dist - bf.dist).abs() <= 1e-9,
            "solver disagreement at n={n}: {} vs {}",
            dc.dist,
            bf.dist
        );

        let speedup = if dc_ms > 0.0 { bf_ms / dc_ms } else { f64::INFINITY };
        println!(
            "n={n} dist={:.6} divide_conquer_ms={dc_ms:.3} brute_force_ms={bf_ms:.3} speedup={speedup:.2}",
            dc.dist
        );
    }
}
