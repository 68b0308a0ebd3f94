//! Exhaustive O(n²) baseline.
//!
//! Serves as the recursion base case (subsets of size ≤ 3) and as the
//! correctness oracle in tests and the comparison harness. Not intended for
//! full-size inputs outside of those roles.

use crate::types::{distance, ClosestPair, Point};

/// Compare every unordered pair once; the first pair found wins ties.
///
/// Returns `None` for fewer than two points. Performs no input validation:
/// boundary checks belong to the top-level entry only.
pub fn brute_force(points: &[Point]) -> Option<ClosestPair> {
    let mut best: Option<ClosestPair> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dist = distance(points[i], points[j]);
            if best.as_ref().is_none_or(|b| dist < b.dist) {
                best = Some(ClosestPair {
                    a: points[i],
                    b: points[j],
                    dist,
                });
            }
        }
    }
    best
}
