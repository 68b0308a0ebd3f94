//! Divide & conquer solver for the planar closest pair, O(n log n).
//!
//! Structure
//! - `closest_pair`: validates input, performs the two canonical sorts once,
//!   and calls the recursive driver. This is the only place that sorts the
//!   full input.
//! - `solve`: splits the x-sorted slice at the structural median, partitions
//!   the y-sorted sequence by an order-preserving filter (never a re-sort),
//!   recurses, and merges across the dividing line via `strip_closest`.
//! - `strip_closest`: bounded scan over the candidates near the split line.
//!
//! Sort-order strategy
//! - The y-order is derived once at the top and carried down through
//!   recursion by filtering, so every strip arrives already y-sorted and no
//!   local sort is needed. Each level does O(n) partition work plus an O(k)
//!   strip scan, which keeps the whole recursion at O(n log n).
//!
//! Correctness at the boundary
//! - A pair entirely inside one half is covered by that half's recursive
//!   result. A pair straddling the line can only beat the halves' best `d`
//!   if both endpoints lie within `d` of the line, so it appears in the
//!   strip. Inside the strip, at most a constant number of points fit in a
//!   `d × 2d` rectangle without violating the `≥ d` separation guaranteed
//!   within each half, so the forward scan per point is O(1) amortized.

use std::cmp::Ordering;

use crate::brute::brute_force;
use crate::types::{distance, ClosestPair, InputError, Point};

/// Lexicographic (x, then y) order used for the x-sorted sequence.
#[inline]
fn cmp_xy(p: &Point, q: &Point) -> Ordering {
    (p.x, p.y)
        .partial_cmp(&(q.x, q.y))
        .unwrap_or(Ordering::Equal)
}

/// Lexicographic (y, then x) order used for the y-sorted sequence.
#[inline]
fn cmp_yx(p: &Point, q: &Point) -> Ordering {
    (p.y, p.x)
        .partial_cmp(&(q.y, q.x))
        .unwrap_or(Ordering::Equal)
}

/// Closest pair among `points` by divide & conquer.
///
/// Fails fast with `InputError::NonFiniteCoordinate` if any coordinate is
/// NaN or infinite; returns `Ok(None)` for fewer than two points. Given a
/// fixed input order the result is deterministic; under distance ties the
/// returned pair identity is scan-order-dependent, the distance is not.
pub fn closest_pair(points: &[Point]) -> Result<Option<ClosestPair>, InputError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(InputError::NonFiniteCoordinate { index });
    }
    if points.len() < 2 {
        return Ok(None);
    }
    let mut px = points.to_vec();
    px.sort_by(cmp_xy);
    let mut py = points.to_vec();
    py.sort_by(cmp_yx);
    Ok(solve(&px, &py))
}

/// Recursive driver. `px` is (x, y)-sorted, `py` is (y, x)-sorted, and both
/// hold the same point multiset.
fn solve(px: &[Point], py: &[Point]) -> Option<ClosestPair> {
    debug_assert_eq!(px.len(), py.len());
    if px.len() <= 3 {
        return brute_force(px);
    }

    let mid = px.len() / 2;
    let median = px[mid];

    // Order-preserving partition of `py` into the exact multisets of
    // `px[..mid]` and `px[mid..]`. Points lexicographically equal to the
    // median (coordinate duplicates) are split by count so that
    // |PyLeft| == |PxLeft| even when many points share the split
    // x-coordinate; equal points are interchangeable.
    let mut left_dups = px[..mid]
        .iter()
        .rev()
        .take_while(|&p| cmp_xy(p, &median) == Ordering::Equal)
        .count();
    let mut pyl = Vec::with_capacity(mid);
    let mut pyr = Vec::with_capacity(px.len() - mid);
    for &p in py {
        match cmp_xy(&p, &median) {
            Ordering::Less => pyl.push(p),
            Ordering::Greater => pyr.push(p),
            Ordering::Equal => {
                if left_dups > 0 {
                    left_dups -= 1;
                    pyl.push(p);
                } else {
                    pyr.push(p);
                }
            }
        }
    }
    debug_assert_eq!(pyl.len(), mid);

    // Both halves hold at least two points (len >= 4), so both results exist.
    let left = solve(&px[..mid], &pyl)?;
    let right = solve(&px[mid..], &pyr)?;
    let best = if right.dist < left.dist { right } else { left };

    // Candidates within `best.dist` of the dividing line, taken from the
    // full y-sorted sequence so the strip stays y-sorted.
    let split_x = median.x;
    let strip: Vec<Point> = py
        .iter()
        .copied()
        .filter(|p| (p.x - split_x).abs() < best.dist)
        .collect();

    Some(strip_closest(&strip, best.dist).unwrap_or(best))
}

/// Scan a y-sorted strip for a pair strictly closer than `d`.
///
/// Returns `None` when no crossing pair improves on `d`; callers keep their
/// previous best in that case. The forward scan for each point stops at the
/// first candidate whose y-gap reaches the current best: the sort is
/// monotone, so all later candidates are at least that far away.
pub(crate) fn strip_closest(strip: &[Point], d: f64) -> Option<ClosestPair> {
    debug_assert!(strip.windows(2).all(|w| w[0].y <= w[1].y));
    let mut best: Option<ClosestPair> = None;
    let mut limit = d;
    for i in 0..strip.len() {
        for j in (i + 1)..strip.len() {
            if strip[j].y - strip[i].y >= limit {
                break;
            }
            let dist = distance(strip[i], strip[j]);
            if dist < limit {
                limit = dist;
                best = Some(ClosestPair {
                    a: strip[i],
                    b: strip[j],
                    dist,
                });
            }
        }
    }
    best
}
