//! Closest pair of points in the plane.
//!
//! - `closest_pair`: divide & conquer solver, O(n log n). Splits the
//!   x-sorted input at the median, carries the y-order down by filtering,
//!   and merges across the dividing line with a bounded strip scan.
//! - `brute_force`: O(n²) exhaustive baseline, used as the recursion base
//!   case and as the correctness oracle for tests and comparisons.
//! - `rand`: reproducible point-cloud samplers for benches and demos.
//!
//! Both solvers return `Option<ClosestPair>`: `None` means fewer than two
//! points were supplied, which is a defined outcome rather than an error.
//! The top-level entry additionally rejects non-finite coordinates before
//! any recursion starts.

mod brute;
mod divide;
pub mod rand;
mod types;

pub use brute::brute_force;
pub use divide::closest_pair;
pub use types::{distance, ClosestPair, InputError, Point};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_cloud, draw_clustered, Bounds2, ReplayToken};
    pub use crate::{brute_force, closest_pair, distance, ClosestPair, InputError, Point};
}
