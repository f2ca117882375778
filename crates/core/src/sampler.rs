//! Rejection sampling of points inside a closed curve.
//!
//! Draws uniform candidates from a centered square box and keeps those that
//! fall inside the curve, until exactly the requested count is accepted.
//! The loop has no iteration cap: termination is guaranteed by the caller's
//! precondition that the box strictly contains the curve's extent (and the
//! curve encloses non-zero area), which is checked as a debug assertion.

use crate::curve::ClosedCurve;
use crate::prng::SplitMix64;
use glam::DVec2;

/// Samples exactly `count` points uniformly from the interior of `curve`.
///
/// Candidates are drawn from the square `center ± half_extent` on both
/// axes. The returned points double as particle rest positions and initial
/// positions (particles start at rest).
///
/// Precondition: the box must strictly contain `curve.bounds()`. A box
/// that clips the curve skews the distribution; a box disjoint from the
/// interior never terminates.
pub fn sample_interior(
    curve: &ClosedCurve,
    center: DVec2,
    half_extent: f64,
    count: usize,
    rng: &mut SplitMix64,
) -> Vec<DVec2> {
    let (min, max) = curve.bounds();
    debug_assert!(
        min.x >= center.x - half_extent
            && min.y >= center.y - half_extent
            && max.x <= center.x + half_extent
            && max.y <= center.y + half_extent,
        "sampling box must contain the curve extent: box {center}±{half_extent}, curve {min}..{max}"
    );

    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let candidate = DVec2::new(
            rng.next_range(center.x - half_extent, center.x + half_extent),
            rng.next_range(center.y - half_extent, center.y + half_extent),
        );
        if curve.contains(candidate) {
            points.push(candidate);
        }
    }
    points
}
