//! Closed parametric curves flattened to polygons, with interior membership.
//!
//! A `ClosedCurve` evaluates a parametric function `t ↦ (x, y)` over
//! `[0, 2π)` at a fixed angular step into a closed polygon, then answers
//! point-in-region queries with the even-odd rule. The step is fine enough
//! (0.01 rad by default) that consecutive vertices are visually contiguous.

use crate::error::EngineError;
use glam::DVec2;
use std::f64::consts::TAU;

/// A closed polygon obtained by flattening a parametric curve.
#[derive(Debug, Clone)]
pub struct ClosedCurve {
    points: Vec<DVec2>,
}

impl ClosedCurve {
    /// Default angular step for flattening, in radians.
    pub const DEFAULT_STEP: f64 = 0.01;

    /// Flattens `curve` over `[0, 2π)` at the given angular step.
    ///
    /// Returns `EngineError::DegenerateCurve` if the step is non-positive,
    /// non-finite, or coarse enough to yield fewer than 3 vertices.
    pub fn from_parametric<F>(curve: F, step: f64) -> Result<Self, EngineError>
    where
        F: Fn(f64) -> DVec2,
    {
        if !step.is_finite() || step <= 0.0 {
            return Err(EngineError::DegenerateCurve { vertices: 0 });
        }
        let points = flatten(curve, step);
        if points.len() < 3 {
            return Err(EngineError::DegenerateCurve {
                vertices: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// The reference heart silhouette, centered at `center` and scaled by
    /// `scale` (curve units are roughly ±16 in x, −12…+17 in y before
    /// scaling).
    ///
    /// Flattened at [`DEFAULT_STEP`](Self::DEFAULT_STEP), which always
    /// produces a valid polygon.
    pub fn heart(center: DVec2, scale: f64) -> Self {
        let points = flatten(
            |t| {
                let x = 16.0 * t.sin().powi(3);
                let y = 13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos();
                // Screen y grows downward, so the curve's y is negated.
                center + scale * DVec2::new(x, -y)
            },
            Self::DEFAULT_STEP,
        );
        Self { points }
    }

    /// The polygon vertices, in curve-parameter order.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Tests interior membership with the even-odd rule.
    ///
    /// Casts a ray from `point` toward +x and counts edge crossings.
    /// Points exactly on an edge may land on either side.
    pub fn contains(&self, point: DVec2) -> bool {
        let mut inside = false;
        let n = self.points.len();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Axis-aligned bounding box of the polygon as `(min, max)`.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for &p in &self.points {
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }
}

/// Evaluates `curve` at `t = 0, step, 2·step, …` while `t < 2π`.
fn flatten<F>(curve: F, step: f64) -> Vec<DVec2>
where
    F: Fn(f64) -> DVec2,
{
    let mut points = Vec::with_capacity((TAU / step).ceil() as usize);
    let mut t = 0.0;
    while t < TAU {
        points.push(curve(t));
        t += step;
    }
    points
}
